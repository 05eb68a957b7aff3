//! Process-wide mock shared by every [`DefaultTransport`](crate::http::DefaultTransport).
//!
//! The shared [`MockTransport`] is created lazily and lives for the whole process. Its
//! registry is never cleared; re-registering a key overwrites it. While the layer is
//! activated, clients that use [`DefaultTransport`](crate::http::DefaultTransport) send
//! every request through the shared mock; after [`deactivate`] they talk to the network
//! again. Unmatched requests pass through to the network unless `fail_on_unmatched` was
//! requested on activation.

// std
use std::sync::{
	LazyLock,
	atomic::{AtomicBool, Ordering},
};
// self
use crate::{
	_prelude::*,
	mock::{MockTransport, Responder},
};

static DEFAULT_MOCK: LazyLock<Arc<MockTransport>> = LazyLock::new(|| Arc::new(shared_mock()));
static ACTIVE: AtomicBool = AtomicBool::new(false);

#[cfg(feature = "reqwest")]
fn shared_mock() -> MockTransport {
	MockTransport::new()
}
#[cfg(not(feature = "reqwest"))]
fn shared_mock() -> MockTransport {
	MockTransport::isolated()
}

/// Installs the shared mock behind [`DefaultTransport`](crate::http::DefaultTransport) and
/// sets its fail-fast flag.
pub fn activate(fail_on_unmatched: bool) {
	DEFAULT_MOCK.set_fail_on_unmatched(fail_on_unmatched);
	ACTIVE.store(true, Ordering::SeqCst);
}

/// Restores the real network behind [`DefaultTransport`](crate::http::DefaultTransport).
///
/// Registered responders are kept for the next activation.
pub fn deactivate() {
	ACTIVE.store(false, Ordering::SeqCst);
}

/// Returns `true` while the shared mock is installed.
pub fn is_active() -> bool {
	ACTIVE.load(Ordering::SeqCst)
}

/// Registers `responder` on the shared mock.
pub fn register_responder(method: impl AsRef<str>, url: impl AsRef<str>, responder: Responder) {
	DEFAULT_MOCK.register_responder(method, url, responder);
}

/// Returns the shared mock.
pub fn default_mock_transport() -> Arc<MockTransport> {
	Arc::clone(&DEFAULT_MOCK)
}

pub(crate) fn active_transport() -> Option<Arc<MockTransport>> {
	is_active().then(default_mock_transport)
}
