//! Mock HTTP transport that answers requests from a registry of responders.
//!
//! [`MockTransport`] implements [`HttpTransport`] so it can replace the network underneath
//! any client in this crate. Each incoming request is reduced to a canonical key (see
//! [`request_key`]) and looked up by exact string equality among the keys registered with
//! [`MockTransport::register_responder`]. A match returns whatever the responder produces,
//! errors included. A miss either fails with [`TransportError::NoResponderFound`] (fail-fast
//! mode) or is passed through to the fallback transport, which is the real network unless
//! configured otherwise.
//!
//! # Canonical key form
//!
//! `METHOD SCHEME://HOST[:PORT]PATH?QUERY`, where the port appears only when the URI spells
//! it, the path is the raw request path (`/` when empty), the `?` is always present, and the
//! query is parsed as `application/x-www-form-urlencoded`, stably sorted by key, and
//! re-serialized. A request to `https://x/y` therefore matches a responder registered for
//! `GET https://x/y?`, and `?b=2&a=1` matches a responder registered with `?a=1&b=2`.
//! Registered URLs are stored verbatim, so they must already be in canonical form.

pub mod global;

mod responder;

pub use responder::*;

// std
use std::sync::atomic::{AtomicBool, Ordering};
// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::TransportError,
	http::{HttpTransport, TransportFuture},
	obs::{self, DispatchOutcome},
};

/// Transport that serves registered responders and optionally falls back to another
/// transport for unmatched requests.
pub struct MockTransport {
	fail_on_unmatched: AtomicBool,
	responders: RwLock<HashMap<String, Responder>>,
	fallback: Option<Arc<dyn HttpTransport>>,
}
impl MockTransport {
	/// Creates a mock that passes unmatched requests through to the real network.
	#[cfg(feature = "reqwest")]
	pub fn new() -> Self {
		Self::with_fallback(crate::http::network_transport())
	}

	/// Creates a mock without a fallback; unmatched requests always fail with
	/// [`TransportError::NoResponderFound`].
	pub fn isolated() -> Self {
		Self::from_parts(None)
	}

	/// Creates a mock that passes unmatched requests to `fallback`.
	pub fn with_fallback(fallback: Arc<dyn HttpTransport>) -> Self {
		Self::from_parts(Some(fallback))
	}

	fn from_parts(fallback: Option<Arc<dyn HttpTransport>>) -> Self {
		Self {
			fail_on_unmatched: AtomicBool::new(false),
			responders: Default::default(),
			fallback,
		}
	}

	/// Sets fail-fast mode while building the mock.
	pub fn fail_on_unmatched(self, fail: bool) -> Self {
		self.set_fail_on_unmatched(fail);

		self
	}

	/// Toggles fail-fast mode on a shared mock.
	pub fn set_fail_on_unmatched(&self, fail: bool) {
		self.fail_on_unmatched.store(fail, Ordering::SeqCst);
	}

	/// Returns `true` when unmatched requests fail instead of passing through.
	pub fn fails_on_unmatched(&self) -> bool {
		self.fail_on_unmatched.load(Ordering::SeqCst)
	}

	/// Registers `responder` for `method` + `url`, replacing any previous entry for that key.
	///
	/// `url` must be fully qualified and in canonical form (see the module docs); it is not
	/// validated.
	pub fn register_responder(
		&self,
		method: impl AsRef<str>,
		url: impl AsRef<str>,
		responder: Responder,
	) {
		let key = format!("{} {}", method.as_ref(), url.as_ref());

		self.responders.write().insert(key, responder);
	}

	/// Number of registered responders.
	pub fn responder_count(&self) -> usize {
		self.responders.read().len()
	}

	fn lookup(&self, key: &str) -> Option<Responder> {
		self.responders.read().get(key).cloned()
	}
}
#[cfg(feature = "reqwest")]
impl Default for MockTransport {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for MockTransport {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MockTransport")
			.field("fail_on_unmatched", &self.fails_on_unmatched())
			.field("responders", &self.responder_count())
			.field("fallback_set", &self.fallback.is_some())
			.finish()
	}
}
impl HttpTransport for MockTransport {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		let key = request_key(&request);

		if let Some(responder) = self.lookup(&key) {
			obs::record_mock_dispatch(&key, DispatchOutcome::Matched);

			let result = responder.respond(&request);

			return Box::pin(async move { result });
		}

		match &self.fallback {
			Some(fallback) if !self.fails_on_unmatched() => {
				obs::record_mock_dispatch(&key, DispatchOutcome::PassThrough);

				fallback.execute(request)
			},
			_ => {
				obs::record_mock_dispatch(&key, DispatchOutcome::Rejected);

				let (method, url) = split_key(key);

				Box::pin(async move {
					Err::<HttpResponse, _>(TransportError::NoResponderFound { method, url })
				})
			},
		}
	}
}

/// Computes the canonical registry key for `request`.
pub fn request_key(request: &HttpRequest) -> String {
	let uri = request.uri();
	let path = match uri.path() {
		"" => "/",
		path => path,
	};
	let mut key = format!("{} {}://", request.method(), uri.scheme_str().unwrap_or_default());

	if let Some(host) = uri.host() {
		key.push_str(host);
	}
	if let Some(port) = uri.port_u16() {
		key.push(':');
		key.push_str(&port.to_string());
	}

	key.push_str(path);
	key.push('?');
	key.push_str(&canonical_query(uri.query().unwrap_or_default()));

	key
}

/// Re-encodes a query string in canonical form: pairs stably sorted by key, then
/// serialized as `application/x-www-form-urlencoded`.
pub fn canonical_query(query: &str) -> String {
	let mut pairs = form_urlencoded::parse(query.as_bytes()).into_owned().collect::<Vec<_>>();

	pairs.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));

	form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish()
}

fn split_key(key: String) -> (String, String) {
	match key.split_once(' ') {
		Some((method, url)) => (method.to_owned(), url.to_owned()),
		None => (String::new(), key),
	}
}
