//! Optional observability helpers for API calls and mock dispatch.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `linkedin_api.call` with the `call`
//!   (endpoint family) and `stage` (call site) fields, plus a `debug` event for every request
//!   a [`MockTransport`](crate::mock::MockTransport) dispatches. Failed calls also emit a
//!   `warn` event.
//! - Enable `metrics` to increment the `linkedin_api_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`, and the
//!   `linkedin_api_mock_dispatch_total` counter labeled by `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// API call families observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Authorization code exchange against the token endpoint.
	AccessToken,
	/// Member profile lookup.
	Profile,
	/// Member connections lookup.
	Connections,
	/// Group lookup.
	Group,
	/// Arbitrary endpoint requested through `raw`.
	Raw,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::AccessToken => "access_token",
			CallKind::Profile => "profile",
			CallKind::Connections => "connections",
			CallKind::Group => "group",
			CallKind::Raw => "raw",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client method.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// How a mock transport handled a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
	/// A registered responder answered.
	Matched,
	/// No responder matched; the request went to the fallback transport.
	PassThrough,
	/// No responder matched and the request failed with `NoResponderFound`.
	Rejected,
}
impl DispatchOutcome {
	/// Returns a stable label suitable for event or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DispatchOutcome::Matched => "matched",
			DispatchOutcome::PassThrough => "pass_through",
			DispatchOutcome::Rejected => "rejected",
		}
	}
}
impl Display for DispatchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs one client call inside a [`CallSpan`], recording its attempt and outcome.
///
/// Failures also emit a `warn` event before they reach the caller.
pub async fn observe_call<Fut, T>(kind: CallKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	record_call_outcome(kind, CallOutcome::Attempt);

	let result = CallSpan::new(kind, stage).instrument(fut).await;

	match &result {
		Ok(_) => record_call_outcome(kind, CallOutcome::Success),
		Err(e) => {
			trace_call_failure(kind, e);
			record_call_outcome(kind, CallOutcome::Failure);
		},
	}

	result
}

/// Reports a mock dispatch to every enabled backend.
pub fn record_mock_dispatch(key: &str, outcome: DispatchOutcome) {
	trace_mock_dispatch(key, outcome);
	count_mock_dispatch(outcome);
}
