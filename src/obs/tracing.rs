// self
use crate::{
	_prelude::*,
	obs::{CallKind, DispatchOutcome},
};

/// Future returned by [`CallSpan::instrument`]; instrumented only with the `tracing` feature.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`CallSpan::instrument`]; instrumented only with the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// `linkedin_api.call` span covering one client call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens a span labeled with the endpoint family and the client method.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("linkedin_api.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Runs `fut` inside the span; no guard is held across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `warn` event for a failed call, carrying the error's display form.
pub fn trace_call_failure(kind: CallKind, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(call = kind.as_str(), error = %error, "LinkedIn call failed");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}

/// Emits a `debug` event describing a mock dispatch.
pub fn trace_mock_dispatch(key: &str, outcome: DispatchOutcome) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(request = key, outcome = outcome.as_str(), "mock transport dispatch");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, outcome);
	}
}
