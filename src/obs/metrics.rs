// self
use crate::obs::{CallKind, CallOutcome, DispatchOutcome};

/// Increments `linkedin_api_call_total{call, outcome}`.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"linkedin_api_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Increments `linkedin_api_mock_dispatch_total{outcome}`.
pub fn count_mock_dispatch(outcome: DispatchOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("linkedin_api_mock_dispatch_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn counters_accept_every_label() {
		for kind in [
			CallKind::AccessToken,
			CallKind::Profile,
			CallKind::Connections,
			CallKind::Group,
			CallKind::Raw,
		] {
			record_call_outcome(kind, CallOutcome::Attempt);
		}
		for outcome in [DispatchOutcome::Matched, DispatchOutcome::PassThrough, DispatchOutcome::Rejected]
		{
			count_mock_dispatch(outcome);
		}
	}
}
