//! Crate-level error types shared by the transport, mock, OAuth, and API layers.

// self
use crate::{_prelude::*, config::EndpointsError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, or a mock transport miss).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// LinkedIn answered with an error payload.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Response body could not be parsed into the expected JSON shape.
	#[error("Response body could not be parsed.")]
	ResponseParse {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response, when known.
		status: Option<u16>,
	},

	/// Token endpoint rejected the authorization code.
	#[error("Token endpoint rejected the grant: {reason}.")]
	InvalidGrant {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Token endpoint rejected the client credentials.
	#[error("Client authentication failed: {reason}.")]
	InvalidClient {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Token endpoint returned an unexpected response.
	#[error("Token endpoint returned an unexpected response: {message}.")]
	TokenEndpoint {
		/// Summary of the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Returned `state` does not match the one sent with the authorization request.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Endpoint configuration is invalid.
	#[error(transparent)]
	Endpoints(#[from] EndpointsError),
	/// A request URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending input.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An API call was attempted before an access token was set.
	#[error("No access token has been set on the client.")]
	MissingAccessToken,
}

/// Transport-level failures (network, IO, unmatched mock requests).
///
/// Mock misses travel through the same type as real network faults, so callers observe
/// both on the same channel.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// A [`MockTransport`](crate::mock::MockTransport) found no responder and was configured
	/// to fail instead of passing the request through.
	#[error("No responder found for `{method} {url}`.")]
	NoResponderFound {
		/// Request method.
		method: String,
		/// Canonical request URL used for the lookup.
		url: String,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling LinkedIn.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling LinkedIn.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Returns `true` when the error is a mock transport miss.
	pub fn is_no_responder(&self) -> bool {
		matches!(self, Self::NoResponderFound { .. })
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Error payload returned by LinkedIn (`{"errorCode": .., "message": .., ..}`).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("LinkedIn API error {error_code} (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct ApiError {
	/// HTTP status reported in the payload, or the response status when absent.
	pub status: u16,
	/// LinkedIn `errorCode` field.
	pub error_code: i64,
	/// LinkedIn `message` field.
	pub message: Option<String>,
	/// LinkedIn `requestId` field.
	pub request_id: Option<String>,
	/// Raw response body.
	pub body: String,
}
impl ApiError {
	/// Builds an [`ApiError`] from a decoded payload when it carries `errorCode`.
	pub fn from_payload(
		status: StatusCode,
		payload: &serde_json::Map<String, serde_json::Value>,
		body: &[u8],
	) -> Option<Self> {
		let error_code = payload.get("errorCode")?;

		Some(Self {
			status: payload
				.get("status")
				.and_then(serde_json::Value::as_u64)
				.and_then(|status| u16::try_from(status).ok())
				.unwrap_or(status.as_u16()),
			error_code: error_code.as_i64().unwrap_or_default(),
			message: payload.get("message").and_then(serde_json::Value::as_str).map(Into::into),
			request_id: payload
				.get("requestId")
				.and_then(serde_json::Value::as_str)
				.map(Into::into),
			body: String::from_utf8_lossy(body).into_owned(),
		})
	}
}
