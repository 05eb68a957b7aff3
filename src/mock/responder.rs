// std
use std::io;
// self
use crate::{_prelude::*, error::TransportError};

type RespondFn = dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// Canned reply attached to a registry key of a [`MockTransport`](super::MockTransport).
///
/// A responder sees the full request and returns either a response or a transport error.
/// Cloning is cheap; clones share the same closure.
#[derive(Clone)]
pub struct Responder(Arc<RespondFn>);
impl Responder {
	/// Wraps an arbitrary closure.
	pub fn new<F>(f: F) -> Self
	where
		F: 'static + Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync,
	{
		Self(Arc::new(f))
	}

	/// Replies with `status` and a fixed body.
	pub fn bytes(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
		let body = body.into();

		Self::new(move |_| Ok(build_response(status, None, body.clone())))
	}

	/// Replies with `status` and a fixed text body.
	pub fn string(status: StatusCode, body: impl Into<String>) -> Self {
		Self::bytes(status, body.into().into_bytes())
	}

	/// Replies with `status` and `value` serialized as JSON, tagged
	/// `content-type: application/json`.
	pub fn json(status: StatusCode, value: &serde_json::Value) -> Self {
		let body = value.to_string().into_bytes();

		Self::new(move |_| Ok(build_response(status, Some("application/json"), body.clone())))
	}

	/// Fails every matching request with a simulated network error.
	pub fn network_error(message: impl Into<String>) -> Self {
		let message = message.into();

		Self::new(move |_| Err(TransportError::network(io::Error::other(message.clone()))))
	}

	/// Produces the reply for `request`.
	pub fn respond(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
		(self.0)(request)
	}
}
impl Debug for Responder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Responder(..)")
	}
}

fn build_response(
	status: StatusCode,
	content_type: Option<&'static str>,
	body: Vec<u8>,
) -> HttpResponse {
	let mut response = HttpResponse::new(body);

	*response.status_mut() = status;

	if let Some(content_type) = content_type {
		response.headers_mut().insert(
			oauth2::http::header::CONTENT_TYPE,
			oauth2::http::HeaderValue::from_static(content_type),
		);
	}

	response
}
