//! Transport primitives shared by the API client, the OAuth exchange, and the mock layer.
//!
//! [`HttpTransport`] is the crate's only dependency on an HTTP stack. The API client sends
//! every request through it, and [`TransportHandle`] adapts any implementation to the
//! `oauth2` crate's [`AsyncHttpClient`] so token exchanges travel the same path. With the
//! `reqwest` feature the crate also provides [`ReqwestTransport`] for real network I/O.
//! [`DefaultTransport`] routes to the process-wide mock while it is activated (see
//! [`mock::global`](crate::mock::global)) and to the network otherwise.

// std
#[cfg(feature = "reqwest")] use std::{ops::Deref, sync::LazyLock};
// crates.io
use oauth2::{AsyncHttpClient, HttpClientError};
// self
use crate::{_prelude::*, error::TransportError};

/// Future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over transports able to execute a single HTTP exchange.
///
/// Implementations must be `Send + Sync + 'static` so they can sit behind `Arc` and be
/// shared between clients, and the returned future must be `Send`.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Performs `request` and resolves to the full response (status, headers, body).
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_>;
}
impl<T> HttpTransport for Arc<T>
where
	T: ?Sized + HttpTransport,
{
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		(**self).execute(request)
	}
}

/// Handle that lets the `oauth2` crate run token requests over an [`HttpTransport`].
pub struct TransportHandle<T>(Arc<T>)
where
	T: ?Sized + HttpTransport;
impl<T> TransportHandle<T>
where
	T: ?Sized + HttpTransport,
{
	/// Wraps a shared transport.
	pub fn new(transport: Arc<T>) -> Self {
		Self(transport)
	}
}
impl<T> Clone for TransportHandle<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}
impl<'c, T> AsyncHttpClient<'c> for TransportHandle<T>
where
	T: ?Sized + HttpTransport,
{
	type Error = HttpClientError<TransportError>;
	type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let transport = Arc::clone(&self.0);

		Box::pin(async move {
			transport.execute(request).await.map_err(|e| HttpClientError::Reqwest(Box::new(e)))
		})
	}
}

/// Thin wrapper around [`ReqwestClient`] performing real network I/O.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let response = self.0.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(feature = "reqwest")]
static NETWORK_TRANSPORT: LazyLock<Arc<ReqwestTransport>> =
	LazyLock::new(|| Arc::new(ReqwestTransport::default()));

/// Returns the process-wide transport that performs real network I/O.
#[cfg(feature = "reqwest")]
pub fn network_transport() -> Arc<ReqwestTransport> {
	Arc::clone(&NETWORK_TRANSPORT)
}

/// Transport used by clients that do not bring their own.
///
/// Each request is routed to the process-wide [`MockTransport`](crate::mock::MockTransport)
/// when [`mock::global::activate`](crate::mock::global::activate) is in effect and to
/// the network otherwise. The decision is made per request, so activation also applies to
/// clients built before it. Without the `reqwest` feature there is no network transport and
/// requests made while the mock is inactive fail with [`TransportError::Network`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTransport;
impl HttpTransport for DefaultTransport {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		match crate::mock::global::active_transport() {
			Some(mock) => Box::pin(async move { mock.execute(request).await }),
			#[cfg(feature = "reqwest")]
			None => {
				let network = network_transport();

				Box::pin(async move { network.execute(request).await })
			},
			#[cfg(not(feature = "reqwest"))]
			None => Box::pin(async move {
				let _ = request;

				Err::<HttpResponse, _>(TransportError::network(std::io::Error::other(
					"network transport requires the `reqwest` feature",
				)))
			}),
		}
	}
}
