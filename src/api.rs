//! LinkedIn REST client: URL construction, the JSON request cycle, and the typed endpoints.
//!
//! [`LinkedIn`] is generic over its [`HttpTransport`] so tests can swap the network for a
//! [`MockTransport`](crate::mock::MockTransport) without touching the call sites. Every call
//! appends the stored access token as `oauth2_access_token`, asks for JSON through the
//! `x-li-format` header, and parses the body into a JSON object. Bodies carrying LinkedIn's
//! `errorCode` field surface as [`ApiError`].

pub mod endpoint;

mod authorization;
mod group;
mod people;

pub use endpoint::*;

// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenSecret},
	config::ApiEndpoints,
	error::{ApiError, ConfigError},
	http::{DefaultTransport, HttpTransport},
	obs::{self, CallKind},
};

/// Decoded JSON object returned by every endpoint.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

const ACCESS_TOKEN_PARAM: &str = "oauth2_access_token";
const FORMAT_HEADER: &str = "x-li-format";
const RELATIVE_BASE: &str = "http://localhost/";

/// Client bound to one LinkedIn application and, once authorized, one access token.
pub struct LinkedIn<T = DefaultTransport>
where
	T: ?Sized + HttpTransport,
{
	transport: Arc<T>,
	endpoints: ApiEndpoints,
	credentials: Credentials,
	token: Option<TokenSecret>,
}
impl LinkedIn<DefaultTransport> {
	/// Creates a client for LinkedIn's production endpoints over [`DefaultTransport`].
	pub fn new(credentials: Credentials) -> Result<Self> {
		let endpoints = ApiEndpoints::linkedin().map_err(ConfigError::from)?;

		Ok(Self::with_transport(credentials, endpoints, Arc::new(DefaultTransport)))
	}
}
impl<T> LinkedIn<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a client that sends every request through `transport`.
	pub fn with_transport(
		credentials: Credentials,
		endpoints: ApiEndpoints,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self { transport: transport.into(), endpoints, credentials, token: None }
	}

	/// Replaces the application credentials.
	pub fn set_credentials(&mut self, credentials: Credentials) {
		self.credentials = credentials;
	}

	/// Application credentials in use.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Installs the access token appended to every API call.
	pub fn set_token(&mut self, token: impl Into<String>) {
		self.token = Some(TokenSecret::new(token));
	}

	/// Access token in use, if any.
	pub fn token(&self) -> Option<&TokenSecret> {
		self.token.as_ref()
	}

	/// Endpoints the client talks to.
	pub fn endpoints(&self) -> &ApiEndpoints {
		&self.endpoints
	}

	/// Transport every request goes through.
	pub fn transport(&self) -> &Arc<T> {
		&self.transport
	}

	/// Requests an arbitrary endpoint.
	///
	/// `endpoint` may be a path such as `/v1/people/~` or a full URL; only its path and query
	/// are kept and re-rooted on the configured API root.
	pub async fn raw(&self, endpoint: &str) -> Result<JsonObject> {
		let url = parse_endpoint(endpoint)?;

		self.raw_url(&url).await
	}

	/// Requests the path and query of `url` on the configured API root.
	pub async fn raw_url(&self, url: &Url) -> Result<JsonObject> {
		self.call(CallKind::Raw, "raw", url.path(), url.query(), &[]).await
	}

	/// Builds the request URL for `path` plus optional query and extra parameters.
	pub fn request_url(
		&self,
		path: &str,
		query: Option<&str>,
		params: &[(String, String)],
	) -> Result<Url> {
		let token = self.token.as_ref().ok_or(ConfigError::MissingAccessToken)?;
		let mut url = self.endpoints.api_root.clone();
		let root = url.path().trim_end_matches('/').to_owned();

		url.set_path(&format!("{root}{path}"));
		url.set_query(query.filter(|query| !query.is_empty()));

		let mut pairs = url.query_pairs_mut();

		for (key, value) in params {
			pairs.append_pair(key, value);
		}

		pairs.append_pair(ACCESS_TOKEN_PARAM, token.expose());

		drop(pairs);

		Ok(url)
	}

	pub(crate) async fn call(
		&self,
		kind: CallKind,
		stage: &'static str,
		path: &str,
		query: Option<&str>,
		params: &[(String, String)],
	) -> Result<JsonObject> {
		obs::observe_call(kind, stage, async move {
			let url = self.request_url(path, query, params)?;

			self.get_json(&url).await
		})
		.await
	}

	async fn get_json(&self, url: &Url) -> Result<JsonObject> {
		let request = oauth2::http::Request::builder()
			.method(Method::GET)
			.uri(url.as_str())
			.header(FORMAT_HEADER, "json")
			.body(Vec::new())
			.map_err(ConfigError::from)?;
		let response = self.transport.execute(request).await?;

		parse_response(response.status(), response.body())
	}
}
impl<T> Clone for LinkedIn<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			endpoints: self.endpoints.clone(),
			credentials: self.credentials.clone(),
			token: self.token.clone(),
		}
	}
}
impl<T> Debug for LinkedIn<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LinkedIn")
			.field("endpoints", &self.endpoints)
			.field("credentials", &self.credentials)
			.field("token", &self.token)
			.finish()
	}
}

// Relative endpoints only contribute their path and query; the host is discarded.
fn parse_endpoint(endpoint: &str) -> Result<Url> {
	let invalid = |source| ConfigError::InvalidUrl { url: endpoint.into(), source };

	match Url::parse(endpoint) {
		Ok(url) => Ok(url),
		Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
			.and_then(|base| base.join(endpoint))
			.map_err(|source| invalid(source).into()),
		Err(source) => Err(invalid(source).into()),
	}
}

fn parse_response(status: StatusCode, body: &[u8]) -> Result<JsonObject> {
	let mut deserializer = serde_json::Deserializer::from_slice(body);
	let payload: JsonObject = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source, status: Some(status.as_u16()) })?;

	if let Some(err) = ApiError::from_payload(status, &payload, body) {
		return Err(err.into());
	}

	Ok(payload)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::*,
		mock::{MockTransport, Responder},
	};

	#[test]
	fn request_url_appends_token_last() {
		let (client, _) = build_mock_linkedin();
		let url = client
			.request_url("/v1/people/~/connections", Some("start=0"), &[("count".into(), "10".into())])
			.expect("URL should build.");

		assert_eq!(
			url.as_str(),
			"https://api.linkedin.com/v1/people/~/connections?start=0&count=10&oauth2_access_token=token-test"
		);
	}

	#[test]
	fn request_url_requires_token() {
		let client = LinkedIn::<MockTransport>::with_transport(
			Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET),
			ApiEndpoints::linkedin().expect("Default endpoints should validate."),
			MockTransport::isolated(),
		);
		let err = client.request_url("/v1/people/~", None, &[]).expect_err("Token is required.");

		assert!(matches!(err, Error::Config(ConfigError::MissingAccessToken)));
	}

	#[test]
	fn relative_endpoints_keep_only_path_and_query() {
		assert_eq!(
			parse_endpoint("v1/people/~?a=1").expect("Relative path should parse.").path(),
			"/v1/people/~"
		);
		assert_eq!(
			parse_endpoint("/v1/groups/7").expect("Absolute path should parse.").path(),
			"/v1/groups/7"
		);
	}

	#[test]
	fn parse_response_rejects_non_objects() {
		let err = parse_response(StatusCode::OK, b"[1,2]").expect_err("Arrays are not objects.");

		assert!(matches!(err, Error::ResponseParse { status: Some(200), .. }));
	}

	#[tokio::test]
	async fn raw_keeps_only_path_and_query() {
		let (client, transport) = build_mock_linkedin();

		transport.register_responder(
			"GET",
			"https://api.linkedin.com/v1/people/~?format=json&oauth2_access_token=token-test",
			Responder::json(StatusCode::OK, &serde_json::json!({ "id": "me" })),
		);

		let payload = client
			.raw("http://elsewhere.example.com/v1/people/~?format=json")
			.await
			.expect("Re-rooted request should match the responder.");

		assert_eq!(payload.get("id"), Some(&serde_json::json!("me")));
	}

	#[tokio::test]
	async fn error_code_payload_becomes_api_error() {
		let (client, transport) = build_mock_linkedin();

		transport.register_responder(
			"GET",
			"https://api.linkedin.com/v1/people/~?oauth2_access_token=token-test",
			Responder::json(
				StatusCode::UNAUTHORIZED,
				&serde_json::json!({
					"errorCode": 0,
					"message": "Invalid access token.",
					"requestId": "R1",
					"status": 401
				}),
			),
		);

		let err = client.raw("/v1/people/~").await.expect_err("Error payload should fail.");

		assert!(matches!(err, Error::Api(ref api) if api.status == 401 && api.error_code == 0));
	}
}
