//! Endpoint configuration for the LinkedIn API client.

// self
use crate::_prelude::*;

/// Default REST API root.
pub const DEFAULT_API_ROOT: &str = "https://api.linkedin.com";
/// Default OAuth 2.0 authorization endpoint.
pub const DEFAULT_AUTHORIZATION_ENDPOINT: &str = "https://www.linkedin.com/uas/oauth2/authorization";
/// Default OAuth 2.0 token endpoint.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://www.linkedin.com/uas/oauth2/accessToken";

/// Errors raised while constructing or validating [`ApiEndpoints`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EndpointsError {
	/// Endpoint string could not be parsed.
	#[error("The {endpoint} endpoint `{url}` is not a valid URL.")]
	InvalidUrl {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Offending input.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// The API root is a prefix for request paths and cannot carry a query or fragment.
	#[error("The API root must not carry a query or fragment: {url}.")]
	ApiRootNotABase {
		/// API root that failed validation.
		url: String,
	},
}

/// Hosts and paths the client talks to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
	/// Root that request paths such as `/v1/people/~` are appended to.
	pub api_root: Url,
	/// Authorization endpoint the member is redirected to.
	pub authorization: Url,
	/// Token endpoint used for the authorization code exchange.
	pub token: Url,
}
impl ApiEndpoints {
	/// Creates a builder seeded with LinkedIn's production endpoints.
	pub fn builder() -> ApiEndpointsBuilder {
		ApiEndpointsBuilder::default()
	}

	/// Returns LinkedIn's production endpoints.
	pub fn linkedin() -> Result<Self, EndpointsError> {
		Self::builder().build()
	}

	fn validate(&self) -> Result<(), EndpointsError> {
		validate_https("api root", &self.api_root)?;
		validate_https("authorization", &self.authorization)?;
		validate_https("token", &self.token)?;

		if self.api_root.query().is_some() || self.api_root.fragment().is_some() {
			return Err(EndpointsError::ApiRootNotABase { url: self.api_root.to_string() });
		}

		Ok(())
	}
}

/// Builder for [`ApiEndpoints`]; unset endpoints fall back to LinkedIn's production hosts.
#[derive(Clone, Debug, Default)]
pub struct ApiEndpointsBuilder {
	/// Overrides the REST API root.
	pub api_root: Option<Url>,
	/// Overrides the authorization endpoint.
	pub authorization: Option<Url>,
	/// Overrides the token endpoint.
	pub token: Option<Url>,
}
impl ApiEndpointsBuilder {
	/// Sets the REST API root.
	pub fn api_root(mut self, url: Url) -> Self {
		self.api_root = Some(url);

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorization(mut self, url: Url) -> Self {
		self.authorization = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token(mut self, url: Url) -> Self {
		self.token = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting endpoints.
	pub fn build(self) -> Result<ApiEndpoints, EndpointsError> {
		let endpoints = ApiEndpoints {
			api_root: or_default("api root", self.api_root, DEFAULT_API_ROOT)?,
			authorization: or_default(
				"authorization",
				self.authorization,
				DEFAULT_AUTHORIZATION_ENDPOINT,
			)?,
			token: or_default("token", self.token, DEFAULT_TOKEN_ENDPOINT)?,
		};

		endpoints.validate()?;

		Ok(endpoints)
	}
}

fn or_default(
	endpoint: &'static str,
	url: Option<Url>,
	default: &str,
) -> Result<Url, EndpointsError> {
	match url {
		Some(url) => Ok(url),
		None => Url::parse(default).map_err(|source| EndpointsError::InvalidUrl {
			endpoint,
			url: default.to_owned(),
			source,
		}),
	}
}

fn validate_https(endpoint: &'static str, url: &Url) -> Result<(), EndpointsError> {
	if url.scheme() != "https" {
		Err(EndpointsError::InsecureEndpoint { endpoint, url: url.to_string() })
	} else {
		Ok(())
	}
}
