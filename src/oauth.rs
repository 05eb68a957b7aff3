//! Authorization-code exchange against LinkedIn's token endpoint via the `oauth2` crate.

// crates.io
use oauth2::{
	AccessToken, AuthType, AuthorizationCode, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
	HttpClientError, RefreshToken, RequestTokenError, Scope, TokenResponse, TokenUrl,
	basic::{
		BasicErrorResponse, BasicErrorResponseType, BasicRevocationErrorResponse,
		BasicTokenIntrospectionResponse, BasicTokenType,
	},
};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenRecord},
	error::{ConfigError, TransportError},
	http::{HttpTransport, TransportHandle},
};

type LinkedInOAuthClient = oauth2::Client<
	BasicErrorResponse,
	LinkedInTokenResponse,
	BasicTokenIntrospectionResponse,
	oauth2::StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointSet,
>;
type ExchangeError = RequestTokenError<HttpClientError<TransportError>, BasicErrorResponse>;

/// Token endpoint payload.
///
/// LinkedIn omits `token_type`, so it defaults to bearer instead of failing the parse.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinkedInTokenResponse {
	access_token: AccessToken,
	#[serde(default = "bearer")]
	token_type: BasicTokenType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	expires_in: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	refresh_token: Option<RefreshToken>,
}
impl TokenResponse for LinkedInTokenResponse {
	type TokenType = BasicTokenType;

	fn access_token(&self) -> &AccessToken {
		&self.access_token
	}

	fn token_type(&self) -> &Self::TokenType {
		&self.token_type
	}

	fn expires_in(&self) -> Option<std::time::Duration> {
		self.expires_in.map(std::time::Duration::from_secs)
	}

	fn refresh_token(&self) -> Option<&RefreshToken> {
		self.refresh_token.as_ref()
	}

	fn scopes(&self) -> Option<&Vec<Scope>> {
		None
	}
}

fn bearer() -> BasicTokenType {
	BasicTokenType::Bearer
}

/// Exchanges `code` for tokens, sending the client credentials in the request body.
pub(crate) async fn exchange_authorization_code<T>(
	token_url: &Url,
	credentials: &Credentials,
	transport: Arc<T>,
	code: &str,
	redirect_uri: &str,
) -> Result<TokenRecord>
where
	T: ?Sized + HttpTransport,
{
	let client: LinkedInOAuthClient = oauth2::Client::new(ClientId::new(
		credentials.client_id.clone(),
	))
	.set_client_secret(ClientSecret::new(credentials.client_secret.expose().to_owned()))
	.set_auth_type(AuthType::RequestBody)
	.set_token_uri(TokenUrl::from_url(token_url.clone()));
	let handle = TransportHandle::new(transport);
	let response = client
		.exchange_code(AuthorizationCode::new(code.to_owned()))
		.add_extra_param("redirect_uri", redirect_uri.to_owned())
		.request_async(&handle)
		.await
		.map_err(map_request_error)?;

	map_token_response(response, OffsetDateTime::now_utc())
}

fn map_token_response(
	response: LinkedInTokenResponse,
	issued_at: OffsetDateTime,
) -> Result<TokenRecord> {
	let mut record = TokenRecord::new(response.access_token.secret().to_owned(), issued_at);

	if let Some(secs) = response.expires_in {
		record = i64::try_from(secs)
			.ok()
			.and_then(|secs| record.expiring_in(Duration::seconds(secs)))
			.ok_or_else(|| Error::TokenEndpoint {
				message: format!("`expires_in` value {secs} is out of range"),
				status: None,
			})?;
	}

	if let Some(refresh) = response.refresh_token {
		record = record.with_refresh_token(refresh.secret().to_owned());
	}

	Ok(record)
}

fn map_request_error(err: ExchangeError) -> Error {
	match err {
		RequestTokenError::ServerResponse(response) => map_server_response_error(response),
		RequestTokenError::Request(error) => map_transport_error(error),
		RequestTokenError::Parse(source, _body) => Error::ResponseParse { source, status: None },
		RequestTokenError::Other(message) => Error::TokenEndpoint { message, status: None },
	}
}

fn map_server_response_error(response: BasicErrorResponse) -> Error {
	let reason = match response.error_description() {
		Some(description) => description.clone(),
		None => response.error().as_ref().to_owned(),
	};

	match response.error() {
		BasicErrorResponseType::InvalidGrant => Error::InvalidGrant { reason },
		BasicErrorResponseType::InvalidClient | BasicErrorResponseType::UnauthorizedClient =>
			Error::InvalidClient { reason },
		_ => Error::TokenEndpoint { message: reason, status: None },
	}
}

fn map_transport_error(err: HttpClientError<TransportError>) -> Error {
	match err {
		HttpClientError::Reqwest(inner) => Error::Transport(*inner),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => Error::TokenEndpoint { message, status: None },
		_ => Error::TokenEndpoint {
			message: "HTTP client error occurred while calling the token endpoint".into(),
			status: None,
		},
	}
}
