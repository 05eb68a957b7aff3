// self
use crate::{
	_prelude::*,
	api::LinkedIn,
	auth::{self, AuthorizationSession, TokenRecord},
	error::ConfigError,
	http::HttpTransport,
	oauth,
	obs::{self, CallKind},
};

impl<T> LinkedIn<T>
where
	T: ?Sized + HttpTransport,
{
	/// Builds the URL the member must visit to authorize the application.
	pub fn authorize_url(&self, state: &str, redirect_uri: &str) -> Url {
		auth::session::build_authorize_url(
			&self.endpoints().authorization,
			&self.credentials().client_id,
			state,
			redirect_uri,
		)
	}

	/// Starts an authorization handshake with a freshly generated `state`.
	pub fn start_authorization(&self, redirect_uri: impl Into<String>) -> AuthorizationSession {
		let redirect_uri = redirect_uri.into();
		let state = auth::session::random_state();
		let authorize_url = self.authorize_url(&state, &redirect_uri);

		AuthorizationSession::new(state, redirect_uri, authorize_url)
	}

	/// Builds a `302 Found` response redirecting the member to the authorize URL.
	pub fn authorization_redirect(&self, state: &str, redirect_uri: &str) -> Result<HttpResponse> {
		let location = self.authorize_url(state, redirect_uri);

		oauth2::http::Response::builder()
			.status(StatusCode::FOUND)
			.header(oauth2::http::header::LOCATION, location.as_str())
			.body(Vec::new())
			.map_err(|e| ConfigError::from(e).into())
	}

	/// Exchanges an authorization `code` for tokens and installs the access token.
	///
	/// `redirect_uri` must be the value used when building the authorize URL.
	pub async fn retrieve_access_token(
		&mut self,
		code: &str,
		redirect_uri: &str,
	) -> Result<TokenRecord> {
		let record = obs::observe_call(
			CallKind::AccessToken,
			"retrieve_access_token",
			oauth::exchange_authorization_code(
				&self.endpoints().token,
				self.credentials(),
				Arc::clone(self.transport()),
				code,
				redirect_uri,
			),
		)
		.await?;

		self.set_token(record.access_token.expose());

		Ok(record)
	}
}
