// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

const STATE_LEN: usize = 32;

/// Authorization handshake metadata returned by
/// [`LinkedIn::start_authorization`](crate::api::LinkedIn::start_authorization).
#[derive(Clone, Debug)]
pub struct AuthorizationSession {
	/// Opaque state value that must round-trip via the redirect handler.
	pub state: String,
	/// Redirect URI LinkedIn sends the member back to; it must be repeated on the exchange.
	pub redirect_uri: String,
	/// Authorize URL callers should send the member to.
	pub authorize_url: Url,
}
impl AuthorizationSession {
	pub(crate) fn new(state: String, redirect_uri: String, authorize_url: Url) -> Self {
		Self { state, redirect_uri, authorize_url }
	}

	/// Validates the `state` parameter returned on the authorization redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state { Ok(()) } else { Err(Error::StateMismatch) }
	}
}

/// Builds the authorize URL with `response_type`, `client_id`, `state`, and `redirect_uri`
/// appended in that order.
pub(crate) fn build_authorize_url(
	authorization: &Url,
	client_id: &str,
	state: &str,
	redirect_uri: &str,
) -> Url {
	let mut url = authorization.clone();
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("response_type", "code");
	pairs.append_pair("client_id", client_id);
	pairs.append_pair("state", state);
	pairs.append_pair("redirect_uri", redirect_uri);

	drop(pairs);

	url
}

/// Generates a random alphanumeric `state` value.
pub(crate) fn random_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}
