// self
use crate::{_prelude::*, auth::TokenSecret};

/// OAuth 2.0 application credentials issued by LinkedIn.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Application (client) identifier.
	pub client_id: String,
	/// Application secret; callers must avoid logging it.
	pub client_secret: TokenSecret,
}
impl Credentials {
	/// Creates a credential pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: TokenSecret::new(client_secret) }
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.finish()
	}
}
