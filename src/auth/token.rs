//! Redacted token secrets and the record produced by the code exchange.

// self
use crate::_prelude::*;

/// Redacted secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Tokens issued by the LinkedIn token endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenRecord {
	/// Access token secret.
	pub access_token: TokenSecret,
	/// Refresh token secret, if LinkedIn issued one.
	pub refresh_token: Option<TokenSecret>,
	/// Instant the exchange completed.
	pub issued_at: OffsetDateTime,
	/// Instant the access token stops being valid; `None` when LinkedIn omitted the lifetime.
	pub expires_at: Option<OffsetDateTime>,
}
impl TokenRecord {
	/// Creates a record issued at `issued_at` that never expires.
	pub fn new(access_token: impl Into<String>, issued_at: OffsetDateTime) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: None,
			issued_at,
			expires_at: None,
		}
	}

	/// Sets the expiry to `issued_at + expires_in`.
	///
	/// Returns `None` when the sum falls outside the representable date range.
	pub fn expiring_in(mut self, expires_in: Duration) -> Option<Self> {
		self.expires_at = Some(self.issued_at.checked_add(expires_in)?);

		Some(self)
	}

	/// Attaches a refresh token.
	pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Returns `true` if the record has expired at the provided instant.
	///
	/// Records without an expiry never expire.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Returns `true` if the record is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for TokenRecord {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenRecord")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
