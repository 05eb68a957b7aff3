// self
use crate::{
	_prelude::*,
	api::{Endpoint, JsonObject, LinkedIn, MemberId},
	fields::Fields,
	http::HttpTransport,
	obs::CallKind,
};

impl<T> LinkedIn<T>
where
	T: ?Sized + HttpTransport,
{
	/// Fetches a member profile restricted to `fields`.
	pub async fn profile(&self, member: impl Into<MemberId>, fields: &Fields) -> Result<JsonObject> {
		let path = Endpoint::Profile.render(&member.into().segment(), fields);

		self.call(CallKind::Profile, "profile", &path, None, &[]).await
	}

	/// Fetches a member's connections restricted to `fields`.
	///
	/// `params` are appended to the query string as-is (for example `start` and `count`).
	pub async fn connections<I, K, V>(
		&self,
		member: impl Into<MemberId>,
		fields: &Fields,
		params: I,
	) -> Result<JsonObject>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let path = Endpoint::Connections.render(&member.into().segment(), fields);
		let params =
			params.into_iter().map(|(key, value)| (key.into(), value.into())).collect::<Vec<_>>();

		self.call(CallKind::Connections, "connections", &path, None, &params).await
	}
}
