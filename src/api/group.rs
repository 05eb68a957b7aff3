// self
use crate::{
	_prelude::*,
	api::{Endpoint, GroupId, JsonObject, LinkedIn},
	fields::Fields,
	http::HttpTransport,
	obs::CallKind,
};

impl<T> LinkedIn<T>
where
	T: ?Sized + HttpTransport,
{
	/// Fetches a group restricted to `fields`.
	pub async fn group(&self, group: impl Into<GroupId>, fields: &Fields) -> Result<JsonObject> {
		let path = Endpoint::Group.render(&group.into().segment(), fields);

		self.call(CallKind::Group, "group", &path, None, &[]).await
	}
}
