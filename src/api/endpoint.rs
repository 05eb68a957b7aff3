//! Resource path templates and the identifiers spliced into them.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, fields::Fields};

/// LinkedIn resource families the client knows how to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// `/v1/people/{id}{fields}`
	Profile,
	/// `/v1/people/{id}/connections{fields}`
	Connections,
	/// `/v1/groups/{id}{fields}`
	Group,
}
impl Endpoint {
	/// Returns the raw path template with `{id}` and `{fields}` placeholders.
	pub const fn template(self) -> &'static str {
		match self {
			Endpoint::Profile => "/v1/people/{id}{fields}",
			Endpoint::Connections => "/v1/people/{id}/connections{fields}",
			Endpoint::Group => "/v1/groups/{id}{fields}",
		}
	}

	/// Renders the template for the given identifier segment and field selection.
	pub fn render(self, id: &str, fields: &Fields) -> String {
		self.template().replace("{id}", id).replace("{fields}", &fields.encode())
	}
}

/// Member addressed by the people endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemberId {
	/// The member who authorized the access token (`~`).
	#[default]
	Current,
	/// Member identifier (`id=...`).
	Id(String),
	/// Public profile URL (`url=...`).
	Url(String),
}
impl MemberId {
	/// Renders the path segment for this member.
	pub fn segment(&self) -> String {
		match self {
			MemberId::Current => "~".into(),
			MemberId::Id(id) => format!("id={id}"),
			MemberId::Url(url) => format!("url={}", escape(url)),
		}
	}
}
impl From<&str> for MemberId {
	fn from(value: &str) -> Self {
		if value == "~" {
			Self::Current
		} else if value.contains("http") {
			Self::Url(value.into())
		} else {
			Self::Id(value.into())
		}
	}
}
impl From<String> for MemberId {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

/// Group addressed by the groups endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupId {
	/// String identifier, used verbatim.
	Id(String),
	/// Group URL (`url=...`).
	Url(String),
	/// Numeric identifier.
	Numeric(u64),
}
impl GroupId {
	/// Renders the path segment for this group.
	pub fn segment(&self) -> String {
		match self {
			GroupId::Id(id) => id.clone(),
			GroupId::Url(url) => format!("url={}", escape(url)),
			GroupId::Numeric(id) => id.to_string(),
		}
	}
}
impl From<u64> for GroupId {
	fn from(value: u64) -> Self {
		Self::Numeric(value)
	}
}
impl From<&str> for GroupId {
	fn from(value: &str) -> Self {
		if value.contains("http") { Self::Url(value.into()) } else { Self::Id(value.into()) }
	}
}

fn escape(value: &str) -> String {
	form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn member_segments() {
		assert_eq!(MemberId::from("~").segment(), "~");
		assert_eq!(MemberId::from("abc").segment(), "id=abc");
		assert_eq!(
			MemberId::from("https://www.linkedin.com/in/someone").segment(),
			"url=https%3A%2F%2Fwww.linkedin.com%2Fin%2Fsomeone"
		);
	}

	#[test]
	fn group_segments() {
		assert_eq!(GroupId::from(12_345_u64).segment(), "12345");
		assert_eq!(GroupId::from("abc").segment(), "abc");
		assert_eq!(GroupId::from("http://x/g?id=1").segment(), "url=http%3A%2F%2Fx%2Fg%3Fid%3D1");
	}

	#[test]
	fn templates_splice_fields() {
		let fields = [("id", Vec::<&str>::new()), ("headline", vec![])].into_iter().collect::<Fields>();

		assert_eq!(Endpoint::Profile.render("~", &fields), "/v1/people/~:(id,headline)");
		assert_eq!(Endpoint::Connections.render("id=a", &Fields::new()), "/v1/people/id=a/connections");
		assert_eq!(Endpoint::Group.render("7", &fields), "/v1/groups/7:(id,headline)");
	}
}
