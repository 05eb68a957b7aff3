//! Field-selector encoding for LinkedIn's bracketed projection syntax.
//!
//! A [`Fields`] value maps field names to ordered subfield lists and renders them as
//! `:(a,b:(c,d))`, the fragment LinkedIn expects right after a resource path. Fields are
//! emitted in first-insertion order so the output stays stable across runs.

// std
use std::{fmt::Write as _, slice::Iter};
// self
use crate::_prelude::*;

/// Field selection sent alongside a LinkedIn resource request.
///
/// Names are not escaped; callers must avoid `,`, `:`, `(`, and `)` in field and
/// subfield names. Re-adding a field replaces its subfields and keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldEntries")]
pub struct Fields {
	entries: Vec<(String, Vec<String>)>,
}
impl Fields {
	/// Creates an empty selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `field` with the provided subfields, replacing any previous entry for it.
	pub fn add<I, S>(&mut self, field: impl Into<String>, subfields: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let field = field.into();
		let subfields = subfields.into_iter().map(Into::into).collect::<Vec<_>>();

		match self.entries.iter_mut().find(|(name, _)| *name == field) {
			Some((_, existing)) => *existing = subfields,
			None => self.entries.push((field, subfields)),
		}

		self
	}

	/// Adds `field` without subfields.
	pub fn add_field(&mut self, field: impl Into<String>) -> &mut Self {
		self.add(field, Vec::<String>::new())
	}

	/// Returns the subfields registered for `field`, if present.
	pub fn get(&self, field: &str) -> Option<&[String]> {
		self.entries.iter().find(|(name, _)| name == field).map(|(_, subfields)| subfields.as_slice())
	}

	/// Number of top-level fields.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no field has been selected.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(field, subfields)` pairs in output order.
	pub fn iter(&self) -> FieldsIter<'_> {
		FieldsIter { inner: self.entries.iter() }
	}

	/// Renders the selection, returning an empty string for an empty selection.
	pub fn encode(&self) -> String {
		self.to_string()
	}
}
impl Display for Fields {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.entries.is_empty() {
			return Ok(());
		}

		f.write_str(":(")?;

		for (idx, (field, subfields)) in self.entries.iter().enumerate() {
			if idx > 0 {
				f.write_char(',')?;
			}

			f.write_str(field)?;

			if !subfields.is_empty() {
				write!(f, ":({})", subfields.join(","))?;
			}
		}

		f.write_char(')')
	}
}
impl From<FieldEntries> for Fields {
	fn from(value: FieldEntries) -> Self {
		value.entries.into_iter().collect()
	}
}
impl<K, I, S> FromIterator<(K, I)> for Fields
where
	K: Into<String>,
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (K, I)>,
	{
		let mut fields = Self::new();

		for (field, subfields) in iter {
			fields.add(field, subfields);
		}

		fields
	}
}
impl<'a> IntoIterator for &'a Fields {
	type IntoIter = FieldsIter<'a>;
	type Item = (&'a str, &'a [String]);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the entries of a [`Fields`] selection.
pub struct FieldsIter<'a> {
	inner: Iter<'a, (String, Vec<String>)>,
}
impl<'a> Iterator for FieldsIter<'a> {
	type Item = (&'a str, &'a [String]);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(field, subfields)| (field.as_str(), subfields.as_slice()))
	}
}

// Deserialized entries are replayed through `Fields::add` so names stay unique.
#[derive(Deserialize)]
struct FieldEntries {
	entries: Vec<(String, Vec<String>)>,
}
