//! Ordered string to string mapping used for query strings and form bodies.

use serde::{Deserialize, Serialize};

/// An ordered mapping of query keys to values.
/// Keys are unique; insertion order is kept for encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

/// Constructors
impl QueryParams {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

/// Setters
impl QueryParams {
	/// Set `name` to `value`. An existing value is replaced in place (keeping its position).
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.pairs.iter_mut().find(|(k, _)| *k == name) {
			Some((_, v)) => *v = value,
			None => self.pairs.push((name, value)),
		}
	}

	/// Chainable `set`.
	#[must_use]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	/// Set `name` only if it is not present yet. Returns `true` if the value was inserted.
	pub fn insert_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
		let name = name.into();
		if self.contains_key(&name) {
			return false;
		}
		self.pairs.push((name, value.into()));
		true
	}

	pub fn remove(&mut self, name: &str) -> Option<String> {
		let idx = self.pairs.iter().position(|(k, _)| k == name)?;
		Some(self.pairs.remove(idx).1)
	}
}

/// Getters
impl QueryParams {
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
	}

	#[must_use]
	pub fn contains_key(&self, name: &str) -> bool {
		self.pairs.iter().any(|(k, _)| k == name)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

/// Encoders
impl QueryParams {
	/// `application/x-www-form-urlencoded` serialization, in insertion order.
	#[must_use]
	pub fn to_form_string(&self) -> String {
		url::form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = QueryParams::new();
		for (k, v) in iter {
			params.set(k, v);
		}
		params
	}
}

impl IntoIterator for QueryParams {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<(String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.pairs.into_iter()
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_query_params_set_replaces_in_place() {
		let mut params = QueryParams::new().with("query", "apache").with("page", "1");
		params.set("query", "nginx");

		let pairs: Vec<_> = params.iter().collect();
		assert_eq!(pairs, vec![("query", "nginx"), ("page", "1")]);
	}

	#[test]
	fn test_query_params_insert_if_absent_keeps_existing() {
		let mut params = QueryParams::new().with("key", "override");

		assert!(!params.insert_if_absent("key", "other"));
		assert!(params.insert_if_absent("minify", "true"));
		assert_eq!(params.get("key"), Some("override"));
		assert_eq!(params.len(), 2);
	}

	#[test]
	fn test_query_params_form_string() {
		let params: QueryParams = [("ips", "1.1.1.1,8.8.8.0/24"), ("force", "true")].into_iter().collect();

		assert_eq!(params.to_form_string(), "ips=1.1.1.1%2C8.8.8.0%2F24&force=true");
	}

	#[test]
	fn test_query_params_remove() {
		let mut params = QueryParams::new().with("a", "1").with("b", "2");

		assert_eq!(params.remove("a").as_deref(), Some("1"));
		assert_eq!(params.remove("a"), None);
		assert!(!params.contains_key("a"));
	}
}

// endregion: --- Tests
