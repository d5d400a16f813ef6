use serde::{Deserialize, Serialize};

/// A facet to summarize results on, with an optional number of buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
	pub name: String,
	pub size: Option<u32>,
}

impl Facet {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			size: None,
		}
	}

	pub fn with_size(name: impl Into<String>, size: u32) -> Self {
		Self {
			name: name.into(),
			size: Some(size),
		}
	}

	/// `name` or `name:size`
	#[must_use]
	pub fn to_param_string(&self) -> String {
		match self.size {
			Some(size) => format!("{}:{size}", self.name),
			None => self.name.clone(),
		}
	}
}

impl From<&str> for Facet {
	fn from(name: &str) -> Self {
		Facet::new(name)
	}
}

/// Comma joined facets, `None` when there are none.
pub(crate) fn facets_param(facets: &[Facet]) -> Option<String> {
	if facets.is_empty() {
		return None;
	}
	Some(facets.iter().map(Facet::to_param_string).collect::<Vec<_>>().join(","))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_facets_param() {
		let facets = vec![Facet::with_size("country", 10), Facet::new("org")];

		assert_eq!(facets_param(&facets).as_deref(), Some("country:10,org"));
		assert_eq!(facets_param(&[]), None);
	}
}
