use crate::models::Banner;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Host search or count result. `matches` is empty for counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
	pub matches: Vec<Banner>,
	pub total: u64,
	pub facets: HashMap<String, Vec<FacetBucket>>,
}

/// One facet bucket. The value is a string or a number depending on the facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetBucket {
	pub count: u64,
	pub value: Value,
}

/// How a search query was broken into tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tokens {
	pub attributes: HashMap<String, Value>,
	pub errors: Vec<String>,
	pub string: String,
	pub filters: Vec<String>,
}
