use serde::{Deserialize, Serialize};

/// A search query saved by a user in the Shodan directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedQuery {
	pub title: String,
	pub description: Option<String>,
	pub query: String,
	pub votes: i64,
	pub timestamp: Option<String>,
	pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQueries {
	pub matches: Vec<SavedQuery>,
	pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagCount {
	pub value: String,
	pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryTags {
	pub matches: Vec<TagCount>,
	pub total: u64,
}
