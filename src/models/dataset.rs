use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
	pub name: String,
	pub scope: Option<String>,
	pub description: Option<String>,
}

/// A downloadable file of a dataset. `url` is a temporary, signed link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetFile {
	pub name: String,
	pub url: String,
	pub size: u64,
	pub timestamp: Option<i64>,
	pub sha1: Option<String>,
}
