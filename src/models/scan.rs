use serde::{Deserialize, Serialize};

/// A scan request, as returned on submission (with `credits_left`) or when checking its status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scan {
	pub id: String,
	pub count: Option<u64>,
	pub credits_left: Option<u64>,
	/// `SUBMITTING`, `QUEUE`, `PROCESSING`, or `DONE`.
	pub status: Option<String>,
	pub created: Option<String>,
	pub status_check: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanList {
	pub matches: Vec<Scan>,
	pub total: u64,
}
