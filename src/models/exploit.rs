use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::FacetBucket;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploitResult {
	pub matches: Vec<Exploit>,
	pub total: u64,
	pub facets: HashMap<String, Vec<FacetBucket>>,
}

/// One exploit. Several fields are numbers or strings depending on the source, and stay as `Value`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Exploit {
	#[serde(rename = "_id")]
	pub internal_id: Option<String>,
	/// Identifier in the source database.
	pub id: Value,
	/// `ExploitDB`, `Metasploit`, `CVE`.
	pub source: Option<String>,
	pub author: Value,
	pub title: Option<String>,
	pub description: Option<String>,
	pub code: Option<String>,
	pub date: Option<String>,
	pub platform: Option<String>,
	pub port: Option<u16>,
	#[serde(rename = "type")]
	pub kind: Option<String>,
	pub bid: Vec<u64>,
	pub cve: Vec<String>,
	pub msb: Vec<String>,
	pub osvdb: Vec<u64>,
}
