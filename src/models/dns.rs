use serde::{Deserialize, Serialize};

/// Historical DNS information of a domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
	pub domain: String,
	pub tags: Vec<String>,
	pub subdomains: Vec<String>,
	pub data: Vec<DnsRecord>,
	/// More records are available on the next page.
	pub more: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
	pub subdomain: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub value: String,
	pub last_seen: Option<String>,
}
