use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::net::Ipv4Addr;

// region:    --- Host

/// All services found on a host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
	/// Dotted notation. The API sends either the integer or the string form.
	#[serde(deserialize_with = "deserialize_ip")]
	pub ip: Option<String>,
	pub ip_str: Option<String>,
	pub hostnames: Vec<String>,
	pub domains: Vec<String>,
	pub ports: Vec<u16>,
	pub tags: Vec<String>,
	pub vulns: Vec<String>,
	pub org: Option<String>,
	pub isp: Option<String>,
	pub asn: Option<String>,
	pub os: Option<String>,
	pub country_code: Option<String>,
	pub country_name: Option<String>,
	pub city: Option<String>,
	pub region_code: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub last_update: Option<String>,
	/// The banners, absent when `minify` was requested.
	pub data: Vec<Banner>,
}

// endregion: --- Host

// region:    --- Banner

/// One service banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
	#[serde(deserialize_with = "deserialize_ip")]
	pub ip: Option<String>,
	pub ip_str: Option<String>,
	pub port: Option<u16>,
	pub transport: Option<String>,
	pub product: Option<String>,
	pub version: Option<String>,
	/// The raw banner text.
	pub data: Option<String>,
	pub timestamp: Option<String>,
	pub hash: Option<i64>,
	pub hostnames: Vec<String>,
	pub domains: Vec<String>,
	pub org: Option<String>,
	pub isp: Option<String>,
	pub asn: Option<String>,
	pub os: Option<String>,
	pub cpe: Vec<String>,
	pub tags: Vec<String>,
	pub location: Option<Location>,
	/// Module specific properties (`http`, `ssl`, `ssh`, `_shodan`, ...).
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
	pub city: Option<String>,
	pub region_code: Option<String>,
	pub area_code: Option<i64>,
	pub postal_code: Option<String>,
	pub country_code: Option<String>,
	pub country_name: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
}

// endregion: --- Banner

// region:    --- Support

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIp {
	Int(u32),
	Str(String),
}

/// Accepts `16909060`, `"1.2.3.4"`, or `null`.
/// IPv6 hosts only carry the string form.
fn deserialize_ip<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<RawIp>::deserialize(deserializer)?;
	Ok(raw.map(|raw| match raw {
		RawIp::Int(n) => Ipv4Addr::from(n).to_string(),
		RawIp::Str(s) => s,
	}))
}

// endregion: --- Support
