use serde::{Deserialize, Serialize};

/// The account linked to the API key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub member: bool,
	pub credits: i64,
	pub display_name: Option<String>,
	pub created: Option<String>,
}

/// The API plan of the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
	pub plan: String,
	pub query_credits: i64,
	pub scan_credits: i64,
	pub monitored_ips: Option<i64>,
	pub https: bool,
	pub telnet: bool,
	pub unlocked: bool,
	pub unlocked_left: i64,
	pub usage_limits: UsageLimits,
}

/// `-1` means unlimited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageLimits {
	pub scan_credits: i64,
	pub query_credits: i64,
	pub monitored_ips: i64,
}
