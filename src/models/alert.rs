use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// region:    --- Alert (request)

/// A network alert to create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
	pub name: String,
	pub filters: AlertFilters,
	/// Seconds until the alert expires. Omitted means it never expires.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expires: Option<u64>,
}

impl Alert {
	/// An alert monitoring the given IPs or netblocks.
	pub fn new(name: impl Into<String>, ips: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			name: name.into(),
			filters: AlertFilters {
				ip: ips.into_iter().map(Into::into).collect(),
			},
			expires: None,
		}
	}

	#[must_use]
	pub fn with_expires(mut self, seconds: u64) -> Self {
		self.expires = Some(seconds);
		self
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertFilters {
	pub ip: Vec<String>,
}

// endregion: --- Alert (request)

// region:    --- AlertDetails

/// A network alert as stored by Shodan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertDetails {
	pub id: String,
	pub name: String,
	pub created: Option<String>,
	pub expires: i64,
	pub expiration: Option<String>,
	pub filters: AlertFilters,
	pub has_triggers: bool,
	/// Enabled triggers, keyed by trigger name.
	pub triggers: HashMap<String, Value>,
	pub size: u64,
}

// endregion: --- AlertDetails

/// A trigger that can be enabled on network alerts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
	pub name: String,
	pub rule: String,
	pub description: String,
}
