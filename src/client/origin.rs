use crate::resolver::Endpoint;
use crate::routes;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The two API origins a request can be sent to.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Origin {
	/// The general data API (`https://api.shodan.io`).
	Main,
	/// The exploits search API (`https://exploits.shodan.io/api`).
	Exploits,
}

impl Origin {
	/// Serialize to a static str
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Main => "Main",
			Self::Exploits => "Exploits",
		}
	}

	#[must_use]
	pub fn default_endpoint(&self) -> Endpoint {
		match self {
			Self::Main => Endpoint::from_static(routes::API_ROOT),
			Self::Exploits => Endpoint::from_static(routes::API_EXPLOITS),
		}
	}
}
