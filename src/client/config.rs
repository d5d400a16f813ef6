use crate::Origin;
use crate::resolver::{AuthData, Endpoint};
use std::time::Duration;

/// The client configuration. Applied once, when the `Client` is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub(super) auth: AuthData,
	pub(super) main_endpoint: Endpoint,
	pub(super) exploits_endpoint: Endpoint,
	pub(super) timeout: Option<Duration>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			auth: AuthData::default(),
			main_endpoint: Origin::Main.default_endpoint(),
			exploits_endpoint: Origin::Exploits.default_endpoint(),
			timeout: None,
		}
	}
}

/// Chainable setters
impl ClientConfig {
	#[must_use]
	pub fn with_auth(mut self, auth: AuthData) -> Self {
		self.auth = auth;
		self
	}

	/// Override the base url of one origin (e.g., a proxy or a test server).
	#[must_use]
	pub fn with_endpoint(mut self, origin: Origin, endpoint: Endpoint) -> Self {
		match origin {
			Origin::Main => self.main_endpoint = endpoint,
			Origin::Exploits => self.exploits_endpoint = endpoint,
		}
		self
	}

	/// Overall per-request timeout given to the underlying `reqwest::Client`.
	/// Ignored when a custom `reqwest::Client` is supplied to the builder.
	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Getters
impl ClientConfig {
	#[must_use]
	pub fn auth(&self) -> &AuthData {
		&self.auth
	}

	#[must_use]
	pub fn endpoint(&self, origin: Origin) -> &Endpoint {
		match origin {
			Origin::Main => &self.main_endpoint,
			Origin::Exploits => &self.exploits_endpoint,
		}
	}

	#[must_use]
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}
}
