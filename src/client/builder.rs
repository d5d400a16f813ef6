use crate::resolver::{AuthData, Endpoint};
use crate::webc::WebClient;
use crate::{Client, ClientConfig, Error, Origin, Result};
use std::sync::Arc;
use std::time::Duration;

use super::client_types::ClientInner;

/// The builder for the `Client` structure.
///
/// - `ClientBuilder::default()`
/// - `Client::builder()`
#[derive(Debug, Default)]
pub struct ClientBuilder {
	web_client: Option<WebClient>,
	config: Option<ClientConfig>,
}

/// Builder methods
impl ClientBuilder {
	/// Create a new `ClientBuilder` with a custom `reqwest::Client`.
	#[must_use]
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.web_client = Some(WebClient::from_reqwest_client(reqwest_client));
		self
	}

	/// With a client configuration.
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	#[must_use]
	pub fn with_auth(mut self, auth: AuthData) -> Self {
		let config = self.config.take().unwrap_or_default().with_auth(auth);
		self.config = Some(config);
		self
	}

	/// Shortcut for `with_auth(AuthData::from_single(key))`.
	#[must_use]
	pub fn with_api_key(self, key: impl Into<String>) -> Self {
		self.with_auth(AuthData::from_single(key))
	}

	#[must_use]
	pub fn with_endpoint(mut self, origin: Origin, endpoint: Endpoint) -> Self {
		let config = self.config.take().unwrap_or_default().with_endpoint(origin, endpoint);
		self.config = Some(config);
		self
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		let config = self.config.take().unwrap_or_default().with_timeout(timeout);
		self.config = Some(config);
		self
	}

	/// Resolve the credential and build the `Client`.
	/// The credential is read once; later environment changes do not affect the client.
	pub fn build(self) -> Result<Client> {
		let config = self.config.unwrap_or_default();
		let api_key = config.auth.resolve()?;

		let web_client = match (self.web_client, config.timeout) {
			(Some(web_client), _) => web_client,
			(None, Some(timeout)) => {
				WebClient::with_timeout(timeout).map_err(|webc_error| Error::ClientBuild { webc_error })?
			}
			(None, None) => WebClient::default(),
		};

		let inner = ClientInner {
			web_client,
			config,
			api_key,
		};

		Ok(Client { inner: Arc::new(inner) })
	}
}
