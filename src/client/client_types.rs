use crate::resolver::ApiKey;
use crate::webc::WebClient;
use crate::{ClientBuilder, ClientConfig, Result};
use std::sync::Arc;

/// The Shodan client.
///
/// Cheap to clone. All clones share the same connection pool and credential, and can be used
/// from concurrent tasks without locking.
#[derive(Debug, Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

// region:    --- Constructors

impl Client {
	#[must_use]
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	/// Default configuration with the key read from `SHODAN_API_KEY`.
	pub fn from_env() -> Result<Self> {
		ClientBuilder::default().build()
	}

	/// Default configuration with the given key.
	pub fn with_api_key(key: impl Into<String>) -> Result<Self> {
		ClientBuilder::default().with_api_key(key).build()
	}
}

// endregion: --- Constructors

// region:    --- Getters

impl Client {
	#[must_use]
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	pub(crate) fn web_client(&self) -> &WebClient {
		&self.inner.web_client
	}

	pub(crate) fn api_key(&self) -> &ApiKey {
		&self.inner.api_key
	}
}

// endregion: --- Getters

// region:    --- ClientInner

#[derive(Debug)]
pub(super) struct ClientInner {
	pub(super) web_client: WebClient,
	pub(super) config: ClientConfig,
	pub(super) api_key: ApiKey,
}

// endregion: --- ClientInner
