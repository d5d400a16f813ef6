use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// region:    --- AuthData

/// Describes where the Shodan API key comes from.
/// It is resolved once, when the `Client` is built.
#[derive(Clone, Serialize, Deserialize)]
pub enum AuthData {
	/// The name of the environment variable holding the key.
	FromEnv(String),
	/// The key itself.
	Key(String),
}

/// Constructors
impl AuthData {
	pub const API_KEY_DEFAULT_ENV_NAME: &'static str = "SHODAN_API_KEY";

	pub fn from_env(env_name: impl Into<String>) -> Self {
		AuthData::FromEnv(env_name.into())
	}

	pub fn from_single(value: impl Into<String>) -> Self {
		AuthData::Key(value.into())
	}
}

impl Default for AuthData {
	fn default() -> Self {
		AuthData::from_env(Self::API_KEY_DEFAULT_ENV_NAME)
	}
}

/// Resolver
impl AuthData {
	pub(crate) fn resolve(&self) -> Result<ApiKey> {
		let value = match self {
			AuthData::FromEnv(env_name) => std::env::var(env_name).map_err(|_| Error::ApiKeyEnvNotFound {
				env_name: env_name.to_string(),
			})?,
			AuthData::Key(value) => value.to_string(),
		};

		let value = value.trim();
		if value.is_empty() {
			return Err(Error::ApiKeyEmpty);
		}

		Ok(ApiKey(Arc::from(value)))
	}
}

// Keys are never printed.
impl std::fmt::Debug for AuthData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AuthData::FromEnv(env_name) => write!(f, "AuthData::FromEnv({env_name})"),
			AuthData::Key(_) => write!(f, "AuthData::Key(REDACTED)"),
		}
	}
}

// endregion: --- AuthData

// region:    --- ApiKey

/// The resolved credential. Immutable once built.
#[derive(Clone)]
pub(crate) struct ApiKey(Arc<str>);

impl ApiKey {
	/// The query parameter name Shodan reads the key from, for every verb.
	pub(crate) const QUERY_NAME: &'static str = "key";

	pub(crate) fn expose(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("ApiKey(REDACTED)")
	}
}

// endregion: --- ApiKey

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_auth_data_single_resolve_ok() {
		let key = AuthData::from_single("  abc123 ").resolve().unwrap();
		assert_eq!(key.expose(), "abc123");
	}

	#[test]
	fn test_auth_data_empty_key_err() {
		let res = AuthData::from_single("   ").resolve();
		assert!(matches!(res, Err(Error::ApiKeyEmpty)));
	}

	#[test]
	fn test_auth_data_missing_env_err() {
		let res = AuthData::from_env("SHODAN_TEST_ENV_THAT_IS_NEVER_SET").resolve();
		assert!(
			matches!(res, Err(Error::ApiKeyEnvNotFound { ref env_name }) if env_name == "SHODAN_TEST_ENV_THAT_IS_NEVER_SET")
		);
	}

	#[test]
	fn test_debug_redacts_key() {
		let auth = AuthData::from_single("super-secret");
		assert!(!format!("{auth:?}").contains("super-secret"));

		let key = auth.resolve().unwrap();
		assert!(!format!("{key:?}").contains("super-secret"));
	}
}

// endregion: --- Tests
