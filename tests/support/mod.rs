//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use shodan::resolver::Endpoint;
use shodan::{Client, Origin};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Constants

pub const TEST_API_KEY: &str = "test-api-key";

/// Base path of the exploits origin on the mock server (the real one is `https://exploits.shodan.io/api`).
pub const EXPLOITS_BASE_PATH: &str = "/api";

// endregion: --- Constants

// region:    --- Clients

/// A client whose two origins both point at `server` (exploits under `/api`).
pub fn client_for(server: &MockServer) -> Result<Client> {
	let client = Client::builder()
		.with_api_key(TEST_API_KEY)
		.with_endpoint(Origin::Main, Endpoint::from_owned(server.uri()))
		.with_endpoint(
			Origin::Exploits,
			Endpoint::from_owned(format!("{}{EXPLOITS_BASE_PATH}", server.uri())),
		)
		.build()?;
	Ok(client)
}

/// A client pointing at a local port nothing listens on.
pub fn client_unreachable() -> Result<Client> {
	let client = Client::builder()
		.with_api_key(TEST_API_KEY)
		.with_endpoint(Origin::Main, Endpoint::from_static("http://127.0.0.1:1"))
		.build()?;
	Ok(client)
}

// endregion: --- Clients

/// Set `RUST_LOG=shodan=trace` to see the dispatch events.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}
