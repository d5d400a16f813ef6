//! The `webc` module is the thin transport layer on top of `reqwest`.
//! It knows nothing about Shodan routes or models; it performs one HTTP exchange
//! and returns the raw status and body.

// region:    --- Modules

mod error;
mod web_client;

pub use self::error::{Error, Result};
pub use web_client::*;

// endregion: --- Modules
