//! Where the client gets its credential and base urls from.

// region:    --- Modules

mod auth_data;
mod endpoint;

pub use auth_data::*;
pub use endpoint::*;

// endregion: --- Modules
