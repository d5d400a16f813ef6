//! The `Client` and the request dispatcher every endpoint method goes through.

// region:    --- Modules

mod builder;
mod call_context;
mod client_types;
mod config;
mod dispatch;
mod endpoint_target;
mod origin;
mod response_shape;

pub use builder::*;
pub use call_context::*;
pub use client_types::*;
pub use config::*;
pub use endpoint_target::*;
pub use origin::*;
pub use response_shape::*;

// endregion: --- Modules
