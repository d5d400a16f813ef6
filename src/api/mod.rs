//! One `Client` method per API operation.
//!
//! Each method validates its arguments locally, builds a single `EndpointTarget`, and makes
//! exactly one dispatch call.

// region:    --- Modules

mod support;

mod account;
mod alert;
mod dataset;
mod directory;
mod dns;
mod exploit;
mod host;
mod org;
mod scan;
mod tools;

// endregion: --- Modules
