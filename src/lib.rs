//! Typed async client for the Shodan REST API and the Shodan Exploits API.
//!
//! Every operation is a method on [`Client`] taking a [`CallContext`] (cancellation and deadline)
//! and returning a typed model from [`models`]. All methods funnel into a single dispatcher that
//! injects the API key, talks to one of the two [`Origin`]s, and classifies failures into
//! [`ErrorKind`].
//!
//! ```no_run
//! use shodan::search::HostParams;
//! use shodan::{CallContext, Client};
//!
//! # async fn run() -> shodan::Result<()> {
//! let client = Client::from_env()?;
//! let host = client.host(&CallContext::new(), &HostParams::new("8.8.8.8")).await?;
//! println!("{:?} {:?}", host.ip, host.ports);
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod api;
mod client;
mod common;
mod error;

pub mod models;
pub mod resolver;
pub mod routes;
pub mod search;
pub mod webc;

// -- Flatten
pub use client::*;
pub use common::*;
pub use error::{Error, ErrorKind, Result};

// endregion: --- Modules
