//! Response (and request) models.
//!
//! Fields the API may omit are `Option` or `#[serde(default)]`, so a sparse response still decodes.

// region:    --- Modules

mod account;
mod alert;
mod dataset;
mod directory;
mod dns;
mod exploit;
mod host;
mod org;
mod scan;
mod search;

pub use account::*;
pub use alert::*;
pub use dataset::*;
pub use directory::*;
pub use dns::*;
pub use exploit::*;
pub use host::*;
pub use org::*;
pub use scan::*;
pub use search::*;

// endregion: --- Modules

use serde::{Deserialize, Serialize};

/// `{"success": true}` returned by mutation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleResponse {
	#[serde(default)]
	pub success: bool,
}
