//! Parameter encoders: typed search descriptions turned into ordered query parameters.

// region:    --- Modules

mod directory_params;
mod exploit_params;
mod facet;
mod host_params;
mod query;
mod search_params;

pub use directory_params::*;
pub use exploit_params::*;
pub use facet::*;
pub use host_params::*;
pub use query::*;
pub use search_params::*;

// endregion: --- Modules

use crate::common::QueryParams;

/// Implemented by every parameter type that contributes query keys to a request.
pub trait ToQueryParams {
	fn to_query_params(&self) -> QueryParams;
}
