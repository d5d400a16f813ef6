// region:    --- Modules

mod query_params;

pub use query_params::*;

// endregion: --- Modules
