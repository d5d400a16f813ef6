use derive_more::Display;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display)]
#[display("{self:?}")]
pub enum Error {
	/// Non-2xx response. `body` is the raw response text.
	ResponseFailedStatus {
		status: StatusCode,
		body: String,
		headers: Box<HeaderMap>,
	},

	// -- Externals
	/// Built with `from_reqwest` only, which strips the url (the API key travels in the query).
	Reqwest(reqwest::Error),
}

impl Error {
	pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
		Self::Reqwest(err.without_url())
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Reqwest(err) => Some(err),
			Self::ResponseFailedStatus { .. } => None,
		}
	}
}

// endregion: --- Error Boilerplate
