use crate::webc;
use crate::{Origin, ResponseShape};
use derive_more::Display;
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

/// The classification every failure is mapped into before it reaches the caller.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash)]
pub enum ErrorKind {
	/// Raised locally, before any network call.
	Validation,
	/// Connection, DNS, TLS, cancellation, or deadline failure.
	Transport,
	/// Non-2xx HTTP status returned by the API.
	Api,
	/// 2xx response whose body could not be decoded into the requested shape.
	Decode,
}

#[derive(Debug, Display)]
#[display("{self:?}")]
pub enum Error {
	// -- Validation
	MissingParameter {
		name: &'static str,
	},
	RequestTooBig {
		name: &'static str,
		len: usize,
		limit: usize,
	},
	InvalidPathSegment {
		name: &'static str,
	},
	InvalidUrl {
		url: String,
		cause: url::ParseError,
	},
	RequestBodyEncode {
		serde_error: serde_json::Error,
	},

	// -- Auth
	ApiKeyEnvNotFound {
		env_name: String,
	},
	ApiKeyEmpty,

	// -- Transport
	ClientBuild {
		webc_error: webc::Error,
	},
	Transport {
		origin: Origin,
		webc_error: webc::Error,
	},
	Cancelled {
		origin: Origin,
	},
	DeadlineExceeded {
		origin: Origin,
	},

	// -- Api
	Api {
		origin: Origin,
		status: StatusCode,
		message: String,
	},

	// -- Decode
	ResponseDecode {
		origin: Origin,
		serde_error: serde_json::Error,
	},
	ResponseShapeMismatch {
		origin: Origin,
		expected: ResponseShape,
		found: &'static str,
	},
}

/// Classification
impl Error {
	#[must_use]
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::MissingParameter { .. }
			| Self::RequestTooBig { .. }
			| Self::InvalidPathSegment { .. }
			| Self::InvalidUrl { .. }
			| Self::RequestBodyEncode { .. }
			| Self::ApiKeyEnvNotFound { .. }
			| Self::ApiKeyEmpty => ErrorKind::Validation,
			Self::ClientBuild { .. } | Self::Transport { .. } | Self::Cancelled { .. } | Self::DeadlineExceeded { .. } => {
				ErrorKind::Transport
			}
			Self::Api { .. } => ErrorKind::Api,
			Self::ResponseDecode { .. } | Self::ResponseShapeMismatch { .. } => ErrorKind::Decode,
		}
	}

	/// True when the call was interrupted by its `CallContext` (cancellation or deadline).
	#[must_use]
	pub const fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled { .. } | Self::DeadlineExceeded { .. })
	}
}

/// Getters
impl Error {
	/// The HTTP status of an `Api` error.
	#[must_use]
	pub const fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Api { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// The vendor message (or raw body) of an `Api` error.
	#[must_use]
	pub fn api_message(&self) -> Option<&str> {
		match self {
			Self::Api { message, .. } => Some(message),
			_ => None,
		}
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::InvalidUrl { cause, .. } => Some(cause),
			Self::RequestBodyEncode { serde_error } | Self::ResponseDecode { serde_error, .. } => Some(serde_error),
			Self::ClientBuild { webc_error } | Self::Transport { webc_error, .. } => Some(webc_error),
			_ => None,
		}
	}
}

// endregion: --- Error Boilerplate

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_kind_classification() {
		let err = Error::MissingParameter { name: "ips" };
		assert_eq!(err.kind(), ErrorKind::Validation);

		let err = Error::Cancelled { origin: Origin::Main };
		assert_eq!(err.kind(), ErrorKind::Transport);
		assert!(err.is_cancelled());

		let err = Error::Api {
			origin: Origin::Exploits,
			status: StatusCode::UNAUTHORIZED,
			message: "Invalid API key".to_string(),
		};
		assert_eq!(err.kind(), ErrorKind::Api);
		assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
		assert_eq!(err.api_message(), Some("Invalid API key"));
		assert!(!err.is_cancelled());

		let err = Error::ResponseShapeMismatch {
			origin: Origin::Main,
			expected: ResponseShape::Sequence,
			found: "object",
		};
		assert_eq!(err.kind(), ErrorKind::Decode);
	}

	#[test]
	fn test_error_source_chain() {
		use std::error::Error as _;

		let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err = Error::ResponseDecode {
			origin: Origin::Main,
			serde_error,
		};
		let source = err.source().expect("decode error should have a source");
		assert!(source.is::<serde_json::Error>());

		let cause = url::Url::parse("not a url").unwrap_err();
		let err = Error::InvalidUrl {
			url: "not a url".to_string(),
			cause,
		};
		assert!(err.source().is_some_and(|source| source.is::<url::ParseError>()));

		assert!(Error::MissingParameter { name: "ips" }.source().is_none());
	}
}

// endregion: --- Tests
