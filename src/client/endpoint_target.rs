use crate::common::QueryParams;
use crate::webc::WebBody;
use crate::{Error, Origin, Result};
use derive_more::Display;
use reqwest::Method;

// region:    --- Verb

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash)]
pub enum Verb {
	#[display("GET")]
	Get,
	#[display("POST")]
	Post,
	#[display("PUT")]
	Put,
	#[display("DELETE")]
	Delete,
}

impl Verb {
	#[must_use]
	pub fn as_method(&self) -> Method {
		match self {
			Self::Get => Method::GET,
			Self::Post => Method::POST,
			Self::Put => Method::PUT,
			Self::Delete => Method::DELETE,
		}
	}
}

// endregion: --- Verb

// region:    --- EndpointTarget

/// The fully resolved description of one HTTP exchange.
///
/// Built by each endpoint method and handed whole to the dispatcher, which adds the
/// credential and the origin base url. It is consumed by the call.
#[derive(Debug, Clone)]
pub struct EndpointTarget {
	pub origin: Origin,
	pub verb: Verb,
	/// Already resolved path, e.g. `/shodan/alert/ABC/info`.
	pub path: String,
	pub query: QueryParams,
	pub body: Option<WebBody>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl EndpointTarget {
	pub fn new(origin: Origin, verb: Verb, path: impl Into<String>) -> Self {
		Self {
			origin,
			verb,
			path: path.into(),
			query: QueryParams::default(),
			body: None,
			headers: Vec::new(),
		}
	}

	/// `GET` on the main origin.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Origin::Main, Verb::Get, path)
	}
}

/// Chainable Setters
impl EndpointTarget {
	#[must_use]
	pub fn with_query(mut self, query: QueryParams) -> Self {
		self.query = query;
		self
	}

	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	#[must_use]
	pub fn with_body(mut self, body: WebBody) -> Self {
		self.body = Some(body);
		self
	}

	/// `application/x-www-form-urlencoded` body.
	#[must_use]
	pub fn with_form_body(self, form: &QueryParams) -> Self {
		self.with_body(WebBody::form(form.to_form_string()))
	}

	/// `application/json` body.
	pub fn with_json_body(self, content: &impl serde::Serialize) -> Result<Self> {
		let body = WebBody::json(content).map_err(|serde_error| Error::RequestBodyEncode { serde_error })?;
		Ok(self.with_body(body))
	}
}

// endregion: --- EndpointTarget
