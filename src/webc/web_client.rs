use crate::webc::{Error, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use url::Url;

// region:    --- WebClient

/// Wrapper around a `reqwest::Client`, which owns the connection pool.
/// Cloning is cheap and clones share the same pool.
#[derive(Debug, Default, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

/// Constructors
impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		WebClient { reqwest_client }
	}

	/// Build a new `reqwest::Client` with an overall per-request timeout.
	pub fn with_timeout(timeout: Duration) -> Result<Self> {
		let reqwest_client = reqwest::Client::builder().timeout(timeout).build().map_err(Error::from_reqwest)?;
		Ok(WebClient { reqwest_client })
	}
}

/// Web method implementations
impl WebClient {
	/// Perform one HTTP exchange. Non-2xx statuses are returned as `Error::ResponseFailedStatus`.
	pub async fn do_request(&self, request: WebRequest) -> Result<WebResponse> {
		let WebRequest {
			method,
			url,
			headers,
			body,
		} = request;

		let mut reqwest_builder = self.reqwest_client.request(method, url);

		let has_content_type = headers.iter().any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
		for (name, value) in headers {
			reqwest_builder = reqwest_builder.header(name, value);
		}

		if let Some(WebBody { content_type, bytes }) = body {
			if !has_content_type {
				reqwest_builder = reqwest_builder.header(CONTENT_TYPE, content_type);
			}
			reqwest_builder = reqwest_builder.body(bytes);
		}

		let reqwest_res = reqwest_builder.send().await.map_err(Error::from_reqwest)?;

		WebResponse::from_reqwest_response(reqwest_res).await
	}
}

// endregion: --- WebClient

// region:    --- WebRequest

/// A fully resolved HTTP exchange.
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: Method,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub body: Option<WebBody>,
}

/// An opaque request body with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebBody {
	pub content_type: String,
	pub bytes: Bytes,
}

/// Constructors
impl WebBody {
	pub const FORM_URLENCODED: &'static str = "application/x-www-form-urlencoded";
	pub const JSON: &'static str = "application/json";

	pub fn new(content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
		Self {
			content_type: content_type.into(),
			bytes: bytes.into(),
		}
	}

	pub fn form(encoded: impl Into<String>) -> Self {
		Self::new(Self::FORM_URLENCODED, encoded.into())
	}

	pub fn json(content: &impl serde::Serialize) -> serde_json::Result<Self> {
		let bytes = serde_json::to_vec(content)?;
		Ok(Self::new(Self::JSON, bytes))
	}
}

// endregion: --- WebRequest

// region:    --- WebResponse

/// A 2xx response with its raw body text.
#[derive(Debug)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: String,
}

impl WebResponse {
	/// Reads the full body. The body is read on failure statuses too, so the caller can look
	/// for an error envelope.
	pub(crate) async fn from_reqwest_response(res: reqwest::Response) -> Result<WebResponse> {
		let status = res.status();
		let headers = res.headers().clone();
		let body = res.text().await.map_err(Error::from_reqwest)?;

		if !status.is_success() {
			return Err(Error::ResponseFailedStatus {
				status,
				body,
				headers: Box::new(headers),
			});
		}

		Ok(WebResponse { status, body })
	}
}

// endregion: --- WebResponse

// region:    --- Tests


// endregion: --- Tests
