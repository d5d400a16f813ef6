//! The request dispatcher.
//!
//! Turns an `EndpointTarget` into exactly one authenticated HTTP exchange and classifies the
//! outcome. No retries, no caching, no shared mutable state.

use crate::client::Interruption;
use crate::common::QueryParams;
use crate::resolver::{ApiKey, Endpoint};
use crate::webc::{self, WebRequest};
use crate::{CallContext, Client, EndpointTarget, Error, Origin, ResponseShape, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use value_ext::JsonValueExt;

impl Client {
	/// Perform one exchange for `target` and decode the 2xx body into `T`.
	///
	/// - The API key is appended to the query string for every verb.
	/// - `ctx` cancellation or deadline aborts the in-flight exchange.
	/// - Non-2xx statuses become `Error::Api`, with the vendor `error` message when present.
	/// - A body that is not valid JSON, or does not match `shape` or `T`, becomes a decode error.
	pub(crate) async fn dispatch<T>(&self, ctx: &CallContext, target: EndpointTarget, shape: ResponseShape) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let origin = target.origin;

		// -- Build the web request (local, no I/O)
		let endpoint = self.config().endpoint(origin);
		let web_request = into_web_request(endpoint, self.api_key(), target)?;

		if let Some(interruption) = ctx.interruption() {
			return Err(interruption_error(origin, interruption));
		}

		tracing::debug!(
			origin = %origin,
			method = %web_request.method,
			path = web_request.url.path(),
			"shodan dispatch"
		);

		// -- Exchange (connect, write, read are all inside the raced future)
		let exchange = self.web_client().do_request(web_request);
		let web_res = tokio::select! {
			biased;
			interruption = ctx.interrupted() => return Err(interruption_error(origin, interruption)),
			web_res = exchange => web_res,
		};

		let web_res = match web_res {
			Ok(web_res) => web_res,
			Err(webc::Error::ResponseFailedStatus { status, body, .. }) => {
				tracing::debug!(origin = %origin, status = %status, "shodan dispatch failed status");
				return Err(api_error(origin, status, body));
			}
			Err(webc_error) => return Err(Error::Transport { origin, webc_error }),
		};

		tracing::trace!(origin = %origin, status = %web_res.status, body_len = web_res.body.len(), "shodan dispatch ok");

		decode_body(origin, &web_res.body, shape)
	}
}

// region:    --- Support

fn into_web_request(endpoint: &Endpoint, api_key: &ApiKey, target: EndpointTarget) -> Result<WebRequest> {
	let EndpointTarget {
		origin: _,
		verb,
		path,
		query,
		body,
		headers,
	} = target;

	let url = build_url(endpoint, &path, query, api_key)?;

	Ok(WebRequest {
		method: verb.as_method(),
		url,
		headers,
		body,
	})
}

/// `<base><path>?<query>&key=<api key>`
/// A `key` already present in `query` is an explicit override and is kept as is.
/// Caller headers never carry or replace the credential; they are sent verbatim.
fn build_url(endpoint: &Endpoint, path: &str, mut query: QueryParams, api_key: &ApiKey) -> Result<Url> {
	let raw_url = endpoint.join(path);
	let mut url = Url::parse(&raw_url).map_err(|cause| Error::InvalidUrl { url: raw_url, cause })?;

	if !query.insert_if_absent(ApiKey::QUERY_NAME, api_key.expose()) {
		tracing::debug!("shodan dispatch - caller supplied its own '{}' query parameter", ApiKey::QUERY_NAME);
	}

	url.query_pairs_mut().extend_pairs(query.iter());

	Ok(url)
}

/// Vendor error envelope `{"error": "..."}` when present, raw body otherwise.
fn api_error(origin: Origin, status: StatusCode, body: String) -> Error {
	let envelope_message = serde_json::from_str::<Value>(&body)
		.ok()
		.and_then(|value| value.x_get::<String>("error").ok());

	Error::Api {
		origin,
		status,
		message: envelope_message.unwrap_or(body),
	}
}

fn decode_body<T>(origin: Origin, body: &str, shape: ResponseShape) -> Result<T>
where
	T: DeserializeOwned,
{
	let value: Value = serde_json::from_str(body).map_err(|serde_error| Error::ResponseDecode { origin, serde_error })?;

	if let Some(found) = shape.mismatch(&value) {
		return Err(Error::ResponseShapeMismatch {
			origin,
			expected: shape,
			found,
		});
	}

	serde_json::from_value(value).map_err(|serde_error| Error::ResponseDecode { origin, serde_error })
}

fn interruption_error(origin: Origin, interruption: Interruption) -> Error {
	match interruption {
		Interruption::Cancelled => Error::Cancelled { origin },
		Interruption::DeadlineExceeded => Error::DeadlineExceeded { origin },
	}
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use crate::resolver::AuthData;
	use std::collections::HashMap;

	fn test_key() -> ApiKey {
		AuthData::from_single("test-key").resolve().unwrap()
	}

	#[test]
	fn test_build_url_appends_key() -> Result<()> {
		let endpoint = Endpoint::from_static("https://api.shodan.io");
		let query = QueryParams::new().with("query", "port:22 country:\"DE\"").with("page", "2");

		let url = build_url(&endpoint, "/shodan/host/search", query, &test_key())?;

		assert_eq!(url.path(), "/shodan/host/search");
		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
		assert_eq!(
			pairs,
			vec![
				("query".to_string(), "port:22 country:\"DE\"".to_string()),
				("page".to_string(), "2".to_string()),
				("key".to_string(), "test-key".to_string()),
			]
		);
		Ok(())
	}

	#[test]
	fn test_build_url_empty_query_still_has_key() -> Result<()> {
		let endpoint = Endpoint::from_static("https://exploits.shodan.io/api");

		let url = build_url(&endpoint, "/count", QueryParams::new(), &test_key())?;

		assert_eq!(url.as_str(), "https://exploits.shodan.io/api/count?key=test-key");
		Ok(())
	}

	#[test]
	fn test_build_url_keeps_caller_key() -> Result<()> {
		let endpoint = Endpoint::from_static("https://api.shodan.io");
		let query = QueryParams::new().with("key", "other-key");

		let url = build_url(&endpoint, "/api-info", query, &test_key())?;

		assert_eq!(url.query(), Some("key=other-key"));
		Ok(())
	}

	#[test]
	fn test_caller_headers_do_not_replace_query_key() -> Result<()> {
		let endpoint = Endpoint::from_static("https://api.shodan.io");
		let target = EndpointTarget::get("/api-info").with_header("key", "header-key");

		let web_request = into_web_request(&endpoint, &test_key(), target)?;

		assert_eq!(web_request.url.query(), Some("key=test-key"));
		assert_eq!(web_request.headers, vec![("key".to_string(), "header-key".to_string())]);
		Ok(())
	}

	#[test]
	fn test_build_url_invalid_base() {
		let endpoint = Endpoint::from_static("not a url");

		let res = build_url(&endpoint, "/org", QueryParams::new(), &test_key());

		assert!(matches!(res, Err(Error::InvalidUrl { .. })));
	}

	#[test]
	fn test_api_error_envelope_message() {
		let err = api_error(Origin::Main, StatusCode::UNAUTHORIZED, r#"{"error":"Invalid API key"}"#.to_string());

		assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
		assert_eq!(err.api_message(), Some("Invalid API key"));
	}

	#[test]
	fn test_api_error_raw_body() {
		let err = api_error(Origin::Main, StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>".to_string());
		assert_eq!(err.api_message(), Some("<html>Bad Gateway</html>"));

		// JSON without an `error` field is not an envelope.
		let err = api_error(Origin::Exploits, StatusCode::NOT_FOUND, r#"{"detail":"nope"}"#.to_string());
		assert_eq!(err.api_message(), Some(r#"{"detail":"nope"}"#));
	}

	#[test]
	fn test_decode_body_shapes() -> Result<()> {
		let ports: Vec<u16> = decode_body(Origin::Main, "[22, 80, 443]", ResponseShape::Sequence)?;
		assert_eq!(ports, vec![22, 80, 443]);

		let services: HashMap<String, String> =
			decode_body(Origin::Main, r#"{"22": "SSH", "80": "HTTP"}"#, ResponseShape::Mapping)?;
		assert_eq!(services.get("22").map(String::as_str), Some("SSH"));

		let my_ip: String = decode_body(Origin::Main, r#""203.0.113.7""#, ResponseShape::Scalar)?;
		assert_eq!(my_ip, "203.0.113.7");

		let score: f32 = decode_body(Origin::Main, "0.3", ResponseShape::Scalar)?;
		assert!((score - 0.3).abs() < f32::EPSILON);

		Ok(())
	}

	#[test]
	fn test_decode_body_errors() {
		let res: crate::Result<Vec<u16>> = decode_body(Origin::Main, "not json", ResponseShape::Sequence);
		assert!(matches!(res, Err(Error::ResponseDecode { .. })));

		let res: crate::Result<Vec<u16>> = decode_body(Origin::Main, r#"{"a": 1}"#, ResponseShape::Sequence);
		assert!(matches!(
			res,
			Err(Error::ResponseShapeMismatch {
				expected: ResponseShape::Sequence,
				found: "object",
				..
			})
		));

		// Right shape, wrong element type.
		let res: crate::Result<Vec<u16>> = decode_body(Origin::Main, r#"["ssh"]"#, ResponseShape::Sequence);
		assert!(matches!(res, Err(Error::ResponseDecode { .. })));
	}
}

// endregion: --- Tests
