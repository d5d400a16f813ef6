mod support;

use crate::support::{Result, TEST_API_KEY, client_for, client_unreachable, init_tracing};
use futures::future::join_all;
use serde_json::json;
use shodan::search::{ExploitParams, HostParams, Query};
use shodan::{CallContext, Error, ErrorKind, Origin, ResponseShape};
use std::error::Error as _;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// region:    --- Success

#[tokio::test]
async fn test_host_decode_ok() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/shodan/host/1.2.3.4"))
		.and(query_param("key", TEST_API_KEY))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "1.2.3.4"})))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let host = client.host(&CallContext::new(), &HostParams::new("1.2.3.4")).await?;

	// -- Check
	assert_eq!(host.ip.as_deref(), Some("1.2.3.4"));
	assert!(host.data.is_empty());

	Ok(())
}

#[tokio::test]
async fn test_host_query_flags_and_key() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/shodan/host/8.8.8.8"))
		.and(query_param("history", "true"))
		.and(query_param("minify", "true"))
		.and(query_param("key", TEST_API_KEY))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": 134744072, "ports": [53, 443]})))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let params = HostParams::new("8.8.8.8").with_history(true).with_minify(true);
	let host = client.host(&CallContext::new(), &params).await?;

	// -- Check
	assert_eq!(host.ip.as_deref(), Some("8.8.8.8"));
	assert_eq!(host.ports, vec![53, 443]);

	Ok(())
}

#[tokio::test]
async fn test_exploits_origin_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/search"))
		.and(query_param("query", "apache type:remote"))
		.and(query_param("key", TEST_API_KEY))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"matches": [{"_id": "abc", "id": 16929, "source": "ExploitDB", "cve": ["CVE-2011-3192"], "type": "dos"}],
			"total": 1
		})))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let params = ExploitParams::new(Query::new("apache").with_type("remote"));
	let res = client.exploit_search(&CallContext::new(), &params).await?;

	// -- Check
	assert_eq!(res.total, 1);
	let exploit = &res.matches[0];
	assert_eq!(exploit.source.as_deref(), Some("ExploitDB"));
	assert_eq!(exploit.kind.as_deref(), Some("dos"));
	assert_eq!(exploit.cve, vec!["CVE-2011-3192".to_string()]);

	Ok(())
}

#[tokio::test]
async fn test_decode_twice_same_result() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/shodan/protocols"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"https": "HTTPS banner grabber", "ssh": "SSH banner"})))
		.expect(2)
		.mount(&server)
		.await;
	let client = client_for(&server)?;
	let ctx = CallContext::new();

	// -- Exec
	let first = client.protocols(&ctx).await?;
	let second = client.protocols(&ctx).await?;

	// -- Check
	assert_eq!(first, second);
	assert_eq!(first.get("ssh").map(String::as_str), Some("SSH banner"));

	Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/tools/myip"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!("203.0.113.9")))
		.expect(8)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let calls = (0..8).map(|_| {
		let client = client.clone();
		tokio::spawn(async move { client.my_ip(&CallContext::new()).await })
	});
	let results = join_all(calls).await;

	// -- Check
	for res in results {
		assert_eq!(res??, "203.0.113.9");
	}

	Ok(())
}

// endregion: --- Success

// region:    --- Failures

#[tokio::test]
async fn test_api_error_envelope() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api-info"))
		.respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"Invalid API key"}"#))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let err = client.api_info(&CallContext::new()).await.expect_err("should be an api error");

	// -- Check
	assert_eq!(err.kind(), ErrorKind::Api);
	assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
	assert_eq!(err.api_message(), Some("Invalid API key"));
	assert!(!err.to_string().contains(TEST_API_KEY));

	Ok(())
}

#[tokio::test]
async fn test_api_error_raw_body() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/count"))
		.respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let params = ExploitParams::new("openssh");
	let err = client.exploit_count(&CallContext::new(), &params).await.expect_err("should be an api error");

	// -- Check
	match err {
		Error::Api { origin, status, message } => {
			assert_eq!(origin, Origin::Exploits);
			assert_eq!(status.as_u16(), 503);
			assert_eq!(message, "upstream unavailable");
		}
		other => panic!("expected Error::Api, got {other:?}"),
	}

	Ok(())
}

#[tokio::test]
async fn test_decode_error_malformed_json() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/account/profile"))
		.respond_with(ResponseTemplate::new(200).set_body_string("{\"member\": tru"))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let err = client.account_profile(&CallContext::new()).await.expect_err("should be a decode error");

	// -- Check
	assert_eq!(err.kind(), ErrorKind::Decode);
	assert!(matches!(err, Error::ResponseDecode { .. }));

	Ok(())
}

#[tokio::test]
async fn test_decode_error_shape_mismatch() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/shodan/ports"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "not a list"})))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;

	// -- Exec
	let err = client.ports(&CallContext::new()).await.expect_err("should be a decode error");

	// -- Check
	assert!(matches!(
		err,
		Error::ResponseShapeMismatch {
			expected: ResponseShape::Sequence,
			found: "object",
			..
		}
	));

	Ok(())
}

#[tokio::test]
async fn test_transport_error() -> Result<()> {
	// -- Setup & Fixtures
	let client = client_unreachable()?;

	// -- Exec
	let err = client.ports(&CallContext::new()).await.expect_err("should be a transport error");

	// -- Check
	assert_eq!(err.kind(), ErrorKind::Transport);
	assert!(matches!(err, Error::Transport { origin: Origin::Main, .. }));
	assert!(err.source().is_some(), "transport error should keep its cause");
	assert!(!err.is_cancelled());
	assert!(!err.to_string().contains(TEST_API_KEY));

	Ok(())
}

#[tokio::test]
async fn test_client_usable_after_failure() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/shodan/services"))
		.respond_with(ResponseTemplate::new(500).set_body_string("boom"))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/shodan/ports"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([22, 80])))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for(&server)?;
	let ctx = CallContext::new();

	// -- Exec
	let failed = client.services(&ctx).await;
	let ports = client.ports(&ctx).await?;

	// -- Check
	assert!(failed.is_err());
	assert_eq!(ports, vec![22, 80]);

	Ok(())
}

// endregion: --- Failures
