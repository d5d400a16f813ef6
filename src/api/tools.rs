use super::support::require;
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, ResponseShape, Result};
use std::collections::HashMap;

/// Utility and labs methods
impl Client {
	/// The HTTP headers the client sends when connecting to a web server.
	pub async fn http_headers(&self, ctx: &CallContext) -> Result<HashMap<String, String>> {
		self.dispatch(ctx, EndpointTarget::get(routes::TOOLS_HTTP_HEADERS), ResponseShape::Mapping)
			.await
	}

	/// The current IP address as seen from the Internet (a bare JSON string).
	pub async fn my_ip(&self, ctx: &CallContext) -> Result<String> {
		self.dispatch(ctx, EndpointTarget::get(routes::TOOLS_MY_IP), ResponseShape::Scalar).await
	}

	/// Honeypot probability, from `0.0` (not a honeypot) to `1.0` (is a honeypot).
	pub async fn honeyscore(&self, ctx: &CallContext, ip: &str) -> Result<f32> {
		require("ip", ip)?;

		let target = EndpointTarget::get(routes::labs_honeyscore(ip));
		self.dispatch(ctx, target, ResponseShape::Scalar).await
	}
}
