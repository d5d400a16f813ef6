use crate::common::QueryParams;
use crate::search::ToQueryParams;
use serde::{Deserialize, Serialize};

/// Parameters for the host view. The ip goes in the path, the rest in the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostParams {
	pub ip: String,
	/// Include all historical banners.
	pub history: bool,
	/// Only return the list of ports and the general host information, no banners.
	pub minify: bool,
}

impl HostParams {
	pub fn new(ip: impl Into<String>) -> Self {
		Self {
			ip: ip.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_history(mut self, history: bool) -> Self {
		self.history = history;
		self
	}

	#[must_use]
	pub fn with_minify(mut self, minify: bool) -> Self {
		self.minify = minify;
		self
	}
}

impl ToQueryParams for HostParams {
	fn to_query_params(&self) -> QueryParams {
		let mut params = QueryParams::new();
		if self.history {
			params.set("history", "true");
		}
		if self.minify {
			params.set("minify", "true");
		}
		params
	}
}
