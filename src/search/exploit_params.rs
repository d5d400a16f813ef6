use crate::common::QueryParams;
use crate::search::{Facet, Query, ToQueryParams, facets_param};
use serde::{Deserialize, Serialize};

/// Parameters for the Exploits API search and count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploitParams {
	pub query: Query,
	pub facets: Vec<Facet>,
	pub page: Option<u32>,
}

impl ExploitParams {
	pub fn new(query: impl Into<Query>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_facet(mut self, facet: impl Into<Facet>) -> Self {
		self.facets.push(facet.into());
		self
	}

	#[must_use]
	pub fn with_page(mut self, page: u32) -> Self {
		self.page = Some(page);
		self
	}
}

impl ToQueryParams for ExploitParams {
	fn to_query_params(&self) -> QueryParams {
		let mut params = QueryParams::new();

		if !self.query.is_empty() {
			params.set("query", self.query.to_query_string());
		}
		if let Some(facets) = facets_param(&self.facets) {
			params.set("facets", facets);
		}
		if let Some(page) = self.page {
			params.set("page", page.to_string());
		}

		params
	}
}
