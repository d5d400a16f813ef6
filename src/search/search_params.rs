use crate::common::QueryParams;
use crate::search::{Facet, Query, ToQueryParams, facets_param};
use serde::{Deserialize, Serialize};

/// Parameters for host search, count, and search tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
	pub query: Query,
	pub facets: Vec<Facet>,
	/// 1-based page; every page past the first costs a query credit.
	pub page: Option<u32>,
	/// Truncate larger fields of the banners.
	pub minify: Option<bool>,
}

/// Constructors
impl SearchParams {
	pub fn new(query: impl Into<Query>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}
}

/// Chainable Setters
impl SearchParams {
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

	#[must_use]
	pub fn with_minify(mut self, minify: bool) -> Self {
		self.minify = Some(minify);
		self
	}
}

impl ToQueryParams for SearchParams {
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
		if let Some(minify) = self.minify {
			params.set("minify", minify.to_string());
		}

		params
	}
}
