use super::support::require;
use crate::common::QueryParams;
use crate::models::{QueryTags, SearchQueries};
use crate::routes;
use crate::search::{DirectoryParams, ToQueryParams};
use crate::{CallContext, Client, EndpointTarget, ResponseShape, Result};

/// Directory methods (saved search queries)
impl Client {
	pub async fn query_list(&self, ctx: &CallContext, params: &DirectoryParams) -> Result<SearchQueries> {
		let target = EndpointTarget::get(routes::QUERY).with_query(params.to_query_params());
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Search the directory of saved queries.
	pub async fn query_search(&self, ctx: &CallContext, query: &str, page: Option<u32>) -> Result<SearchQueries> {
		require("query", query)?;

		let mut params = QueryParams::new().with("query", query);
		if let Some(page) = page.filter(|p| *p > 0) {
			params.set("page", page.to_string());
		}

		let target = EndpointTarget::get(routes::QUERY_SEARCH).with_query(params);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Popular tags of the saved queries. `size` defaults to 10 server side.
	pub async fn query_tags(&self, ctx: &CallContext, size: Option<u32>) -> Result<QueryTags> {
		let mut params = QueryParams::new();
		if let Some(size) = size.filter(|s| *s > 0) {
			params.set("size", size.to_string());
		}

		let target = EndpointTarget::get(routes::QUERY_TAGS).with_query(params);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}
}
