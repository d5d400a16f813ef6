use super::support::require;
use crate::models::{Host, SearchResult, Tokens};
use crate::routes;
use crate::search::{HostParams, SearchParams, ToQueryParams};
use crate::{CallContext, Client, EndpointTarget, Error, ResponseShape, Result};
use std::collections::HashMap;

/// Search methods
impl Client {
	/// All services that have been found on the given host IP.
	pub async fn host(&self, ctx: &CallContext, params: &HostParams) -> Result<Host> {
		require("ip", &params.ip)?;

		let target = EndpointTarget::get(routes::host_view(&params.ip)).with_query(params.to_query_params());
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Same as `search` but only returns the total and the facets.
	/// Does not consume query credits.
	pub async fn count(&self, ctx: &CallContext, params: &SearchParams) -> Result<SearchResult> {
		let target = EndpointTarget::get(routes::HOST_COUNT).with_query(params.to_query_params());
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Search with the website query syntax.
	///
	/// Costs 1 query credit when the query has a filter, and for every page past the first.
	pub async fn search(&self, ctx: &CallContext, params: &SearchParams) -> Result<SearchResult> {
		if params.query.is_empty() {
			return Err(Error::MissingParameter { name: "query" });
		}
		let query = params.to_query_params();

		let target = EndpointTarget::get(routes::HOST_SEARCH).with_query(query);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Which filters are used by the query string and what parameters were given to them.
	pub async fn search_tokens(&self, ctx: &CallContext, params: &SearchParams) -> Result<Tokens> {
		if params.query.is_empty() {
			return Err(Error::MissingParameter { name: "query" });
		}
		let query = params.to_query_params();

		let target = EndpointTarget::get(routes::HOST_SEARCH_TOKENS).with_query(query);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Port numbers the crawlers are looking for.
	pub async fn ports(&self, ctx: &CallContext) -> Result<Vec<u16>> {
		self.dispatch(ctx, EndpointTarget::get(routes::PORTS), ResponseShape::Sequence).await
	}

	/// Protocols that can be used when launching an Internet scan, with their description.
	pub async fn protocols(&self, ctx: &CallContext) -> Result<HashMap<String, String>> {
		self.dispatch(ctx, EndpointTarget::get(routes::PROTOCOLS), ResponseShape::Mapping).await
	}

	/// Services Shodan can detect, keyed by port.
	pub async fn services(&self, ctx: &CallContext) -> Result<HashMap<String, String>> {
		self.dispatch(ctx, EndpointTarget::get(routes::SERVICES), ResponseShape::Mapping).await
	}
}
