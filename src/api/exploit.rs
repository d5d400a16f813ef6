use crate::models::ExploitResult;
use crate::routes;
use crate::search::{ExploitParams, ToQueryParams};
use crate::{CallContext, Client, EndpointTarget, Error, Origin, ResponseShape, Result, Verb};

/// Exploits API methods
impl Client {
	/// Search exploits across ExploitDB, Metasploit, and CVE.
	pub async fn exploit_search(&self, ctx: &CallContext, params: &ExploitParams) -> Result<ExploitResult> {
		self.exploits_get(ctx, routes::EXPLOITS_SEARCH, params).await
	}

	/// Same as `exploit_search` without the matches (total and facets only).
	pub async fn exploit_count(&self, ctx: &CallContext, params: &ExploitParams) -> Result<ExploitResult> {
		self.exploits_get(ctx, routes::EXPLOITS_COUNT, params).await
	}

	async fn exploits_get(&self, ctx: &CallContext, path: &str, params: &ExploitParams) -> Result<ExploitResult> {
		if params.query.is_empty() {
			return Err(Error::MissingParameter { name: "query" });
		}

		let target = EndpointTarget::new(Origin::Exploits, Verb::Get, path).with_query(params.to_query_params());
		self.dispatch(ctx, target, ResponseShape::Record).await
	}
}
