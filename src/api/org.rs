use super::support::require;
use crate::common::QueryParams;
use crate::models::{Org, SimpleResponse};
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, Origin, ResponseShape, Result, Verb};

/// Organization methods
impl Client {
	/// The organization: members, upgrades, authorized domains.
	pub async fn org(&self, ctx: &CallContext) -> Result<Org> {
		self.dispatch(ctx, EndpointTarget::get(routes::ORG), ResponseShape::Record).await
	}

	/// Add a Shodan user to the organization and upgrade them.
	pub async fn add_org_member(&self, ctx: &CallContext, username: &str, notify: bool) -> Result<SimpleResponse> {
		require("username", username)?;

		let mut query = QueryParams::new();
		if notify {
			query.set("notify", "true");
		}

		let target = EndpointTarget::new(Origin::Main, Verb::Put, routes::org_member(username)).with_query(query);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Remove and downgrade a member of the organization.
	pub async fn remove_org_member(&self, ctx: &CallContext, username: &str) -> Result<SimpleResponse> {
		require("username", username)?;

		let target = EndpointTarget::new(Origin::Main, Verb::Delete, routes::org_member(username));
		self.dispatch(ctx, target, ResponseShape::Record).await
	}
}
