use crate::models::{ApiInfo, Profile};
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, ResponseShape, Result};

/// Account methods
impl Client {
	pub async fn account_profile(&self, ctx: &CallContext) -> Result<Profile> {
		self.dispatch(ctx, EndpointTarget::get(routes::ACCOUNT_PROFILE), ResponseShape::Record).await
	}

	/// The API plan of the key, with the credits left.
	pub async fn api_info(&self, ctx: &CallContext) -> Result<ApiInfo> {
		self.dispatch(ctx, EndpointTarget::get(routes::API_INFO), ResponseShape::Record).await
	}
}
