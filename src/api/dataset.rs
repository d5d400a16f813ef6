use super::support::require;
use crate::models::{Dataset, DatasetFile};
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, ResponseShape, Result};

/// Bulk data methods
impl Client {
	/// Datasets available for download.
	pub async fn datasets(&self, ctx: &CallContext) -> Result<Vec<Dataset>> {
		self.dispatch(ctx, EndpointTarget::get(routes::DATA), ResponseShape::Sequence).await
	}

	/// Files available for download in `dataset`.
	pub async fn dataset_files(&self, ctx: &CallContext, dataset: &str) -> Result<Vec<DatasetFile>> {
		require("dataset", dataset)?;

		let target = EndpointTarget::get(routes::dataset(dataset));
		self.dispatch(ctx, target, ResponseShape::Sequence).await
	}
}
