use super::support::{join_list, require};
use crate::common::QueryParams;
use crate::models::{Scan, ScanList};
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, Origin, ResponseShape, Result, Verb};

/// On-demand scanning methods
impl Client {
	/// Request Shodan to crawl IPs or netblocks.
	///
	/// Uses scan credits (1 IP, 1 credit) and requires a paid plan.
	pub async fn submit_scan<S: AsRef<str>>(&self, ctx: &CallContext, ips: &[S], force: bool) -> Result<Scan> {
		let ips = join_list("ips", ips, None)?;

		let mut form = QueryParams::new().with("ips", ips);
		if force {
			form.set("force", "true");
		}

		let target = EndpointTarget::new(Origin::Main, Verb::Post, routes::SCAN).with_form_body(&form);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// All scans of the account. Pages start at 1 (`0` is read as `1`).
	pub async fn list_scans(&self, ctx: &CallContext, page: u32) -> Result<ScanList> {
		let query = QueryParams::new().with("page", page.max(1).to_string());

		let target = EndpointTarget::get(routes::SCANS).with_query(query);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Progress of a previously submitted scan.
	pub async fn scan_status(&self, ctx: &CallContext, scan_id: &str) -> Result<Scan> {
		require("scan_id", scan_id)?;

		let target = EndpointTarget::get(routes::scan_view(scan_id));
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Crawl the whole Internet for a port. Restricted to researchers and enterprise licenses.
	pub async fn scan_internet(&self, ctx: &CallContext, port: u16, protocol: &str) -> Result<Scan> {
		require("protocol", protocol)?;

		let form = QueryParams::new().with("port", port.to_string()).with("protocol", protocol);

		let target = EndpointTarget::new(Origin::Main, Verb::Post, routes::SCAN_INTERNET).with_form_body(&form);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}
}
