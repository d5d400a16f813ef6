use super::support::{HOSTNAMES_LEN_LIMIT, IPS_LEN_LIMIT, join_list, require};
use crate::common::QueryParams;
use crate::models::Domain;
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, ResponseShape, Result};
use std::collections::HashMap;

/// DNS methods
impl Client {
	/// IP address of each hostname. Unresolved hostnames map to `None`.
	pub async fn dns_resolve<S: AsRef<str>>(
		&self,
		ctx: &CallContext,
		hostnames: &[S],
	) -> Result<HashMap<String, Option<String>>> {
		let hostnames = join_list("hostnames", hostnames, Some(HOSTNAMES_LEN_LIMIT))?;

		let target = EndpointTarget::get(routes::DNS_RESOLVE).with_query(QueryParams::new().with("hostnames", hostnames));
		self.dispatch(ctx, target, ResponseShape::Mapping).await
	}

	/// Hostnames defined for each IP. IPs without hostnames map to `None`.
	pub async fn dns_reverse<S: AsRef<str>>(
		&self,
		ctx: &CallContext,
		ips: &[S],
	) -> Result<HashMap<String, Option<Vec<String>>>> {
		let ips = join_list("ips", ips, Some(IPS_LEN_LIMIT))?;

		let target = EndpointTarget::get(routes::DNS_REVERSE).with_query(QueryParams::new().with("ips", ips));
		self.dispatch(ctx, target, ResponseShape::Mapping).await
	}

	/// Subdomains and historical DNS records of a domain.
	pub async fn dns_domain(&self, ctx: &CallContext, domain: &str) -> Result<Domain> {
		require("domain", domain)?;

		let target = EndpointTarget::get(routes::dns_domain(domain));
		self.dispatch(ctx, target, ResponseShape::Record).await
	}
}
