//! Look up a host, then count similar hosts by country.
//!
//! `SHODAN_API_KEY=... cargo run --example c01-host-lookup -- 8.8.8.8`

use shodan::search::{Facet, HostParams, Query, SearchParams};
use shodan::{CallContext, Client};
use std::time::Duration;

const DEFAULT_IP: &str = "8.8.8.8";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let ip = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_IP.to_string());
	let client = Client::from_env()?;
	let ctx = CallContext::new().with_timeout(Duration::from_secs(30));

	println!("\n--- Host {ip}");
	let host = client.host(&ctx, &HostParams::new(&ip).with_minify(true)).await?;
	println!("org:   {}", host.org.as_deref().unwrap_or("-"));
	println!("os:    {}", host.os.as_deref().unwrap_or("-"));
	println!("ports: {:?}", host.ports);

	let Some(org) = host.org else {
		return Ok(());
	};

	println!("\n--- Hosts of '{org}' by country (no query credits)");
	let params = SearchParams::new(Query::filters_only().with_org(org)).with_facet(Facet::with_size("country", 5));
	let res = client.count(&ctx, &params).await?;
	println!("total: {}", res.total);
	for bucket in res.facets.get("country").into_iter().flatten() {
		println!("  {:>8}  {}", bucket.count, bucket.value);
	}

	Ok(())
}
