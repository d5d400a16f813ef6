//! Search the Exploits API, with Ctrl-C cancelling the in-flight call.
//!
//! `SHODAN_API_KEY=... cargo run --example c02-exploits -- "apache"`

use shodan::search::{ExploitParams, Query};
use shodan::{CallContext, Client, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let text = std::env::args().nth(1).unwrap_or_else(|| "openssh".to_string());
	let client = Client::from_env()?;

	let ctx = CallContext::new();
	let canceller = ctx.clone();
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			canceller.cancel();
		}
	});

	let params = ExploitParams::new(Query::new(text).with_type("remote")).with_facet("source");

	let res = match client.exploit_search(&ctx, &params).await {
		Ok(res) => res,
		Err(err @ Error::Cancelled { .. }) => {
			eprintln!("cancelled: {err}");
			return Ok(());
		}
		Err(err) => return Err(err.into()),
	};

	println!("\n--- {} exploits", res.total);
	for exploit in res.matches.iter().take(10) {
		println!(
			"[{}] {}",
			exploit.source.as_deref().unwrap_or("?"),
			exploit.description.as_deref().unwrap_or("").lines().next().unwrap_or("")
		);
	}

	Ok(())
}
