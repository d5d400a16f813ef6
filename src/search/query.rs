use serde::{Deserialize, Serialize};

/// A Shodan search query: free text followed by `name:value` filters.
///
/// ```
/// use shodan::search::Query;
///
/// let query = Query::new("nginx").with_port(443).with_country("DE").with_org("Example GmbH");
/// assert_eq!(query.to_query_string(), r#"nginx port:443 country:DE org:"Example GmbH""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
	pub text: Option<String>,
	pub filters: Vec<(String, String)>,
}

/// Constructors
impl Query {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: Some(text.into()),
			filters: Vec::new(),
		}
	}

	/// A query made only of filters.
	#[must_use]
	pub fn filters_only() -> Self {
		Self::default()
	}
}

/// Chainable Setters
impl Query {
	/// Append a raw `name:value` filter. Filters may repeat (e.g., two `port` filters).
	#[must_use]
	pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.filters.push((name.into(), value.into()));
		self
	}

	// -- Host filters

	#[must_use]
	pub fn with_port(self, port: u16) -> Self {
		self.with_filter("port", port.to_string())
	}

	#[must_use]
	pub fn with_country(self, country_code: impl Into<String>) -> Self {
		self.with_filter("country", country_code)
	}

	#[must_use]
	pub fn with_city(self, city: impl Into<String>) -> Self {
		self.with_filter("city", city)
	}

	#[must_use]
	pub fn with_org(self, org: impl Into<String>) -> Self {
		self.with_filter("org", org)
	}

	#[must_use]
	pub fn with_hostname(self, hostname: impl Into<String>) -> Self {
		self.with_filter("hostname", hostname)
	}

	/// CIDR notation, e.g. `198.51.100.0/24`.
	#[must_use]
	pub fn with_net(self, net: impl Into<String>) -> Self {
		self.with_filter("net", net)
	}

	#[must_use]
	pub fn with_product(self, product: impl Into<String>) -> Self {
		self.with_filter("product", product)
	}

	#[must_use]
	pub fn with_os(self, os: impl Into<String>) -> Self {
		self.with_filter("os", os)
	}

	#[must_use]
	pub fn with_asn(self, asn: impl Into<String>) -> Self {
		self.with_filter("asn", asn)
	}

	#[must_use]
	pub fn with_vuln(self, cve: impl Into<String>) -> Self {
		self.with_filter("vuln", cve)
	}

	// -- Exploit filters

	#[must_use]
	pub fn with_author(self, author: impl Into<String>) -> Self {
		self.with_filter("author", author)
	}

	#[must_use]
	pub fn with_cve(self, cve: impl Into<String>) -> Self {
		self.with_filter("cve", cve)
	}

	#[must_use]
	pub fn with_platform(self, platform: impl Into<String>) -> Self {
		self.with_filter("platform", platform)
	}

	/// Exploit type (`dos`, `exploit`, `local`, `remote`, `shellcode`, `webapps`).
	#[must_use]
	pub fn with_type(self, kind: impl Into<String>) -> Self {
		self.with_filter("type", kind)
	}
}

/// Encoder
impl Query {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.as_deref().is_none_or(|t| t.trim().is_empty()) && self.filters.is_empty()
	}

	/// Render as the single `query` parameter value.
	#[must_use]
	pub fn to_query_string(&self) -> String {
		let mut parts: Vec<String> = Vec::with_capacity(self.filters.len() + 1);

		if let Some(text) = self.text.as_deref().map(str::trim)
			&& !text.is_empty()
		{
			parts.push(text.to_string());
		}

		for (name, value) in &self.filters {
			parts.push(format!("{name}:{}", quote_filter_value(value)));
		}

		parts.join(" ")
	}
}

impl From<&str> for Query {
	fn from(text: &str) -> Self {
		Query::new(text)
	}
}

impl From<String> for Query {
	fn from(text: String) -> Self {
		Query::new(text)
	}
}

/// Values with whitespace must be double-quoted. Values already quoted are left alone.
fn quote_filter_value(value: &str) -> String {
	let already_quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
	if !already_quoted && value.chars().any(char::is_whitespace) {
		format!("\"{value}\"")
	} else {
		value.to_string()
	}
}
