use std::sync::Arc;

/// A construct to store the base url of one origin.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Joins the base url with an already resolved path (`/shodan/host/1.2.3.4`).
	/// A trailing `/` on the base url is not doubled.
	#[must_use]
	pub fn join(&self, path: &str) -> String {
		let base = self.inner.trim_end_matches('/');
		if path.starts_with('/') {
			format!("{base}{path}")
		} else {
			format!("{base}/{path}")
		}
	}
}
