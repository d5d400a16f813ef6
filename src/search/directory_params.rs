use crate::common::QueryParams;
use crate::search::ToQueryParams;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Serialize, Deserialize)]
pub enum QuerySort {
	#[display("votes")]
	Votes,
	#[display("timestamp")]
	Timestamp,
}

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Serialize, Deserialize)]
pub enum SortOrder {
	#[display("asc")]
	Asc,
	#[display("desc")]
	Desc,
}

/// Listing parameters for the saved search query directory.
/// Each page contains 10 items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryParams {
	pub page: Option<u32>,
	pub sort: Option<QuerySort>,
	pub order: Option<SortOrder>,
}

impl DirectoryParams {
	#[must_use]
	pub fn with_page(mut self, page: u32) -> Self {
		self.page = Some(page);
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: QuerySort, order: SortOrder) -> Self {
		self.sort = Some(sort);
		self.order = Some(order);
		self
	}
}

impl ToQueryParams for DirectoryParams {
	fn to_query_params(&self) -> QueryParams {
		let mut params = QueryParams::new();
		// page 0 means "not set"
		if let Some(page) = self.page.filter(|p| *p > 0) {
			params.set("page", page.to_string());
		}
		if let Some(sort) = self.sort {
			params.set("sort", sort.to_string());
		}
		if let Some(order) = self.order {
			params.set("order", order.to_string());
		}
		params
	}
}
