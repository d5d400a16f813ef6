use crate::{Error, Result};

/// Max length of the comma joined `hostnames` value of `/dns/resolve`.
pub(super) const HOSTNAMES_LEN_LIMIT: usize = 3575;
/// Max length of the comma joined `ips` value of `/dns/reverse`.
pub(super) const IPS_LEN_LIMIT: usize = 3369;

/// Fails with `MissingParameter` when `value` is empty, and with `InvalidPathSegment` when it
/// is a dot segment (url parsing would resolve it against the route).
pub(super) fn require(name: &'static str, value: &str) -> Result<()> {
	if value.is_empty() {
		return Err(Error::MissingParameter { name });
	}
	if matches!(value, "." | "..") {
		return Err(Error::InvalidPathSegment { name });
	}
	Ok(())
}

/// Comma joins `items`. Fails when the list is empty, or when `limit` is given and the joined
/// string is longer than it (the limit applies to the joined length, not the item count).
pub(super) fn join_list<S: AsRef<str>>(name: &'static str, items: &[S], limit: Option<usize>) -> Result<String> {
	if items.is_empty() {
		return Err(Error::MissingParameter { name });
	}

	let joined = items.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(",");

	if let Some(limit) = limit
		&& joined.len() > limit
	{
		return Err(Error::RequestTooBig {
			name,
			len: joined.len(),
			limit,
		});
	}

	Ok(joined)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_require() {
		assert!(require("alert_id", "ABC").is_ok());
		assert!(matches!(require("alert_id", ""), Err(Error::MissingParameter { name: "alert_id" })));
		assert!(matches!(require("alert_id", ".."), Err(Error::InvalidPathSegment { name: "alert_id" })));
		assert!(require("alert_id", "../x").is_ok());
	}

	#[test]
	fn test_join_list_limit_on_joined_len() {
		// 3 items of 1000 chars: 3002 joined chars.
		let items = vec!["a".repeat(1000); 3];
		assert_eq!(join_list("ips", &items, Some(3002)).unwrap().len(), 3002);

		let res = join_list("ips", &items, Some(3001));
		assert!(matches!(
			res,
			Err(Error::RequestTooBig {
				name: "ips",
				len: 3002,
				limit: 3001
			})
		));
	}

	#[test]
	fn test_join_list_empty() {
		let items: Vec<String> = Vec::new();
		assert!(matches!(
			join_list("hostnames", &items, None),
			Err(Error::MissingParameter { name: "hostnames" })
		));
	}
}
