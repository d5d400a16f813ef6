//! Route table: origin base urls and path templates.
//!
//! Templated routes are functions returning the resolved path. Each slot value is percent-encoded
//! into a single path segment (`/`, `?`, `#` cannot escape it). `:` is kept, for `ip:port` and IPv6.

// region:    --- Origins

pub const API_ROOT: &str = "https://api.shodan.io";
pub const API_EXPLOITS: &str = "https://exploits.shodan.io/api";

// endregion: --- Origins

// region:    --- Exploits API

pub const EXPLOITS_SEARCH: &str = "/search";
pub const EXPLOITS_COUNT: &str = "/count";

// endregion: --- Exploits API

// region:    --- Search Methods

pub const HOST_COUNT: &str = "/shodan/host/count";
pub const HOST_SEARCH: &str = "/shodan/host/search";
pub const HOST_SEARCH_TOKENS: &str = "/shodan/host/search/tokens";
pub const PORTS: &str = "/shodan/ports";
pub const PROTOCOLS: &str = "/shodan/protocols";
pub const SERVICES: &str = "/shodan/services";

pub fn host_view(ip: &str) -> String {
	format!("/shodan/host/{}", segment(ip))
}

// endregion: --- Search Methods

// region:    --- On-Demand Scanning

pub const SCAN: &str = "/shodan/scan";
pub const SCANS: &str = "/shodan/scans";
pub const SCAN_INTERNET: &str = "/shodan/scan/internet";

pub fn scan_view(scan_id: &str) -> String {
	format!("/shodan/scan/{}", segment(scan_id))
}

// endregion: --- On-Demand Scanning

// region:    --- Directory Methods

pub const QUERY: &str = "/shodan/query";
pub const QUERY_SEARCH: &str = "/shodan/query/search";
pub const QUERY_TAGS: &str = "/shodan/query/tags";

// endregion: --- Directory Methods

// region:    --- Network Alerts

pub const ALERT: &str = "/shodan/alert";
pub const ALERT_INFO: &str = "/shodan/alert/info";
/// Available triggers that can be enabled for alerts.
pub const ALERT_TRIGGERS: &str = "/shodan/alert/triggers";

pub fn alert(alert_id: &str) -> String {
	format!("/shodan/alert/{}", segment(alert_id))
}

pub fn alert_info(alert_id: &str) -> String {
	format!("/shodan/alert/{}/info", segment(alert_id))
}

/// Enable (PUT) or disable (DELETE) a trigger on an alert.
pub fn alert_trigger(alert_id: &str, trigger: &str) -> String {
	format!("/shodan/alert/{}/trigger/{}", segment(alert_id), segment(trigger))
}

/// Ignore (PUT) or re-enable (DELETE) trigger notifications for a service (`ip:port`).
pub fn alert_trigger_ignore(alert_id: &str, trigger: &str, service: &str) -> String {
	format!(
		"/shodan/alert/{}/trigger/{}/ignore/{}",
		segment(alert_id),
		segment(trigger),
		segment(service)
	)
}

// endregion: --- Network Alerts

// region:    --- Bulk Data

pub const DATA: &str = "/shodan/data";

pub fn dataset(dataset: &str) -> String {
	format!("/shodan/data/{}", segment(dataset))
}

// endregion: --- Bulk Data

// region:    --- Manage Organization

pub const ORG: &str = "/org";

pub fn org_member(username: &str) -> String {
	format!("/org/member/{}", segment(username))
}

// endregion: --- Manage Organization

// region:    --- Account, DNS, Utility, Labs

pub const ACCOUNT_PROFILE: &str = "/account/profile";
pub const DNS_RESOLVE: &str = "/dns/resolve";
pub const DNS_REVERSE: &str = "/dns/reverse";
pub const TOOLS_HTTP_HEADERS: &str = "/tools/httpheaders";
pub const TOOLS_MY_IP: &str = "/tools/myip";
pub const API_INFO: &str = "/api-info";

pub fn dns_domain(domain: &str) -> String {
	format!("/dns/domain/{}", segment(domain))
}

pub fn labs_honeyscore(ip: &str) -> String {
	format!("/labs/honeyscore/{}", segment(ip))
}

// endregion: --- Account, DNS, Utility, Labs

// region:    --- Support

/// Percent-encodes `value` as one path segment, keeping `:`.
/// Dot segments (`.`, `..`) are normalized away by url parsing even when encoded, so callers reject them.
fn segment(value: &str) -> String {
	value.split(':').map(urlencoding::encode).collect::<Vec<_>>().join(":")
}

// endregion: --- Support

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_templated_routes() {
		assert_eq!(host_view("1.2.3.4"), "/shodan/host/1.2.3.4");
		assert_eq!(alert_info("ABC"), "/shodan/alert/ABC/info");
		assert_eq!(
			alert_trigger_ignore("ABC", "malware", "1.2.3.4:80"),
			"/shodan/alert/ABC/trigger/malware/ignore/1.2.3.4:80"
		);
		assert_eq!(dns_domain("example.com"), "/dns/domain/example.com");
		assert_eq!(host_view("2001:db8::1"), "/shodan/host/2001:db8::1");
	}

	#[test]
	fn test_slots_stay_in_their_segment() {
		assert_eq!(alert("../../org/member/jdoe"), "/shodan/alert/..%2F..%2Forg%2Fmember%2Fjdoe");
		assert_eq!(alert_info("AB#C"), "/shodan/alert/AB%23C/info");
		assert_eq!(scan_view("a?b=c"), "/shodan/scan/a%3Fb%3Dc");
		assert_eq!(org_member("j doe"), "/org/member/j%20doe");
	}
}
