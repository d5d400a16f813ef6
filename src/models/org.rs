use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Org {
	pub id: String,
	pub name: String,
	pub created: Option<String>,
	pub admins: Vec<OrgMember>,
	pub members: Vec<OrgMember>,
	pub upgrade_type: Option<String>,
	pub domains: Vec<String>,
	pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgMember {
	pub username: String,
	pub email: Option<String>,
}
