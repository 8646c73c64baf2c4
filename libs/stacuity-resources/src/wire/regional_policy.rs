use serde::{Deserialize, Serialize};
use stacuity_model::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalPolicyReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub moniker: String,
    pub name: String,
    pub active: bool,
    pub is_fixed: bool,
    pub entries: Option<Vec<RegionalPolicyEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalPolicyEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub operator_id: Option<i32>,
    pub regional_gateway_policy_id: Option<String>,
    pub iso3: Option<String>,
    pub regional_gateway: RegionalGateway,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalGateway {
    pub moniker: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalPolicyModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub entries: Option<Vec<RegionalPolicyEntryModifyItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalPolicyEntryModifyItem {
    pub regional_gateway_id: Option<String>,
    pub operator_id: Option<i32>,
    pub iso3: Option<String>,
}
