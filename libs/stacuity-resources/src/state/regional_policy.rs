use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RegionalPolicyResourceModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub entries: Option<Vec<RegionalPolicyEntryResourceModel>>,
}

/// `regional_gateway_id` is only sent; read entries report the gateway as
/// an object instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RegionalPolicyEntryResourceModel {
    pub regional_gateway_id: Value<String>,
    pub operator_id: Value<i32>,
    #[serde(rename = "iso_3")]
    pub iso3: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RegionalPolicyReadModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub is_fixed: Value<bool>,
    pub active: Value<bool>,
    pub entries: Vec<RegionalPolicyEntryModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RegionalPolicyEntryModel {
    pub id: Value<String>,
    pub operator_id: Value<i32>,
    #[serde(rename = "iso_3")]
    pub iso3: Value<String>,
    pub regional_gateway_policy_id: Value<String>,
    pub regional_gateway: RegionalGatewayModel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RegionalGatewayModel {
    pub moniker: Value<String>,
    pub name: Value<String>,
}
