use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

use super::LookupModel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct OperatorPolicyResourceModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub entries: Option<Vec<OperatorPolicyEntryResourceModel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct OperatorPolicyEntryResourceModel {
    pub operator_id: Value<i32>,
    #[serde(rename = "iso_3")]
    pub iso3: Value<String>,
    // Read back as a lookup object, sent as its moniker.
    #[record(only = "to_wire")]
    pub steering_profile_entry_action: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct OperatorPolicyReadModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    #[serde(rename = "allow_2g")]
    pub allow2g: Value<bool>,
    #[serde(rename = "allow_3g")]
    pub allow3g: Value<bool>,
    #[serde(rename = "allow_45g")]
    pub allow45g: Value<bool>,
    pub entries: Vec<OperatorPolicyEntryModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct OperatorPolicyEntryModel {
    pub id: Value<String>,
    pub operator_id: Value<i32>,
    #[serde(rename = "iso_3")]
    pub iso3: Value<String>,
    pub steering_profile_entry_action: LookupModel,
}
