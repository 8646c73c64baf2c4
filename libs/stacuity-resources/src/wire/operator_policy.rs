use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::Lookup;

/// What a steering profile does with a matching operator.
pub type SteeringProfileEntryAction = Lookup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorPolicyReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub moniker: String,
    pub name: String,
    pub allow2g: bool,
    pub allow3g: bool,
    pub allow45g: bool,
    pub entries: Option<Vec<OperatorPolicyEntry>>,
}

/// One operator or country rule. Either `operator_id` or `iso3` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorPolicyEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub operator_id: Option<i32>,
    pub iso3: Option<String>,
    pub steering_profile_entry_action: SteeringProfileEntryAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorPolicyModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub entries: Option<Vec<OperatorPolicyEntryModifyItem>>,
}

/// Entry body; the action goes by moniker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorPolicyEntryModifyItem {
    pub operator_id: Option<i32>,
    pub iso3: Option<String>,
    pub steering_profile_entry_action: String,
}
