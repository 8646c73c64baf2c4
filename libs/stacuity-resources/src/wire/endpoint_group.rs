use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::{Lookup, NamedRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointGroupReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub moniker: String,
    pub name: String,
    pub endpoints_assigned: i32,
    pub vslice: NamedRef,
    pub event_map: Option<NamedRef>,
    pub routing_policy: Option<Lookup>,
    pub steering_profile: Option<NamedRef>,
    pub regional_gateway_policy: NamedRef,
    pub ip_allocation_type: Lookup,
    pub customer_id: String,
}

/// Create / update body. Unset optional references are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointGroupModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub event_map: Option<String>,
    pub routing_policy: Option<String>,
    pub steering_profile: Option<String>,
    pub regional_gateway_policy: String,
    pub ip_allocation_type: String,
    pub vslice: String,
}
