use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

use super::{LookupModel, NamedRefModel};

/// References are declared by moniker; the read item returns them as
/// objects, so they only flow towards the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EndpointGroupResourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    #[record(only = "to_wire")]
    pub vslice: Value<String>,
    #[record(only = "to_wire")]
    pub event_map: Value<String>,
    #[record(only = "to_wire")]
    pub routing_policy: Value<String>,
    #[serde(rename = "operator_policy")]
    #[record(only = "to_wire")]
    pub steering_profile: Value<String>,
    #[record(only = "to_wire")]
    pub regional_gateway_policy: Value<String>,
    #[record(only = "to_wire")]
    pub ip_allocation_type: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EndpointGroupReadModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub endpoints_assigned: Value<i32>,
    pub vslice: NamedRefModel,
    pub event_map: Option<NamedRefModel>,
    pub routing_policy: Option<LookupModel>,
    pub steering_profile: Option<NamedRefModel>,
    pub regional_gateway_policy: NamedRefModel,
    pub ip_allocation_type: LookupModel,
    pub customer_id: Value<String>,
}
