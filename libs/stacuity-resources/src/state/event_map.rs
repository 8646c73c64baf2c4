use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

use super::{LookupModel, NamedRefModel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EventMapResourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    #[record(only = "to_wire")]
    pub event_scope: Value<String>,
    #[record(only = "to_wire")]
    pub subscriptions: Option<Vec<SubscriptionResourceModel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct SubscriptionResourceModel {
    pub event_endpoint_id: Value<String>,
    pub event_type_id: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EventMapReadModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub event_scope: LookupModel,
    pub subscriptions: Vec<SubscriptionModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct SubscriptionModel {
    pub event_map: NamedRefModel,
    pub event_endpoint: EventEndpointModel,
    pub event_type: LookupModel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EventEndpointModel {
    pub moniker: Value<String>,
    pub name: Value<String>,
    #[serde(rename = "type")]
    pub endpoint_type: Value<String>,
    pub summary_description: Value<String>,
}
