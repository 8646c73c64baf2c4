use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::{Lookup, NamedRef};

pub type EventScope = Lookup;
pub type EventType = Lookup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EventMapReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub moniker: String,
    pub name: String,
    pub event_scope: EventScope,
    /// `null` when the map was fetched without its subscriptions.
    pub subscriptions: Option<Vec<Subscription>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub event_map: NamedRef,
    pub event_endpoint: EventEndpoint,
    pub event_type: EventType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EventEndpoint {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    #[serde(rename = "type")]
    pub endpoint_type: String,
    pub active: bool,
    pub summary_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EventMapModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub event_scope: String,
    pub subscriptions: Option<Vec<SubscriptionModifyItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub event_endpoint_id: String,
    pub event_type_id: String,
}
