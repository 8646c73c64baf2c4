use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::event_map::EventEndpoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EventHandlerReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub moniker: String,
    pub name: String,
    pub configuration_data: HandlerConfiguration,
    pub summary_description: String,
    pub event_endpoint_type: EventEndpoint,
}

/// Delivery settings of a handler. Webhooks are the only kind so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct HandlerConfiguration {
    pub webhook_config: Option<WebhookConfig>,
}

/// Either a bearer token or a username / password pair authenticates the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EventHandlerModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub configuration_data: HandlerConfiguration,
    pub event_endpoint_type: String,
}
