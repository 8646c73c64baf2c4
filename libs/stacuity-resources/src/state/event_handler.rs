use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EventHandlerResourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    pub configuration_data: HandlerConfigurationModel,
    #[record(only = "to_wire")]
    pub event_endpoint_type: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct HandlerConfigurationModel {
    pub webhook_config: Option<WebhookConfigModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct WebhookConfigModel {
    pub url: Value<String>,
    pub username: Value<String>,
    pub password: Value<String>,
    pub timeout: Value<String>,
    pub bearer_token: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EventHandlerReadModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub configuration_data: HandlerConfigurationModel,
    pub event_endpoint_type: EventEndpointTypeModel,
    pub summary_description: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EventEndpointTypeModel {
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub active: Value<bool>,
}
