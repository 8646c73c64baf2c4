use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

use super::{LookupModel, NamedRefModel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RoutingPolicyResourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    #[record(only = "to_wire")]
    pub vslice: Value<String>,
    #[record(only = "to_wire")]
    pub routing_policy_status: Value<String>,
    #[record(only = "to_wire")]
    pub routing_policy_rules: Vec<RoutingRuleModel>,
    pub routing_policy_edge_services: Vec<EdgeServiceModel>,
    pub rate_limit_uplink_moniker: Value<String>,
    pub rate_limit_downlink_moniker: Value<String>,
    pub packet_discard_uplink_percentage: Value<i32>,
    pub packet_discard_downlink_percentage: Value<i32>,
}

/// A declared rule. Unset patterns go out as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RoutingRuleModel {
    pub description: Value<String>,
    pub rule_action: Value<String>,
    pub rule_direction: Value<String>,
    pub source_ip_pattern: Value<String>,
    pub destination_ip_pattern: Value<String>,
    pub divert_ip: Value<String>,
    pub divert_port: Value<String>,
    pub transport_protocol: Value<String>,
    pub source_port_pattern: Value<String>,
    pub destination_port_pattern: Value<String>,
    pub routing_target: Value<String>,
    pub reflexive: Value<bool>,
    pub regional_gateway: Value<String>,
    pub enabled: Value<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EdgeServiceModel {
    pub moniker: Value<String>,
    pub enabled: Value<bool>,
    pub edge_service_instance_ids: Vec<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RoutingPolicyReadModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    pub vslice: NamedRefModel,
    pub rate_limit_uplink: LookupModel,
    pub rate_limit_downlink: LookupModel,
    pub packet_discard_uplink_percentage: Value<i32>,
    pub packet_discard_downlink_percentage: Value<i32>,
    pub routing_policy_status: LookupModel,
    pub routing_policy_rules: Vec<RoutingPolicyRuleModel>,
    pub routing_policy_edge_services: Vec<EdgeServiceReadModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RoutingPolicyRuleModel {
    pub id: Value<String>,
    pub routing_policy_id: Value<String>,
    pub description: Value<String>,
    pub rule_action: LookupModel,
    pub rule_direction: LookupModel,
    pub precedence: Value<i32>,
    pub source_ip_pattern: Value<String>,
    pub destination_ip_pattern: Value<String>,
    pub divert_ip: Value<String>,
    pub divert_port: Value<String>,
    pub transport_protocol: Option<LookupModel>,
    pub source_port_pattern: Value<String>,
    pub destination_port_pattern: Value<String>,
    pub routing_target: NamedRefModel,
    pub reflexive: Value<bool>,
    pub enabled: Value<bool>,
    pub regional_gateway: NamedRefModel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct EdgeServiceReadModel {
    pub name: Value<String>,
    pub description: Value<String>,
    pub icon_shape: Value<String>,
    pub moniker: Value<String>,
    pub available: Value<bool>,
    pub enabled: Value<bool>,
    pub has_instance: Value<bool>,
    pub edge_service_instance_ids: Vec<Value<String>>,
}
