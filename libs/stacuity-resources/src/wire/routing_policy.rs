use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::{Lookup, NamedRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingPolicyReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub vslice: NamedRef,
    pub rate_limit_uplink: Lookup,
    pub rate_limit_downlink: Lookup,
    pub packet_discard_uplink_percentage: i32,
    pub packet_discard_downlink_percentage: i32,
    pub routing_policy_status: Lookup,
    pub routing_policy_rules: Option<Vec<RoutingRule>>,
    pub routing_policy_edge_services: Option<Vec<EdgeService>>,
}

/// A rule as returned by the API. Pattern fields are `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingRule {
    pub id: String,
    pub routing_policy_id: String,
    pub description: String,
    pub rule_action: Lookup,
    pub rule_direction: Lookup,
    pub precedence: i32,
    pub source_ip_pattern: Option<String>,
    pub destination_ip_pattern: Option<String>,
    pub divert_ip: Option<String>,
    pub divert_port: Option<String>,
    pub transport_protocol: Option<Lookup>,
    pub source_port_pattern: Option<String>,
    pub destination_port_pattern: Option<String>,
    pub routing_target: Option<NamedRef>,
    pub reflexive: bool,
    pub enabled: bool,
    pub regional_gateway: Option<NamedRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeService {
    pub name: String,
    pub description: String,
    pub icon_shape: String,
    pub moniker: String,
    pub available: bool,
    pub enabled: bool,
    pub has_instance: bool,
    pub edge_service_instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingPolicyModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub vslice: String,
    pub routing_policy_status: String,
    pub routing_policy_rules: Vec<ModifyRule>,
    pub routing_policy_edge_services: Vec<EdgeService>,
    pub rate_limit_uplink_moniker: String,
    pub rate_limit_downlink_moniker: String,
    pub packet_discard_uplink_percentage: i32,
    pub packet_discard_downlink_percentage: i32,
}

/// A rule in a create / update body; lookups and references by moniker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifyRule {
    pub description: String,
    pub rule_action: String,
    pub rule_direction: String,
    pub source_ip_pattern: Option<String>,
    pub destination_ip_pattern: Option<String>,
    pub divert_ip: Option<String>,
    pub divert_port: Option<String>,
    pub transport_protocol: Option<String>,
    pub source_port_pattern: Option<String>,
    pub destination_port_pattern: Option<String>,
    pub routing_target: Option<String>,
    pub reflexive: bool,
    pub regional_gateway: Option<String>,
    pub enabled: bool,
}
