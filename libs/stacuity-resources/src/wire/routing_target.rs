use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::{Lookup, NamedRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingTargetReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub routing_target_type: Lookup,
    pub routing_target_status: Lookup,
    #[serde(rename = "vSlice")]
    pub vslice: NamedRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_data: Option<ConfigurationData>,
    pub public_instance_configuration: String,
    pub network_key: i32,
    pub routing_target_type_instance: RoutingTargetTypeInstance,
    pub routing_redundancy_zone_moniker: String,
    pub routing_redundancy_zone_name: String,
    pub regional_gateway_moniker: String,
    pub regional_gateway_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingTargetTypeInstance {
    pub id: i32,
    pub name: String,
    pub moniker: String,
}

/// Tunnel settings; at most one of the two is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire_guard_config: Option<WireGuardConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_config: Option<VpnConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct WireGuardConfig {
    pub local_subnets: String,
    pub local_public_key: String,
    pub remote_public_key: String,
    pub remote_subnets: String,
    #[serde(rename = "remotePeerIPAddress")]
    pub remote_peer_ip_address: String,
    pub remote_peer_port_number: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct VpnConfig {
    pub local_subnets: String,
    pub remote_subnets: String,
    pub remote_peer_address: String,
    pub remote_encryption_domain: String,
    pub local_encryption_domain: String,
    pub preshared_key: String,
    pub key_exchange_type: String,
    pub vpn_ike_option: String,
    pub vpn_esp_option: String,
    pub phase1_lifetime: i32,
    pub phase2_lifetime: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingTargetModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub routing_target_type: String,
    pub routing_redundancy_zone_moniker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_data: Option<ConfigurationData>,
    pub subnet_address: String,
    pub vslice: String,
    pub routing_target_type_instance_id: String,
}
