use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

use super::{LookupModel, NamedRefModel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RoutingTargetResourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    #[record(only = "to_wire")]
    pub routing_target_type: Value<String>,
    #[serde(rename = "redundancy_zone_moniker")]
    pub routing_redundancy_zone_moniker: Value<String>,
    pub configuration_data: Option<ConfigurationDataModel>,
    #[record(only = "to_wire")]
    pub vslice: Value<String>,
    pub routing_target_type_instance_id: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct ConfigurationDataModel {
    pub vpn_config: Option<VpnConfigModel>,
    #[serde(rename = "wireguard_config")]
    pub wire_guard_config: Option<WireGuardConfigModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct VpnConfigModel {
    pub remote_peer_address: Value<String>,
    pub remote_subnets: Value<String>,
    pub remote_encryption_domain: Value<String>,
    pub local_encryption_domain: Value<String>,
    pub local_subnets: Value<String>,
    pub preshared_key: Value<String>,
    pub key_exchange_type: Value<String>,
    pub vpn_ike_option: Value<String>,
    pub vpn_esp_option: Value<String>,
    pub phase1_lifetime: Value<i32>,
    pub phase2_lifetime: Value<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct WireGuardConfigModel {
    pub local_public_key: Value<String>,
    pub local_subnets: Value<String>,
    pub remote_public_key: Value<String>,
    pub remote_subnets: Value<String>,
    pub remote_peer_ip_address: Value<String>,
    pub remote_peer_port_number: Value<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct RoutingTargetReadModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    pub routing_target_type: LookupModel,
    pub routing_target_status: LookupModel,
    pub vslice: NamedRefModel,
    pub public_instance_configuration: Value<String>,
    pub routing_redundancy_zone_name: Value<String>,
    pub routing_redundancy_zone_moniker: Value<String>,
    pub regional_gateway_moniker: Value<String>,
    pub regional_gateway_name: Value<String>,
}
