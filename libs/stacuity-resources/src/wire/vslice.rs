use serde::{Deserialize, Serialize};
use stacuity_model::Record;

use super::{Lookup, NamedRef};

pub type EventMapRef = NamedRef;
pub type DnsMode = Lookup;
pub type IpAddressFamily = Lookup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct VSliceReadItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub subnets: Vec<String>,
    pub dns_servers: Vec<String>,
    pub event_map: Option<EventMapRef>,
    pub dns_mode: DnsMode,
    pub ip_address_family: IpAddressFamily,
    pub endpoint_group_count: i32,
    pub endpoint_count: i32,
}

/// Create / update body. Lookups and references are sent as monikers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct VSliceModifyItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub moniker: String,
    pub dns_servers: Vec<String>,
    pub dns_mode: String,
    pub ip_address_family: String,
    pub subnet_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_allocation_type: String,
    pub event_map: String,
}
