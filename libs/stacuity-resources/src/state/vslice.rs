use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

use super::{LookupModel, NamedRefModel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct VSliceResourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    pub dns_servers: Vec<Value<String>>,
    #[record(only = "to_wire")]
    pub dns_mode: Value<String>,
    #[record(only = "to_wire")]
    pub ip_address_family: Value<String>,
    pub subnet_address: Value<String>,
    pub ip_allocation_type: Value<String>,
    #[record(only = "to_wire")]
    pub event_map: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct VSliceReadModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub moniker: Value<String>,
    pub subnets: Vec<Value<String>>,
    pub dns_servers: Vec<Value<String>>,
    pub event_map: Option<NamedRefModel>,
    pub dns_mode: LookupModel,
    pub ip_address_family: LookupModel,
    pub endpoint_group_count: Value<i32>,
    pub endpoint_count: Value<i32>,
}
