//! State models: every leaf is a tri-state [`Value`].
//!
//! Field names follow the wire models so the engine can pair them. Read
//! models mirror the read items; resource models hold what a user declares
//! and convert into modify items.

pub mod endpoint_group;
pub mod event_handler;
pub mod event_map;
pub mod operator_policy;
pub mod paging;
pub mod regional_policy;
pub mod routing_policy;
pub mod routing_target;
pub mod vslice;

use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct LookupModel {
    pub key: Value<i32>,
    pub moniker: Value<String>,
    pub name: Value<String>,
    pub active: Value<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct NamedRefModel {
    pub id: Value<String>,
    pub moniker: Value<String>,
    pub name: Value<String>,
}
