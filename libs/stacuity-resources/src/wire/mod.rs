//! API payloads, exactly as the provider sends and accepts them.
//!
//! Plain scalars only; optional nested objects are `Option`. Every type is
//! `serde(default)` so a payload missing a field decodes to the zero value.

pub mod endpoint_group;
pub mod envelope;
pub mod event_handler;
pub mod event_map;
pub mod operator_policy;
pub mod paging;
pub mod regional_policy;
pub mod routing_policy;
pub mod routing_target;
pub mod vslice;

use serde::{Deserialize, Serialize};
use stacuity_model::Record;

/// Enumerated lookup value (`dnsMode`, `eventScope`, `ruleAction`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct Lookup {
    pub key: i32,
    pub moniker: String,
    pub name: String,
    pub active: bool,
}

/// Reference to another entity by id, moniker and display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedRef {
    pub id: String,
    pub moniker: String,
    pub name: String,
}
