use serde::{Deserialize, Serialize};
use stacuity_model::{Record, Value};

/// Data-source filter block; converts to `PagingState` for list requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct FilterModel {
    pub offset: Value<i32>,
    pub limit: Value<i32>,
    pub filter: Value<String>,
    pub sort_by: Value<String>,
}
