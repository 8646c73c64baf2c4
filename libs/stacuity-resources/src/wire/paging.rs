use serde::{Deserialize, Serialize};
use stacuity_model::Record;

/// List query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase", default)]
pub struct PagingState {
    pub offset: i32,
    pub limit: i32,
    pub sort_by: String,
    pub filter: String,
}

impl PagingState {
    /// Query-string pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("filter", self.filter.clone()),
        ]
    }
}
