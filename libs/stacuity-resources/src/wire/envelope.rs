use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Response to a list request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiList<T> {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub total_items: i32,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Response to a get-by-id request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSingle<T> {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub total_items: i32,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
    pub data: T,
}

/// Response to a create, update or delete; `data` carries the entity id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub data: String,
}

fn check(success: bool, messages: &[String]) -> Result<(), ResourceError> {
    if success {
        Ok(())
    } else {
        Err(ResourceError::Api(messages.join(" ")))
    }
}

impl<T> ApiList<T> {
    pub fn into_result(self) -> Result<Vec<T>, ResourceError> {
        check(self.success, &self.messages)?;
        Ok(self.data)
    }
}

impl<T> ApiSingle<T> {
    pub fn into_result(self) -> Result<T, ResourceError> {
        check(self.success, &self.messages)?;
        Ok(self.data)
    }
}

impl ApiResponse {
    pub fn into_result(self) -> Result<String, ResourceError> {
        check(self.success, &self.messages)?;
        Ok(self.data)
    }
}
