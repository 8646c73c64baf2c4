use std::path::Path;

use serde::Deserialize;

use crate::error::ResourceError;

/// Root configuration of the conversion tool, parsed from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolConfig {
    /// Default tracing filter, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Resolve every registered conversion plan before doing any work.
    #[serde(default = "default_true")]
    pub validate_on_startup: bool,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            validate_on_startup: true,
            pretty: true,
        }
    }
}

impl ToolConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, ResourceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ResourceError::Config(format!("{path}: {e}")))?;
        Self::parse(&content).map_err(|e| e.with_context(path))
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ResourceError> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::debug!(path, "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, ResourceError> {
        toml::from_str(toml_str).map_err(|e| ResourceError::Config(e.to_string()))
    }
}
