//! Stacuity entity models and the conversions between them.
//!
//! [`wire`] holds the API payloads, [`state`] the tri-state models kept by
//! the provider, and [`registry`] pairs them per entity.

pub mod config;
pub mod error;
pub mod registry;
pub mod state;
pub mod wire;

pub use config::ToolConfig;
pub use error::ResourceError;
pub use registry::{Entity, validate_all};
