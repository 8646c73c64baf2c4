use stacuity_model::ConversionError;

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("config error: {0}")]
    Config(String),

    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("invalid {entity} model: {source}")]
    InvalidModel {
        entity: String,
        source: ConversionError,
    },

    #[error("api error: {0}")]
    Api(String),

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    /// Add context to the error.
    ///
    /// Message variants get the context prepended. A bare `Conversion` error
    /// becomes `InvalidModel` with the context as the entity name.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            ResourceError::Config(msg) => ResourceError::Config(format!("{ctx}: {msg}")),
            ResourceError::Api(msg) => ResourceError::Api(format!("{ctx}: {msg}")),
            ResourceError::Conversion(source) => ResourceError::InvalidModel {
                entity: ctx.to_string(),
                source,
            },
            other => other,
        }
    }
}
