use crate::schema::Direction;

/// Failure of a single conversion call.
///
/// `path` locates the offending field from the top-level record, e.g.
/// `routing_policy_rules[].transport_protocol`. An empty path is the root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Source and destination disagree on sequence / record / scalar shape.
    #[error("shape mismatch at {}: source is {from}, destination is {to}", display_path(.path))]
    ShapeMismatch {
        path: String,
        from: String,
        to: String,
    },

    /// Both sides are leaves but no rule converts one into the other.
    #[error("unsupported field type at {}: no {direction} rule from {from} to {to}", display_path(.path))]
    UnsupportedFieldType {
        path: String,
        direction: Direction,
        from: String,
        to: String,
    },
}

impl ConversionError {
    pub fn shape_mismatch(from: impl ToString, to: impl ToString) -> Self {
        Self::ShapeMismatch {
            path: String::new(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn unsupported(direction: Direction, from: impl ToString, to: impl ToString) -> Self {
        Self::UnsupportedFieldType {
            path: String::new(),
            direction,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::ShapeMismatch { path, .. } | Self::UnsupportedFieldType { path, .. } => path,
        }
    }

    /// Prefix the path with the enclosing field name.
    pub fn within_field(mut self, name: &str) -> Self {
        let path = self.path_mut();
        *path = if path.is_empty() {
            name.to_string()
        } else if path.starts_with('[') {
            format!("{name}{path}")
        } else {
            format!("{name}.{path}")
        };
        self
    }

    /// Mark the error as raised inside a sequence element.
    pub fn within_element(mut self) -> Self {
        let path = self.path_mut();
        *path = if path.is_empty() || path.starts_with('[') {
            format!("[]{path}")
        } else {
            format!("[].{path}")
        };
        self
    }

    fn path_mut(&mut self) -> &mut String {
        match self {
            Self::ShapeMismatch { path, .. } | Self::UnsupportedFieldType { path, .. } => path,
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
