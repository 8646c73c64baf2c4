use serde::{Deserialize, Serialize};

use crate::schema::ScalarKind;

/// Tri-state leaf of the value model.
///
/// - `Null`: explicitly absent.
/// - `Unknown`: not determined yet. Conversions never produce it, they only
///   carry it over unchanged.
/// - `Known(v)`: concrete value.
///
/// Serialized adjacently tagged so all three states survive a JSON hop:
/// `{"state":"known","value":"vs-a"}`, `{"state":"null"}`, `{"state":"unknown"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Value<T> {
    Null,
    Unknown,
    Known(T),
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> Value<T> {
    pub fn known(value: impl Into<T>) -> Self {
        Value::Known(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    /// Borrow the concrete value, `None` for `Null` and `Unknown`.
    pub fn as_known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            Value::Null | Value::Unknown => None,
        }
    }

    pub fn into_known(self) -> Option<T> {
        match self {
            Value::Known(v) => Some(v),
            Value::Null | Value::Unknown => None,
        }
    }
}

impl<T: Clone + Default> Value<T> {
    /// Concrete value, or the zero value of `T` for `Null` and `Unknown`.
    pub fn known_or_default(&self) -> T {
        self.as_known().cloned().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::Known(v),
            None => Value::Null,
        }
    }
}

/// Plain scalar that can sit at a leaf of either model.
pub trait ScalarType: Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const KIND: ScalarKind;
}

impl ScalarType for String {
    const KIND: ScalarKind = ScalarKind::Str;
}

impl ScalarType for i32 {
    const KIND: ScalarKind = ScalarKind::Int32;
}

impl ScalarType for bool {
    const KIND: ScalarKind = ScalarKind::Bool;
}
