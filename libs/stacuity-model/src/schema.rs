use std::any::TypeId;
use std::fmt;

/// Scalar leaf type shared by both models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Str,
    Int32,
    Bool,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Str => write!(f, "string"),
            ScalarKind::Int32 => write!(f, "int32"),
            ScalarKind::Bool => write!(f, "bool"),
        }
    }
}

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Wire model (API payload) into value model (state).
    FromWire,
    /// Value model into wire model.
    ToWire,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::FromWire => write!(f, "from-wire"),
            Direction::ToWire => write!(f, "to-wire"),
        }
    }
}

/// Declared shape of a field, resolved from its Rust type.
///
/// - `Scalar`: plain `String` / `i32` / `bool` (wire side).
/// - `Wrapped`: tri-state `Value<T>` (value side).
/// - `Optional`: `Option<T>`, absent or present reference.
/// - `Sequence`: `Vec<T>`.
/// - `Record`: struct deriving `Record`.
#[derive(Debug, Clone)]
pub enum Shape {
    Scalar(ScalarKind),
    Wrapped(ScalarKind),
    Optional(Box<Shape>),
    Sequence(Box<Shape>),
    Record(RecordType),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(kind) => write!(f, "{kind}"),
            Shape::Wrapped(kind) => write!(f, "Value<{kind}>"),
            Shape::Optional(inner) => write!(f, "Option<{inner}>"),
            Shape::Sequence(inner) => write!(f, "Vec<{inner}>"),
            Shape::Record(record) => write!(f, "record {}", record.name),
        }
    }
}

/// Static description of a record type. Emitted by `#[derive(Record)]`.
#[derive(Debug, Clone, Copy)]
pub struct RecordType {
    pub name: &'static str,
    /// Identity of the Rust type, used to spot a record nested inside itself.
    pub id: fn() -> TypeId,
    /// Fields in declaration order.
    pub fields: &'static [FieldSchema],
}

impl RecordType {
    /// Look a field up by its matching name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A single field of a record.
///
/// `shape` is a function rather than a value so that nested record schemas
/// are only built when a plan actually descends into them.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Name used for matching (the Rust identifier unless renamed).
    pub name: &'static str,
    /// Position passed to `RecordReflect::field` / `field_mut`.
    pub index: usize,
    pub shape: fn() -> Shape,
    /// `Some` restricts the field to conversions in one direction.
    pub only: Option<Direction>,
}

impl FieldSchema {
    pub fn applies_to(&self, direction: Direction) -> bool {
        self.only.is_none_or(|only| only == direction)
    }
}
