//! Bidirectional conversion between wire models (API payloads with plain
//! scalars) and value models (state with tri-state `Value` leaves).
//!
//! Record types derive [`Record`], which emits a static field table and
//! index-based accessors. A conversion resolves the two tables into a
//! [`mapping::Rule`] once per type pair and direction, caches it, and then
//! walks both values along that rule.
//!
//! ```
//! use stacuity_model::{Record, Value, convert_from_wire};
//!
//! #[derive(Default, Record)]
//! struct VSliceItem {
//!     moniker: String,
//!     dns_servers: Vec<String>,
//! }
//!
//! #[derive(Default, Record)]
//! struct VSliceModel {
//!     moniker: Value<String>,
//!     dns_servers: Vec<Value<String>>,
//! }
//!
//! let item = VSliceItem {
//!     moniker: "vs-a".to_string(),
//!     dns_servers: vec!["8.8.8.8".to_string()],
//! };
//! let mut model = VSliceModel::default();
//! convert_from_wire(&item, &mut model).unwrap();
//! assert_eq!(model.moniker, Value::Known("vs-a".to_string()));
//! assert_eq!(model.dns_servers, vec![Value::Known("8.8.8.8".to_string())]);
//! ```
//!
//! # Derive errors
//!
//! Tuple structs are rejected:
//!
//! ```compile_fail
//! use stacuity_model::Record;
//!
//! #[derive(Default, Record)]
//! struct Moniker(String);
//! ```
//!
//! So are generic structs:
//!
//! ```compile_fail
//! use stacuity_model::Record;
//!
//! #[derive(Default, Record)]
//! struct Page<T> {
//!     data: Vec<T>,
//! }
//! ```
//!
//! And enums:
//!
//! ```compile_fail
//! use stacuity_model::Record;
//!
//! #[derive(Record)]
//! enum Mode {
//!     Static,
//! }
//! ```
//!
//! Unknown `record` keys:
//!
//! ```compile_fail
//! use stacuity_model::{Record, Value};
//!
//! #[derive(Default, Record)]
//! struct VSliceModel {
//!     #[record(flatten)]
//!     moniker: Value<String>,
//! }
//! ```
//!
//! And directions other than `from_wire` / `to_wire`:
//!
//! ```compile_fail
//! use stacuity_model::{Record, Value};
//!
//! #[derive(Default, Record)]
//! struct VSliceModel {
//!     #[record(only = "both")]
//!     moniker: Value<String>,
//! }
//! ```

// Lets `#[derive(Record)]` output (which names `stacuity_model::...`) compile
// inside this crate's own tests.
extern crate self as stacuity_model;

pub mod convert;
pub mod error;
pub mod mapping;
pub mod reflect;
pub mod schema;
pub mod value;

pub use stacuity_model_derive::Record;

pub use convert::{convert, convert_from_wire, convert_to_wire};
pub use error::ConversionError;
pub use reflect::Shaped;
pub use schema::Direction;
pub use value::Value;
