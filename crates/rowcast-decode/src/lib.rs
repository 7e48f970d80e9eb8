//! Delimited-text decoding into strongly-typed record collections.
//!
//! This crate turns a CSV byte stream into a list or fixed-size array of
//! records without per-type parsing code: the caller declares a
//! [`RecordSchema`](rowcast_model::RecordSchema) (usually through the
//! [`CsvRecord`](rowcast_model::CsvRecord) trait) and the engine does the
//! rest.
//!
//! # Features
//!
//! - **Header or positional mapping**: match columns by field name (with
//!   optional display-name fallback) or by declaration order
//! - **Typed coercion**: a closed set of primitive kinds, with lenient
//!   (default) or strict failure handling
//! - **Shape-aware output**: growable list or fixed-size array, chosen by
//!   the caller before decoding starts
//! - **Encoding support**: any `encoding_rs` label; malformed input fails
//!   the call rather than producing replacement characters
//!
//! # Example
//!
//! ```ignore
//! use rowcast_decode::decode;
//! use rowcast_model::{
//!     CsvRecord, DecodeOptions, FieldKind, FieldValue, RecordSchema, SchemaError, TargetShape,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl CsvRecord for Person {
//!     fn schema() -> Result<RecordSchema<Self>, SchemaError> {
//!         RecordSchema::builder(Person::default)
//!             .field("Name", FieldKind::Text, |p, v| {
//!                 if let FieldValue::Text(s) = v {
//!                     p.name = s;
//!                 }
//!             })
//!             .field("Age", FieldKind::Integer, |p, v| {
//!                 if let FieldValue::Integer(n) = v {
//!                     p.age = n;
//!                 }
//!             })
//!             .build()
//!     }
//! }
//!
//! let input = b"Name,Age\nAlice,30\nBob,25\n";
//! let people = decode::<Person, _>(&input[..], TargetShape::List, &DecodeOptions::default())?;
//! assert_eq!(people.len(), 2);
//! ```
//!
//! Per-cell conversion failures are absorbed by default, leaving the field
//! at its type's default value. Pass
//! [`CoercionPolicy::Strict`](rowcast_model::CoercionPolicy) to fail the
//! call on the first bad cell instead.

mod assemble;
mod coerce;
mod decode;
mod error;
mod record;
mod resolve;

// === Error Types ===
pub use error::{DecodeError, Result};

// === Decoding Engine ===
pub use decode::{can_decode, decode, decode_with_schema};

// === Pipeline Pieces ===
pub use assemble::RecordSink;
pub use coerce::coerce;
pub use record::build_record;
pub use resolve::{ColumnMapping, resolve};
