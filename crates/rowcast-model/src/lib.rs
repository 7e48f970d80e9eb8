//! Data model for decoding delimited text into typed records.
//!
//! This crate defines the vocabulary the decoding engine works with:
//!
//! - **Record Schemas**: per-type field tables with setters and a factory
//!   ([`RecordSchema`], [`FieldDescriptor`], the [`CsvRecord`] trait)
//! - **Field Kinds**: the closed set of supported cell types ([`FieldKind`],
//!   [`FieldValue`])
//! - **Options**: caller-supplied decoding configuration ([`DecodeOptions`],
//!   [`CoercionPolicy`])
//! - **Shapes**: requested and materialized output containers
//!   ([`TargetShape`], [`Decoded`])

mod error;
mod options;
mod schema;
mod shape;
mod value;

// === Error Types ===
pub use error::SchemaError;

// === Options ===
pub use options::{CoercionPolicy, DecodeOptions};

// === Record Schemas ===
pub use schema::{CsvRecord, FieldDescriptor, RecordSchema, RecordSchemaBuilder};

// === Shapes ===
pub use shape::{Decoded, TargetShape};

// === Field Kinds & Values ===
pub use value::{EnumParser, FieldKind, FieldValue};
