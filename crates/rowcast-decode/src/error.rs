//! Error types for delimited-text decoding.

use rowcast_model::{SchemaError, TargetShape};
use thiserror::Error;

/// Errors that can fail a decode call.
///
/// Per-cell conversion failures are not represented here under the default
/// lenient policy; they leave the field at its default value. Only
/// [`CoercionPolicy::Strict`](rowcast_model::CoercionPolicy) turns them into
/// [`DecodeError::Coerce`].
#[derive(Debug, Error)]
pub enum DecodeError {
    // === Option Validation ===
    /// The configured encoding label names no known text encoding.
    #[error("unsupported text encoding: {label}")]
    UnsupportedEncoding { label: String },

    /// The delimiter string is empty.
    #[error("delimiter must contain at least one character")]
    EmptyDelimiter,

    /// The requested target shape is not a decodable collection.
    #[error("target shape {shape:?} is not a decodable collection")]
    UnsupportedTarget { shape: TargetShape },

    // === Stream Errors ===
    /// Reading the input stream failed.
    #[error("failed to read input stream: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes are malformed for the configured encoding.
    #[error("input is not valid {encoding} text")]
    Encoding { encoding: &'static str },

    // === Schema Errors ===
    /// The element type's declared schema is invalid.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    // === Strict-Mode Cell Errors ===
    /// A cell could not be coerced into its field's kind (strict mode only).
    #[error("line {line}, column {column}: cannot coerce {value:?} into {kind} field '{field}'")]
    Coerce {
        line: usize,
        column: usize,
        field: &'static str,
        kind: &'static str,
        value: String,
    },
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
