//! Error types for schema construction.

use thiserror::Error;

/// Errors raised while building a record schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields declare the same canonical name.
    #[error("duplicate field name '{name}' in record schema")]
    DuplicateName { name: &'static str },

    /// Two fields declare the same display name.
    #[error("duplicate display name '{name}' in record schema")]
    DuplicateDisplayName { name: &'static str },
}
