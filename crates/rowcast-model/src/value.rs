//! Field kinds and coerced cell values.
//!
//! The decoder supports a closed set of primitive kinds. Each cell is parsed
//! into the [`FieldValue`] variant matching its field's declared
//! [`FieldKind`] before being handed to the field's setter.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Parses a symbolic name into a field value.
///
/// Used by [`FieldKind::Enum`] fields. The parser maps the raw token onto
/// whichever [`FieldValue`] variant the field's setter expects (typically an
/// ordinal or the canonical name), returning `None` for unknown names.
pub type EnumParser = fn(&str) -> Option<FieldValue>;

/// Declared kind of a record field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Verbatim text, no parsing.
    Text,
    /// Signed integer (`i64`).
    Integer,
    /// Unsigned integer (`u64`).
    Unsigned,
    /// Floating point (`f64`).
    Float,
    /// `true` / `false`, case-insensitive.
    Boolean,
    /// ISO calendar date (`YYYY-MM-DD`).
    Date,
    /// Naive date-time (`YYYY-MM-DDTHH:MM:SS`, `T` or space separator).
    DateTime,
    /// Enumeration matched by name through the supplied parser.
    Enum(EnumParser),
}

impl FieldKind {
    /// Short kind name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Unsigned => "unsigned",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Enum(_) => "enum",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell value coerced into one of the supported primitive kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}
