//! Configuration options for decoding.

use serde::{Deserialize, Serialize};

/// Policy for per-cell coercion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoercionPolicy {
    /// A failed conversion leaves the field at its default value and
    /// decoding continues. This can mask malformed input; it exists for
    /// robustness against messy real-world CSV.
    #[default]
    Lenient,
    /// A failed conversion fails the whole decode call.
    Strict,
}

/// Options controlling how delimited text is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Label of the input text encoding (e.g. "utf-8", "latin1").
    pub encoding: String,

    /// Column separator characters. A cell boundary is any single character
    /// contained in this string.
    pub delimiter: String,

    /// Treat the first input line as a header row rather than data.
    pub has_header_row: bool,

    /// Also match header tokens against fields' declared display names.
    pub use_display_names: bool,

    /// Strictness of per-cell type conversion.
    pub coercion: CoercionPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            delimiter: ",".to_string(),
            has_header_row: true,
            use_display_names: false,
            coercion: CoercionPolicy::Lenient,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_header_row(mut self, has_header_row: bool) -> Self {
        self.has_header_row = has_header_row;
        self
    }

    pub fn with_display_names(mut self, use_display_names: bool) -> Self {
        self.use_display_names = use_display_names;
        self
    }

    pub fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }
}
