//! Column-to-field resolution.

use rowcast_model::RecordSchema;

/// Table from input column position to schema field ordinal.
///
/// Built once per decode call and applied to every data line; `None` means
/// the column is ignored. Lines with more or fewer columns than the mapping
/// are handled by the record builder's bounds checks, not by re-resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    slots: Vec<Option<usize>>,
}

impl ColumnMapping {
    /// Number of mapped column positions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no columns are mapped.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Schema field ordinal mapped at `column`, if any.
    pub fn field_at(&self, column: usize) -> Option<usize> {
        self.slots.get(column).copied().flatten()
    }
}

/// Resolves input columns against a record schema.
///
/// With headers, each token is matched case-sensitively against field
/// canonical names first, then (when enabled) display names; unmatched
/// tokens leave their column ignored. Without headers, column *i* maps to
/// the schema's *i*-th declared field.
pub fn resolve<T>(
    headers: Option<&[String]>,
    schema: &RecordSchema<T>,
    use_display_names: bool,
) -> ColumnMapping {
    let slots = match headers {
        Some(tokens) => tokens
            .iter()
            .map(|token| {
                let found = schema
                    .fields()
                    .iter()
                    .position(|f| f.name() == token)
                    .or_else(|| {
                        if use_display_names {
                            schema
                                .fields()
                                .iter()
                                .position(|f| f.display_name() == Some(token.as_str()))
                        } else {
                            None
                        }
                    });
                if found.is_none() {
                    tracing::debug!(header = %token, "header matches no field; column ignored");
                }
                found
            })
            .collect(),
        None => (0..schema.len()).map(Some).collect(),
    };

    ColumnMapping { slots }
}
