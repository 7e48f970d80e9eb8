//! Per-line record construction.

use rowcast_model::{CoercionPolicy, RecordSchema};

use crate::coerce::coerce;
use crate::error::{DecodeError, Result};
use crate::resolve::ColumnMapping;

/// Builds one record from the raw cells of a data line.
///
/// Cells beyond the mapping's length are ignored, and mapped columns missing
/// from a short line leave their fields at the record's default value. When
/// two columns map to the same field, the later column wins.
pub fn build_record<T>(
    cells: &[&str],
    mapping: &ColumnMapping,
    schema: &RecordSchema<T>,
    policy: CoercionPolicy,
    line: usize,
) -> Result<T> {
    let mut record = schema.new_record();

    for (column, raw) in cells.iter().enumerate().take(mapping.len()) {
        let Some(ordinal) = mapping.field_at(column) else {
            continue;
        };
        let field = &schema.fields()[ordinal];

        match coerce(raw, field.kind()) {
            Some(value) => field.apply(&mut record, value),
            None => match policy {
                CoercionPolicy::Lenient => {
                    tracing::debug!(
                        line,
                        column,
                        field = field.name(),
                        value = %raw,
                        "cell coercion failed; field left at default"
                    );
                }
                CoercionPolicy::Strict => {
                    return Err(DecodeError::Coerce {
                        line,
                        column,
                        field: field.name(),
                        kind: field.kind().name(),
                        value: (*raw).to_string(),
                    });
                }
            },
        }
    }

    Ok(record)
}
