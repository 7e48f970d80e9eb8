//! Textual cell coercion into typed field values.

use chrono::{NaiveDate, NaiveDateTime};
use rowcast_model::{FieldKind, FieldValue};

/// Converts one raw cell into the declared kind of its target field.
///
/// Returns `None` when the text does not parse as the kind; the caller
/// decides whether that is absorbed (lenient) or fatal (strict). Text passes
/// through verbatim; every other kind trims surrounding whitespace first.
pub fn coerce(raw: &str, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => raw.trim().parse::<i64>().ok().map(FieldValue::Integer),
        FieldKind::Unsigned => raw.trim().parse::<u64>().ok().map(FieldValue::Unsigned),
        FieldKind::Float => raw.trim().parse::<f64>().ok().map(FieldValue::Float),
        FieldKind::Boolean => parse_bool(raw.trim()).map(FieldValue::Boolean),
        FieldKind::Date => raw.trim().parse::<NaiveDate>().ok().map(FieldValue::Date),
        FieldKind::DateTime => parse_datetime(raw.trim()).map(FieldValue::DateTime),
        FieldKind::Enum(parse) => parse(raw.trim()),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Accepts ISO date-times with either `T` or a space between date and time.
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").ok())
}
