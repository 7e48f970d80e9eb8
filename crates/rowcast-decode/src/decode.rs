//! The decoding engine.
//!
//! Drives the single pass over the input: decode bytes to text, split into
//! lines, resolve columns from the header row (or positionally), build one
//! record per data line, and hand everything to the sink.

use std::borrow::Cow;
use std::io::Read;

use encoding_rs::Encoding;
use rowcast_model::{CsvRecord, DecodeOptions, Decoded, RecordSchema, TargetShape};

use crate::assemble::RecordSink;
use crate::error::{DecodeError, Result};
use crate::record::build_record;
use crate::resolve::{ColumnMapping, resolve};

/// Reports whether a target shape can be decoded at all.
///
/// Routing layers call this before handing a request body to the engine.
pub fn can_decode(shape: TargetShape) -> bool {
    shape.is_collection()
}

/// Decodes delimited text into a collection of `T` using `T`'s declared schema.
pub fn decode<T: CsvRecord, R: Read>(
    reader: R,
    shape: TargetShape,
    options: &DecodeOptions,
) -> Result<Decoded<T>> {
    let schema = T::schema()?;
    decode_with_schema(reader, &schema, shape, options)
}

/// Decodes delimited text with an explicitly supplied schema.
///
/// Options are validated before any byte is read; the stream is then
/// consumed in a single pass. The schema and column mapping live only for
/// the duration of this call.
pub fn decode_with_schema<T, R: Read>(
    mut reader: R,
    schema: &RecordSchema<T>,
    shape: TargetShape,
    options: &DecodeOptions,
) -> Result<Decoded<T>> {
    let encoding = Encoding::for_label(options.encoding.as_bytes()).ok_or_else(|| {
        DecodeError::UnsupportedEncoding {
            label: options.encoding.clone(),
        }
    })?;

    let delimiters: Vec<char> = options.delimiter.chars().collect();
    if delimiters.is_empty() {
        return Err(DecodeError::EmptyDelimiter);
    }

    let mut sink = RecordSink::new(shape)?;

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = decode_text(encoding, &bytes)?;

    tracing::debug!(
        encoding = encoding.name(),
        fields = schema.len(),
        ?shape,
        has_header = options.has_header_row,
        "decoding delimited input"
    );

    let mut lines = split_lines(&text).into_iter().enumerate();

    let mapping: ColumnMapping = if options.has_header_row {
        match lines.next() {
            Some((_, header_line)) => {
                let tokens: Vec<String> = split_cells(header_line, &delimiters)
                    .iter()
                    .map(|token| token.trim().to_string())
                    .collect();
                resolve(Some(&tokens), schema, options.use_display_names)
            }
            // Nothing to read, not even a header row.
            None => return Ok(sink.finish()),
        }
    } else {
        resolve(None, schema, options.use_display_names)
    };

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells = split_cells(line, &delimiters);
        let record = build_record(&cells, &mapping, schema, options.coercion, index + 1)?;
        sink.push(record);
    }

    tracing::debug!(records = sink.len(), "decode complete");
    Ok(sink.finish())
}

/// Decodes raw bytes to text, stripping a matching BOM.
///
/// Malformed sequences for the configured encoding fail the whole call.
fn decode_text<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(DecodeError::Encoding {
            encoding: encoding.name(),
        });
    }
    Ok(text)
}

/// Splits decoded text into lines, treating `\n`, `\r\n`, and lone `\r` as
/// terminators. A trailing terminator does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Splits a line into cells on any of the delimiter characters.
fn split_cells<'a>(line: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    line.split(|c: char| delimiters.contains(&c)).collect()
}
