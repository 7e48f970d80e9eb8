//! Statically declared record schemas.
//!
//! A [`RecordSchema`] is the decoder's view of an element type: an ordered
//! field table (name, optional display name, kind, setter) plus a factory
//! producing a fresh default instance. Schemas are declared up front, either
//! directly through [`RecordSchema::builder`] or via the [`CsvRecord`] trait;
//! the decoder never discovers fields dynamically.

use std::fmt;

use crate::error::SchemaError;
use crate::value::{FieldKind, FieldValue};

/// Describes one settable field of a record type.
pub struct FieldDescriptor<T> {
    name: &'static str,
    display_name: Option<&'static str>,
    kind: FieldKind,
    set: fn(&mut T, FieldValue),
}

impl<T> FieldDescriptor<T> {
    /// Canonical field name used for header matching.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Alternate name a header may be matched against, if declared.
    pub fn display_name(&self) -> Option<&'static str> {
        self.display_name
    }

    /// Declared kind the cell text is coerced into.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Applies a coerced value to the record through the field's setter.
    pub fn apply(&self, record: &mut T, value: FieldValue) {
        (self.set)(record, value);
    }
}

// Manual impls: the descriptor is plain data regardless of `T`.
impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered field table plus instance factory for an element type.
#[derive(Debug, Clone)]
pub struct RecordSchema<T> {
    fields: Vec<FieldDescriptor<T>>,
    new_record: fn() -> T,
}

impl<T> RecordSchema<T> {
    /// Starts a schema for records created by `new_record`.
    pub fn builder(new_record: fn() -> T) -> RecordSchemaBuilder<T> {
        RecordSchemaBuilder {
            fields: Vec::new(),
            new_record,
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Creates a fresh default-initialized record instance.
    pub fn new_record(&self) -> T {
        (self.new_record)()
    }
}

/// Builder enforcing the schema's name-uniqueness invariants.
#[derive(Debug)]
pub struct RecordSchemaBuilder<T> {
    fields: Vec<FieldDescriptor<T>>,
    new_record: fn() -> T,
}

impl<T> RecordSchemaBuilder<T> {
    /// Declares a field matched by its canonical name only.
    pub fn field(self, name: &'static str, kind: FieldKind, set: fn(&mut T, FieldValue)) -> Self {
        self.push(name, None, kind, set)
    }

    /// Declares a field that may also be matched by `display_name`.
    pub fn field_with_display(
        self,
        name: &'static str,
        display_name: &'static str,
        kind: FieldKind,
        set: fn(&mut T, FieldValue),
    ) -> Self {
        self.push(name, Some(display_name), kind, set)
    }

    fn push(
        mut self,
        name: &'static str,
        display_name: Option<&'static str>,
        kind: FieldKind,
        set: fn(&mut T, FieldValue),
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name,
            display_name,
            kind,
            set,
        });
        self
    }

    /// Finalizes the schema, rejecting duplicate canonical or display names.
    pub fn build(self) -> Result<RecordSchema<T>, SchemaError> {
        for (i, field) in self.fields.iter().enumerate() {
            for earlier in &self.fields[..i] {
                if earlier.name == field.name {
                    return Err(SchemaError::DuplicateName { name: field.name });
                }
                if let (Some(a), Some(b)) = (earlier.display_name, field.display_name)
                    && a == b
                {
                    return Err(SchemaError::DuplicateDisplayName { name: a });
                }
            }
        }

        Ok(RecordSchema {
            fields: self.fields,
            new_record: self.new_record,
        })
    }
}

/// Element types that declare their own decoding schema.
pub trait CsvRecord: Sized {
    /// Builds the schema used to decode this type from delimited text.
    fn schema() -> Result<RecordSchema<Self>, SchemaError>;
}
