//! Accumulation and materialization of the requested container shape.

use rowcast_model::{Decoded, TargetShape};

use crate::error::{DecodeError, Result};

/// Collects decoded records and materializes the caller-requested shape.
///
/// Records always accumulate into a growable buffer first; the fixed-array
/// shape is sized to the final count only when the stream has ended.
#[derive(Debug)]
pub struct RecordSink<T> {
    shape: TargetShape,
    records: Vec<T>,
}

impl<T> RecordSink<T> {
    /// Starts a sink for `shape`, rejecting non-collection targets up front.
    pub fn new(shape: TargetShape) -> Result<Self> {
        if !shape.is_collection() {
            return Err(DecodeError::UnsupportedTarget { shape });
        }
        Ok(Self {
            shape,
            records: Vec::new(),
        })
    }

    /// Appends a record, preserving input order.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Number of records accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Materializes the final collection.
    pub fn finish(self) -> Decoded<T> {
        match self.shape {
            TargetShape::List => Decoded::List(self.records),
            TargetShape::FixedArray => Decoded::FixedArray(self.records.into_boxed_slice()),
            // `new` refuses non-collection shapes.
            TargetShape::Scalar | TargetShape::Mapping => {
                unreachable!("sink created with non-collection shape")
            }
        }
    }
}
