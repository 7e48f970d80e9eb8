//! Caller-requested target shapes and the decoded output container.

use serde::{Deserialize, Serialize};

/// Shape of the target type a caller asks the decoder to produce.
///
/// Only collection shapes are decodable; the others exist so routing layers
/// can ask "can this body go to the CSV decoder?" and get a real answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetShape {
    /// Growable list of records.
    List,
    /// Fixed-size array sized to the record count.
    FixedArray,
    /// A single value; not decodable from row-oriented input.
    Scalar,
    /// A keyed mapping; not decodable from row-oriented input.
    Mapping,
}

impl TargetShape {
    /// True for the shapes the decoder can materialize.
    pub fn is_collection(self) -> bool {
        matches!(self, TargetShape::List | TargetShape::FixedArray)
    }
}

/// The decoded collection, in the shape the caller requested.
///
/// Element order matches input line order, header line excluded.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    List(Vec<T>),
    FixedArray(Box<[T]>),
}

impl<T> Decoded<T> {
    /// Shape this container was materialized as.
    pub fn shape(&self) -> TargetShape {
        match self {
            Decoded::List(_) => TargetShape::List,
            Decoded::FixedArray(_) => TargetShape::FixedArray,
        }
    }

    /// Number of decoded records.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if no records were decoded.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Decoded::List(records) => records,
            Decoded::FixedArray(records) => records,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Consumes the container, discarding its shape.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Decoded::List(records) => records,
            Decoded::FixedArray(records) => records.into_vec(),
        }
    }
}

impl<T> IntoIterator for Decoded<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Decoded<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
