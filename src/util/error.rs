use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An attempt to access an index beyond the initialized elements of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The memory layout required by a collection would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A value was provided that the receiving function can't work with, such as a set configuration
/// with no buckets.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid argument `{name}`: {reason}!")]
pub struct InvalidArgument {
    pub name: &'static str,
    pub reason: &'static str,
}

/// Any of the errors produced by the collections in this crate, for callers that want to
/// propagate them with `?` without caring which one occurred.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    InvalidArgument(InvalidArgument),
}
