//! The collection types of this crate.
//!
//! # Purpose
//! [`DynamicArray`](contiguous::DynamicArray) is a growable list, written on top of a raw
//! [`Array`](contiguous::Array) buffer rather than [`Vec`]. [`HashSet`](hash::HashSet) is a set that
//! resolves collisions by chaining its elements in DynamicArrays.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
