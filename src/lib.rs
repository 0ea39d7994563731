//! A from-scratch growable list and hash set.
//!
//! # Purpose
//! This crate implements two collections without leaning on the ones in [`std`]: a
//! [`DynamicArray`](collections::contiguous::DynamicArray), which appends in amortized `O(1)` and
//! indexes in `O(1)`, and a [`HashSet`](collections::hash::HashSet), which stores its elements in
//! buckets of DynamicArrays (separate chaining). Neither uses [`Vec`] internally, all storage goes
//! through [`Array`](collections::contiguous::Array) and the global allocator.
//!
//! # Method
//! The element types of a HashSet must implement [`Hash`](std::hash::Hash) and [`Eq`], and the two
//! must agree: equal elements have to hash identically. Raw hashes are folded into the bucket
//! range by [`collections::hash::index::normalize`], which is correct for negative hash codes too.
//!
//! The set's behaviour is chosen explicitly through a
//! [`SetConfig`](collections::hash::set::SetConfig): strict set or multiset, and whether the
//! bucket array rehashes once the load factor is exceeded or stays at its initial size.
//!
//! # Error Handling
//! Specifically for collections, it is more ergonomic for functions to panic in some cases, because
//! users don't want to be forced to handle an error every time they invoke a method. Imagine having
//! to handle the possibility of a capacity overflow every time you add to a list. Because of this,
//! `add` and `get` panic, while `try_add` and `try_get` return the same conditions as errors.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using structs that implement [`Error`](std::error::Error), composed into enums for static
//! dispatch ([`CollectionError`]).
//!
//! # Logging
//! Growth of a DynamicArray is logged at `trace` level and every HashSet rehash at `debug` level,
//! through the [`log`] facade. No logger is installed by this crate.
//!
//! # Dependencies
//! This crate depends on some derive macros from `derive_more` because they're helpful and remove
//! the need for some very repetitive programming, and on `log`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CapacityOverflow, CollectionError, IndexOutOfBounds, InvalidArgument};
