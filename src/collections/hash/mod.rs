//! Hash-based collection types. Namely [`HashSet`], which stores its elements in chains of
//! [`DynamicArray`](crate::collections::contiguous::DynamicArray)s selected by hash.

pub mod index;
pub mod set;

#[doc(inline)]
pub use set::HashSet;
