//! A module containing [`DynamicArray`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a DynamicArray. [`Iter`] (a re-export of
//! [`std::slice::Iter`]) is produced by [`DynamicArray::each`] for borrowed iteration.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
pub use iter::*;
