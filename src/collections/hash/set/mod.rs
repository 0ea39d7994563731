//! A module containing [`HashSet`] and associated types.
//!
//! [`SetConfig`] (built with [`SetConfigBuilder`]) chooses the bucket count, load factor and the
//! [`Duplicates`] and [`Growth`] policies of a set. [`Iter`] and [`IntoIter`] provide borrowed and
//! owned iteration over a set's elements.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the elements
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod config;
mod hash_set;
mod iter;
mod tests;

pub use config::*;
pub use hash_set::*;
pub use iter::*;
