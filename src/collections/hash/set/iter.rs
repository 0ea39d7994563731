use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::slice;

use super::{Bucket, HashSet};
use crate::collections::contiguous::array;
use crate::collections::contiguous::dynamic_array;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buckets.into_iter().flatten().flatten(),
            len: self.len,
        }
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`, in the same order
/// as [`HashSet::each`].
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T> {
    pub(crate) inner: Flatten<Flatten<array::IntoIter<Bucket<T>>>>,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next();
        if next.is_some() {
            self.len -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`, bucket by
/// bucket.
///
/// See [`HashSet::each`].
pub struct Iter<'a, T> {
    pub(crate) buckets: slice::Iter<'a, Bucket<T>>,
    pub(crate) chain: dynamic_array::Iter<'a, T>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.next() {
                self.len -= 1;
                return Some(item);
            }

            // The current chain is exhausted, move to the next non-empty bucket.
            match self.buckets.next()? {
                Some(chain) => self.chain = chain.each(),
                None => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            len: self.len,
        }
    }
}
