use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
#[doc(inline)]
pub use std::slice::Iter;

use super::DynamicArray;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // Take the storage and forget about the elements, ownership passes to the iterator.
        let arr = mem::take(&mut self.arr);
        self.len = 0;

        IntoIter {
            arr,
            start: 0,
            end,
        }
    }
}

/// A type for owned iteration over a [`DynamicArray`], in insertion order. Produces values of type
/// `T`.
///
/// See [`DynamicArray::into_iter`].
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: Values in start..end are initialized and haven't been read yet. Incrementing
            // start afterwards means this value is never read or dropped again.
            let value = unsafe { self.arr[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: As with next, end has just been moved past this value.
            Some(unsafe { self.arr[self.end].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values in start..end haven't been moved out of the iterator.
            unsafe { self.arr[i].assume_init_drop(); }
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
