use std::alloc;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::Array;
use crate::util::option::OptionExtension;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size) = self.into_parts();
        IntoIter {
            buf: ptr,
            size,
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

/// A type for owned iteration over an [`Array`]. Produces values of type `T`.
///
/// See [`Array::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the allocation and the value there hasn't been read yet.
            // Incrementing start afterwards effectively moves the value off of the heap.
            let value = unsafe { self.buf.add(self.start).read() };
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
            // SAFETY: The newly decremented end is within the allocation and the value there
            // hasn't been read yet.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end haven't been moved out and are still initialized.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ))
        }

        // SAFETY: The layout was valid when the Array was allocated.
        let layout = unsafe { Array::<T>::make_layout(self.size).ok().unreachable() };

        if layout.size() != 0 {
            // SAFETY: buf was allocated in the global allocator with this layout.
            unsafe { alloc::dealloc(self.buf.as_ptr().cast(), layout) }
        }
    }
}

// Just use the iter and iter_mut definitions provided by Deref<Target=[T]>.
