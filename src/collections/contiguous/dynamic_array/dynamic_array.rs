use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::slice;

use log::trace;

use super::Iter;
use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity of a DynamicArray created with [`DynamicArray::new`].
pub const INITIAL_CAP: usize = 8;

const GROWTH_FACTOR: usize = 2;

/// A growable, index-addressable list stored contiguously in an [`Array<T>`].
///
/// Elements are only ever appended, so the indices of existing elements never change. When an
/// append would exceed the capacity, the storage is reallocated with capacity `max(1, len) * 2` and
/// the existing elements are moved across in index order. The capacity never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
/// | `each` | `O(1)` per element |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `add` will take `O(n)`.
/// Doubling the capacity bounds the total cost of `n` appends to `O(n)`.
///
/// \** If the DynamicArray has enough capacity for the additional items already, `reserve` is
/// `O(1)`.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with a capacity of [`INITIAL_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let list: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_cap(INITIAL_CAP)
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation. A capacity of 0 doesn't allocate.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let mut list: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(list.cap(), 5);
    /// list.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(list.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let list: DynamicArray<_> = (1_u8..=3).collect();
    /// assert_eq!(list.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Appends the provided value to the end of the DynamicArray, increasing the capacity if
    /// required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let mut list = DynamicArray::new();
    /// list.add(7);
    /// list.add(42);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(*list.get(1), 42);
    /// ```
    pub fn add(&mut self, value: T) {
        self.try_add(value).throw()
    }

    /// Appends the provided value, returning an error rather than panicking if the DynamicArray
    /// can't grow. The DynamicArray is left unchanged when an error is returned.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if growing would require a layout larger than [`isize::MAX`].
    pub fn try_add(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.add_unchecked(value) }
        Ok(())
    }

    /// Appends the provided value, assuming that there is enough capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using methods like
    /// [`reserve`](DynamicArray::reserve) or [`with_cap`](DynamicArray::with_cap). Using this
    /// method on a DynamicArray without enough capacity is undefined behavior.
    pub unsafe fn add_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the DynamicArray has enough capacity for
        // this write, so the pointer is in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] if `index >= len`. Check [`len`](DynamicArray::len) first
    /// or use [`try_get`](DynamicArray::try_get).
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let list: DynamicArray<_> = [7, 42, 904].into_iter().collect();
    /// assert_eq!(*list.get(0), 7);
    /// assert_eq!(*list.get(2), 904);
    /// ```
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { self.arr[index].assume_init_ref() })
    }

    /// Returns true if any element of the DynamicArray is equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let list: DynamicArray<_> = [1, 8, 27, 109].into_iter().collect();
    /// assert!(list.contains(&27));
    /// assert!(!list.contains(&-12));
    ///
    /// let names: DynamicArray<String> = ["I", "hope"].map(String::from).into_iter().collect();
    /// assert!(names.contains("hope"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter().any(|item| Borrow::<Q>::borrow(item) == value)
    }

    /// Returns an iterator over the elements in insertion order. Each call starts from the first
    /// element again.
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::contiguous::DynamicArray;
    /// let list: DynamicArray<_> = [7, 42, 904].into_iter().collect();
    /// assert!(list.each().copied().eq([7, 42, 904]));
    /// assert_eq!(list.each().count(), 3);
    /// ```
    pub fn each(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the required layout would exceed [`isize::MAX`] bytes. The
    /// DynamicArray is unchanged in that case.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() { return Ok(()); }

        self.arr.try_realloc(new_cap)
    }

    /// Grows the storage to allow for the insertion of additional elements. After calling this,
    /// the DynamicArray can take at least one more element.
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        let old_cap = self.cap();
        let new_cap = cmp::max(self.len, 1)
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)?;

        self.arr.try_realloc(new_cap)?;

        trace!("DynamicArray grew from {old_cap} to {new_cap} elements (len {})", self.len);
        Ok(())
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = DynamicArray::with_cap(cmp::max(iter.size_hint().0, INITIAL_CAP));

        for item in iter {
            list.add(item);
        }

        list
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { self.arr[i].assume_init_drop(); }
        }

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The storage is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self guarantees unique access.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: list has the same capacity as self, which holds at least len elements.
            unsafe { list.add_unchecked(value.clone()); }
        }

        list
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
