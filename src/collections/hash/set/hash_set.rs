use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use log::debug;

use super::{Iter, SetConfig};
use crate::collections::contiguous::{Array, DynamicArray};
use crate::collections::hash::index::bucket_index;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A set of values which relies on the values implementing [`Hash`] and [`Eq`], with collisions
/// resolved by separate chaining.
///
/// The set owns a fixed-length array of buckets. Each bucket is either empty or holds a
/// [`DynamicArray`] (its chain) of every element that hashed to it, in insertion order. Chains are
/// only allocated once the first element lands in their bucket.
///
/// Behaviour is controlled by a [`SetConfig`]: the initial bucket count, the load factor, whether
/// equal elements are rejected ([`Duplicates`](super::Duplicates)) and whether the bucket array
/// grows ([`Growth`](super::Growth)). With the default configuration a HashSet is a strict set that
/// doubles its bucket count whenever an insertion would push the load above 0.75.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the set, which is why no mutable access to elements is provided.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)`** |
/// | `contains` | `O(1)`* |
/// | `each` | `O(n + b)` in total |
///
/// \* Lookups scan one chain. With rehashing enabled the average chain is no longer than the load
/// factor. With [`Growth::Fixed`](super::Growth::Fixed) chains hold `n / b` elements on average.
///
/// \** If the insertion pushes the load past the load factor, every element is moved into a new
/// bucket array first.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) buckets: Array<Bucket<T>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
    pub(crate) config: SetConfig,
}

pub(crate) type Bucket<T> = Option<DynamicArray<T>>;

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with the default [`SetConfig`] and the default value for `B`.
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::hash::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new();
    /// assert!(!set.contains(&27));
    /// set.add(27);
    /// assert!(set.contains(&27));
    /// ```
    pub fn new() -> HashSet<T, B> {
        HashSet::with_config_and_hasher(SetConfig::default(), B::default())
    }

    /// Creates a new HashSet from the provided `config`. The default hasher will be used.
    pub fn with_config(config: SetConfig) -> HashSet<T, B> {
        HashSet::with_config_and_hasher(config, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with the default [`SetConfig`] and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet::with_config_and_hasher(SetConfig::default(), hasher)
    }

    /// Creates a new HashSet with the provided `config` and `hasher`. Every bucket starts empty.
    ///
    /// # Panics
    /// Panics if the memory layout of the bucket array would exceed [`isize::MAX`].
    pub fn with_config_and_hasher(config: SetConfig, hasher: B) -> HashSet<T, B> {
        HashSet {
            buckets: Array::repeat_default(config.bucket_count()),
            len: 0,
            hasher,
            config,
        }
    }

    /// Returns the number of elements stored in the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets. This starts at the configured bucket count and only
    /// changes when the set rehashes.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the configuration the HashSet was created with.
    pub const fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Returns the current ratio of elements to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Adds `value` to the chain of its bucket, creating the chain if the bucket was empty.
    ///
    /// With [`Duplicates::Reject`](super::Duplicates::Reject), a value equal to one already in the
    /// set is dropped and false is returned. Otherwise the value is stored and true is returned.
    ///
    /// # Panics
    /// Panics if the bucket array or a chain can't grow because its layout would exceed
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::hash::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.add(7));
    /// assert!(!set.add(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        self.try_add(value).throw()
    }

    /// Adds `value` like [`add`](HashSet::add), returning an error rather than panicking if the
    /// set can't grow.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if growing would require a layout larger than [`isize::MAX`].
    /// No element is added in that case.
    pub fn try_add(&mut self, value: T) -> Result<bool, CapacityOverflow> {
        let mut index = self.index_for(&value);
        if self.config.duplicates().is_reject() && self.chain_contains(index, &value) {
            return Ok(false);
        }

        if self.should_grow() {
            self.try_grow()?;
            // The bucket count changed, so the old index is stale.
            index = self.index_for(&value);
        }

        match &mut self.buckets[index] {
            Some(chain) => chain.try_add(value)?,
            None => {
                let mut chain = DynamicArray::new();
                chain.try_add(value)?;
                self.buckets[index] = Some(chain);
            },
        }

        self.len += 1;
        Ok(true)
    }

    /// Returns true if the set holds an element equal to `value`.
    ///
    /// Only the chain of the bucket `value` hashes to is scanned. Comparison uses [`Eq`], so two
    /// distinct but equal values are interchangeable here.
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::hash::HashSet;
    /// let mut set: HashSet<String> = HashSet::new();
    /// set.add("no".to_owned());
    /// assert!(set.contains("no"));
    /// assert!(!set.contains("potatoes"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of T
        // where equality and hashing carries over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chain_contains(self.index_for(value), value)
    }

    /// Returns the number of stored elements equal to `value`. This is at most 1 unless the set
    /// allows duplicates.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.buckets[self.index_for(value)] {
            Some(chain) => chain.each().filter(|item| Borrow::<Q>::borrow(*item) == value).count(),
            None => 0,
        }
    }

    /// Returns an iterator over every element, as references. Buckets are visited in ascending
    /// order and each chain in insertion order, so the overall order isn't the insertion order and
    /// changes when the set rehashes. Each call starts from the first bucket again.
    ///
    /// # Examples
    /// ```
    /// # use collection_examples::collections::hash::HashSet;
    /// let set: HashSet<_> = [7, 42, 904].into_iter().collect();
    /// let mut all: Vec<_> = set.each().copied().collect();
    /// all.sort();
    /// assert_eq!(all, [7, 42, 904]);
    /// ```
    pub fn each(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Determines whether adding one more element would exceed the load factor, suggesting that
    /// the set should grow first.
    pub(crate) fn should_grow(&self) -> bool {
        self.config.growth().is_rehash() && !self.fits_next(self.bucket_count())
    }

    /// Determines whether one more element can be held in `bucket_count` buckets without exceeding
    /// the load factor.
    pub(crate) fn fits_next(&self, bucket_count: usize) -> bool {
        (self.len + 1) as f64 <= bucket_count as f64 * self.config.load_factor()
    }

    /// Grows the bucket array by the growth factor, as many times as needed for one more element
    /// to fit within the load factor. Elements are only moved once.
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        let mut new_count = self.bucket_count();
        loop {
            new_count = new_count.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
            if self.fits_next(new_count) {
                break;
            }
        }

        self.try_rehash(new_count)
    }

    /// Returns true if the chain of the bucket at `index` holds an element equal to `value`.
    pub(crate) fn chain_contains<Q>(&self, index: usize, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match &self.buckets[index] {
            Some(chain) => chain.contains(value),
            None => false,
        }
    }

    /// Replaces the bucket array with one of `new_count` buckets and moves every element into the
    /// chain of its bucket under the new count. Chains keep their relative order.
    pub(crate) fn try_rehash(&mut self, new_count: usize) -> Result<(), CapacityOverflow> {
        // Check the layout before touching anything, so a failure leaves the set intact.
        Array::<Bucket<T>>::make_layout(new_count)?;

        let old_count = self.bucket_count();
        // Replace the Array first so that we can consume the old Array.
        let old_buckets = mem::replace(&mut self.buckets, Array::repeat_default(new_count));

        for item in old_buckets.into_iter().flatten().flatten() {
            let index = self.index_for(&item);
            self.buckets[index].get_or_insert_with(DynamicArray::new).add(item);
        }

        debug!("HashSet rehashed {} elements from {old_count} to {new_count} buckets", self.len);
        Ok(())
    }

    /// Calculates the bucket index for the provided `hashable`. The bucket count is never 0.
    pub(crate) fn index_for<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        bucket_index(self.hasher.hash_one(hashable), self.bucket_count())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::new();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
            config: self.config,
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter()
            .enumerate()
            .filter_map(|(index, bucket)| bucket.as_ref().map(|chain| DebugRaw(
                format!("{index}: {:?}", &**chain)
            )))
            .collect::<DynamicArray<_>>();

        f.debug_struct("HashSet")
            .field("buckets", &&*buckets)
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("config", &self.config)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.each().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
