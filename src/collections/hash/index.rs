//! Mapping raw hashes to bucket indices.
//!
//! A raw hash can be any 64-bit value. Interpreted as a signed integer (which is how hash codes
//! are usually reasoned about) it may be negative, so taking the remainder alone can produce a
//! negative bucket. [`normalize`] folds every raw value into `[0, bucket_count)`.

/// Returns the bucket for a raw hash produced by a [`Hasher`](std::hash::Hasher), by
/// reinterpreting the hash as an [`i64`] and normalizing it with [`normalize`].
///
/// # Panics
/// Panics if `bucket_count` is 0.
///
/// # Examples
/// ```
/// # use collection_examples::collections::hash::index::bucket_index;
/// assert_eq!(bucket_index((-7_i64) as u64, 8), 1);
/// assert_eq!(bucket_index(7, 8), 7);
/// ```
pub const fn bucket_index(raw_hash: u64, bucket_count: usize) -> usize {
    normalize(raw_hash as i64, bucket_count)
}

/// Computes `((raw mod n) + n) mod n` for `n = bucket_count`, which lies in `[0, n)` for every
/// `raw`. The arithmetic is carried out in [`i128`], so neither `i64::MIN` nor a bucket count above
/// `i64::MAX` can overflow.
///
/// # Panics
/// Panics if `bucket_count` is 0.
///
/// # Examples
/// ```
/// # use collection_examples::collections::hash::index::normalize;
/// assert_eq!(normalize(-7, 8), 1);
/// assert_eq!(normalize(9, 8), 1);
/// assert_eq!(normalize(i64::MIN, 1000), 192);
/// ```
pub const fn normalize(raw: i64, bucket_count: usize) -> usize {
    assert!(bucket_count != 0, "Unable to find a bucket in a HashSet with 0 buckets!");

    let n = bucket_count as i128;
    (((raw as i128 % n) + n) % n) as usize
}
