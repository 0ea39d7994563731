use derive_more::IsVariant;

use crate::util::error::InvalidArgument;

/// The number of buckets a [`HashSet`](super::HashSet) starts with by default.
pub const DEFAULT_BUCKET_COUNT: usize = 1000;

/// The ratio of elements to buckets above which a [`HashSet`](super::HashSet) rehashes by default.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// What a [`HashSet`](super::HashSet) does when asked to add an element equal to one it already
/// holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Duplicates {
    /// Strict set semantics: the new element is dropped and `add` returns false.
    #[default]
    Reject,
    /// Every added element is stored, so equal elements can appear more than once in a chain.
    Allow,
}

/// How the bucket array of a [`HashSet`](super::HashSet) responds to its load factor being
/// exceeded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Growth {
    /// Double the bucket count and move every element into its new bucket.
    #[default]
    Rehash,
    /// Keep the bucket count chosen at construction. Chains grow without bound, so lookups degrade
    /// to `O(n / bucket_count)`.
    Fixed,
}

/// The validated construction parameters of a [`HashSet`](super::HashSet).
///
/// # Examples
/// ```
/// # use collection_examples::collections::hash::set::{Duplicates, SetConfig};
/// let config = SetConfig::builder()
///     .bucket_count(8)
///     .duplicates(Duplicates::Allow)
///     .build()
///     .unwrap();
/// assert_eq!(config.bucket_count(), 8);
/// assert_eq!(config.load_factor(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetConfig {
    bucket_count: usize,
    load_factor: f64,
    duplicates: Duplicates,
    growth: Growth,
}

impl SetConfig {
    /// Creates a builder initialized with the default configuration.
    pub const fn builder() -> SetConfigBuilder {
        SetConfigBuilder {
            config: SetConfig::DEFAULT,
        }
    }

    const DEFAULT: SetConfig = SetConfig {
        bucket_count: DEFAULT_BUCKET_COUNT,
        load_factor: DEFAULT_LOAD_FACTOR,
        duplicates: Duplicates::Reject,
        growth: Growth::Rehash,
    };

    /// Returns the number of buckets a set is created with.
    pub const fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Returns the maximum ratio of elements to buckets before a set rehashes.
    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the policy for adding elements equal to existing ones.
    pub const fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// Returns the policy for growing the bucket array.
    pub const fn growth(&self) -> Growth {
        self.growth
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        SetConfig::DEFAULT
    }
}

/// A builder for [`SetConfig`]. Values are only checked by [`SetConfigBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetConfigBuilder {
    config: SetConfig,
}

impl SetConfigBuilder {
    /// Sets the number of buckets. Must be at least 1.
    pub const fn bucket_count(mut self, bucket_count: usize) -> Self {
        self.config.bucket_count = bucket_count;
        self
    }

    /// Sets the load factor. Must be finite and greater than 0.
    pub const fn load_factor(mut self, load_factor: f64) -> Self {
        self.config.load_factor = load_factor;
        self
    }

    /// Sets the duplicate policy.
    pub const fn duplicates(mut self, duplicates: Duplicates) -> Self {
        self.config.duplicates = duplicates;
        self
    }

    /// Sets the growth policy.
    pub const fn growth(mut self, growth: Growth) -> Self {
        self.config.growth = growth;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the bucket count is 0 or the load factor isn't a finite,
    /// positive number.
    pub fn build(self) -> Result<SetConfig, InvalidArgument> {
        if self.config.bucket_count == 0 {
            return Err(InvalidArgument {
                name: "bucket_count",
                reason: "a set needs at least one bucket",
            });
        }

        if !self.config.load_factor.is_finite() || self.config.load_factor <= 0.0 {
            return Err(InvalidArgument {
                name: "load_factor",
                reason: "the load factor must be finite and greater than 0",
            });
        }

        Ok(self.config)
    }
}
