#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::util::alloc::{CountedDrop, Tracked};
use crate::util::error::{CapacityOverflow, InvalidArgument};
use crate::util::hash::{Identity, IdentityHasherBuilder, ManualHash};

fn config(bucket_count: usize) -> SetConfig {
    SetConfig::builder()
        .bucket_count(bucket_count)
        .build()
        .expect("Bucket count should be valid.")
}

fn sorted<T: Ord + Copy>(iter: impl Iterator<Item = T>) -> DynamicArray<T> {
    let mut items: DynamicArray<T> = iter.collect();
    items.sort();
    items
}

#[test]
fn test_empty_set() {
    let set: HashSet<i32> = HashSet::new();

    for item in [1, 27, 109] {
        assert!(!set.contains(&item), "An empty set shouldn't contain {item}.");
    }
    assert!(set.is_empty());
    assert_eq!(set.each().count(), 0, "An empty set should yield nothing.");
    assert_eq!(set.bucket_count(), DEFAULT_BUCKET_COUNT);
}

#[test]
fn test_add_and_contains() {
    for item in [1, 8, 27, 109] {
        let mut set: HashSet<i32> = HashSet::new();
        set.add(item);

        assert!(set.contains(&item), "{item} was added and should be found.");
        assert_eq!(set.len(), 1);
    }
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    set.add(1);

    assert!(
        !set.contains(&9),
        "9 shares a bucket with 1 but should be told apart by equality."
    );

    set.add(9);
    assert!(set.contains(&1) && set.contains(&9), "Both chained values should be found.");
    assert_eq!(
        set.buckets[1].as_ref().map(|chain| chain.len()),
        Some(2),
        "1 and 9 should be chained in the same bucket."
    );

    let mut set = HashSet::with_config_and_hasher(config(6), IdentityHasherBuilder);
    set.add(ManualHash::new(0, "zero"));
    set.add(ManualHash::new(0, "one"));
    set.add(ManualHash::new(2, "two"));
    set.add(ManualHash::new(0, "three"));
    set.add(ManualHash::new(2, "four"));

    assert_eq!(
        *set.into_iter().map(|i| i.value()).collect::<DynamicArray<_>>(),
        ["zero", "one", "three", "two", "four"],
        "Elements should be yielded by bucket, then by insertion order within the chain."
    );
}

#[test]
fn test_negative_hashes() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    set.add(-7);

    assert!(set.contains(&-7), "Negative hashes should map to a valid bucket.");
    assert!(!set.contains(&7), "A value's negation shouldn't be found.");
    assert!(set.buckets[1].is_some(), "-7 should normalize into bucket 1 of 8.");

    let mut set = HashSet::with_config_and_hasher(config(1000), IdentityHasherBuilder);
    for extreme in [i64::MIN, i64::MIN + 1, -1, i64::MAX] {
        set.add(extreme);
        assert!(set.contains(&extreme), "{extreme} should be found after being added.");
    }
    assert!(!set.contains(&0));
}

#[test]
fn test_each_returns_each_item() {
    let mut set: HashSet<i32> = HashSet::new();
    set.add(7);
    set.add(42);
    set.add(904);

    let all = sorted(set.each().copied());
    assert_eq!(all.len(), 3, "Each should yield every element once.");
    assert_eq!(*all, [7, 42, 904]);

    let mut partial = set.each();
    partial.next();
    assert_eq!(partial.len(), 2, "The iterator should track what's left.");
    assert_eq!(set.each().count(), 3, "Each should restart on every call.");
    assert_eq!(partial.clone().count(), 2, "Cloned iterators should continue independently.");
}

#[test]
fn test_each_skips_empty_buckets() {
    let mut set = HashSet::with_config_and_hasher(config(16), IdentityHasherBuilder);
    for item in [15_u32, 3, 0, 19] {
        set.add(item);
    }

    assert!(
        set.each().copied().eq([0, 3, 19, 15]),
        "Buckets should be visited in ascending order, chains in insertion order."
    );
}

#[test]
fn test_strings() {
    let mut set: HashSet<String> = HashSet::new();
    set.add("no".to_owned());

    assert!(set.contains("no"));
    assert!(!set.contains("potatoes"));
}

#[test]
fn test_identity_equality() {
    let mut set: HashSet<Identity> = HashSet::new();
    let o1 = Identity::new();
    let o2 = Identity::new();

    set.add(o1.clone());

    assert!(set.contains(&o1), "The added instance should be found.");
    assert!(!set.contains(&o2), "A distinct instance shouldn't be equal to the added one.");
}

#[test]
fn test_duplicates() {
    let mut strict: HashSet<i32> = HashSet::new();
    assert!(strict.add(5), "The first add should store the value.");
    assert!(!strict.add(5), "An equal value should be rejected.");
    assert_eq!(strict.len(), 1);
    assert_eq!(strict.count(&5), 1);

    let config = SetConfig::builder()
        .bucket_count(8)
        .duplicates(Duplicates::Allow)
        .build()
        .expect("Configuration should be valid.");
    let mut multi: HashSet<i32> = HashSet::with_config(config);
    assert!(multi.add(5));
    assert!(multi.add(5), "Duplicates should be stored when allowed.");
    multi.add(6);

    assert_eq!(multi.len(), 3);
    assert_eq!(multi.count(&5), 2, "Both copies should be chained.");
    assert_eq!(multi.count(&6), 1);
    assert_eq!(multi.count(&7), 0);
    assert_eq!(multi.each().filter(|i| **i == 5).count(), 2);
}

#[test]
fn test_rehash() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    for i in 0..6 {
        set.add(i);
    }
    assert_eq!(set.bucket_count(), 8, "6 elements in 8 buckets are within the load factor.");

    set.add(6);
    assert_eq!(set.bucket_count(), 16, "Exceeding the load factor should double the buckets.");
    assert!(set.load_factor() <= DEFAULT_LOAD_FACTOR);

    for i in 7..1000 {
        set.add(i);
    }

    assert_eq!(set.len(), 1000);
    assert!(set.load_factor() <= DEFAULT_LOAD_FACTOR, "The load factor should be maintained.");
    for i in 0..1000 {
        assert!(set.contains(&i), "{i} should survive every rehash.");
    }
    assert!(!set.contains(&1000));
    assert_eq!(*sorted(set.each().copied()), *(0..1000).collect::<DynamicArray<_>>());
}

#[test]
fn test_rehash_small_load_factor() {
    let config = SetConfig::builder()
        .bucket_count(1)
        .load_factor(0.1)
        .build()
        .expect("Configuration should be valid.");
    let mut set = HashSet::with_config_and_hasher(config, IdentityHasherBuilder);

    set.add(0);
    assert_eq!(set.bucket_count(), 16, "One add should grow as far as the load factor needs.");

    for i in 1..50 {
        set.add(i);
        assert!(
            set.load_factor() <= 0.1,
            "Load {} exceeds 0.1 with {} buckets.", set.load_factor(), set.bucket_count()
        );
    }
    assert!((0..50).all(|i| set.contains(&i)));
}

#[test]
fn test_add_across_rehash() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    set.extend(0..6);

    assert!(!set.add(5), "A duplicate should be rejected.");
    assert_eq!(set.bucket_count(), 8, "A rejected duplicate shouldn't trigger a rehash.");

    assert!(set.add(9));
    assert_eq!(set.bucket_count(), 16);
    assert!(
        set.buckets[9].as_ref().is_some_and(|chain| chain.contains(&9)),
        "9 should be placed by the new bucket count, not the old one."
    );
    assert!(set.buckets[1].as_ref().is_some_and(|chain| !chain.contains(&9)));
    assert!(!set.add(9), "9 should be found again after the rehash.");
}

#[test]
fn test_failed_rehash_leaves_set_intact() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    set.extend([1, 2, 3]);

    assert_eq!(set.try_rehash(usize::MAX), Err(CapacityOverflow));
    assert_eq!(set.bucket_count(), 8, "The buckets shouldn't change when a rehash fails.");
    assert_eq!(set.len(), 3, "No element should be lost when a rehash fails.");
    for i in [1, 2, 3] {
        assert!(set.contains(&i), "{i} should still be found after a failed rehash.");
    }
    assert!(set.each().copied().eq([1, 2, 3]));
}

#[test]
fn test_fixed_growth() {
    let config = SetConfig::builder()
        .bucket_count(8)
        .growth(Growth::Fixed)
        .build()
        .expect("Configuration should be valid.");
    let mut set: HashSet<i32> = HashSet::with_config(config);

    for i in 0..100 {
        set.add(i);
    }

    assert_eq!(set.bucket_count(), 8, "A fixed set should never rehash.");
    assert_eq!(set.len(), 100);
    assert!(set.load_factor() > 12.0);
    assert!((0..100).all(|i| set.contains(&i)));
}

#[test]
fn test_config_validation() {
    assert_eq!(
        SetConfig::builder().bucket_count(0).build(),
        Err(InvalidArgument {
            name: "bucket_count",
            reason: "a set needs at least one bucket",
        }),
        "A set without buckets can't hold anything."
    );

    for load_factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let error = SetConfig::builder().load_factor(load_factor).build();
        assert_eq!(
            error.map_err(|e| e.name),
            Err("load_factor"),
            "{load_factor} shouldn't be accepted as a load factor."
        );
    }

    let config = SetConfig::default();
    assert_eq!(config.bucket_count(), 1000);
    assert_eq!(config.load_factor(), 0.75);
    assert!(config.duplicates().is_reject());
    assert!(config.growth().is_rehash());
}

#[test]
fn test_reads_are_idempotent() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    set.extend([1, 2, 3]);

    for _ in 0..3 {
        assert!(set.contains(&2));
        assert!(!set.contains(&10));
        assert_eq!(set.count(&3), 1);
    }

    assert_eq!(set.len(), 3, "Reads shouldn't change the length.");
    assert_eq!(set.bucket_count(), 8, "Reads shouldn't change the buckets.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut set: HashSet<Tracked> = HashSet::with_config(config(4));
    for id in 0..50 {
        set.add(Tracked::new(id, &counter));
    }
    assert_eq!(counter.take(), 0, "Rehashing shouldn't drop any elements.");

    assert!(!set.add(Tracked::new(3, &counter)));
    assert_eq!(counter.take(), 1, "A rejected duplicate should be dropped.");

    drop(set);
    assert_eq!(counter.take(), 50, "Every element should be dropped exactly once.");

    let mut set: HashSet<Tracked> = HashSet::with_config(config(4));
    for id in 0..10 {
        set.add(Tracked::new(id, &counter));
    }

    let mut iter = set.into_iter();
    drop(iter.next());
    assert_eq!(counter.take(), 1);
    drop(iter);
    assert_eq!(counter.take(), 9, "The owned iterator should drop the remaining elements.");
}

#[test]
fn test_clone_and_display() {
    let mut set = HashSet::with_config_and_hasher(config(8), IdentityHasherBuilder);
    set.extend([3, 1, 2]);

    let clone = set.clone();
    assert!(clone.each().copied().eq(set.each().copied()), "Clones should match exactly.");

    assert_eq!(format!("{set}"), "#{1, 2, 3}");
}
