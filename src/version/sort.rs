//! Key-bucketed sorting for large version collections
//!
//! [`two_field_key`] folds two adjacent slots into one byte. Keys only
//! approximate the order: once the high field is large its low nibble no longer
//! follows the version order, so such keys are bucketed on the high nibble
//! alone. Every bucket is finished with the full comparator, so the result is
//! exactly `slice::sort`.

use std::borrow::Borrow;

use rayon::prelude::*;
use tracing::debug;

use crate::config::SortConfig;
use crate::version::field::{FIELD_COUNT, Version};

/// First magnitude class that no longer identifies a single value.
const LARGE: u8 = 12;

/// Top magnitude class; past it the second field is not looked at.
const TOP: u8 = 15;

/// Low nibble used once the high field reaches the top class.
const SENTINEL: u8 = 0x0F;

const BUCKETS: usize = 256;

/// Column pairs keyed in turn: (major, minor), then (patch, revision).
const KEY_INDICES: [usize; 2] = [0, 2];

/// Magnitude class of a non-negative field.
///
/// 0 to 11 map to themselves; larger values map to 11 plus their width in bytes.
/// Negative input is treated as 0.
pub fn magnitude_key(x: i32) -> u8 {
    let x = x.max(0) as u32;
    if x < u32::from(LARGE) {
        return x as u8;
    }
    let bits = u32::BITS - x.leading_zeros();
    (LARGE - 1) + bits.div_ceil(8) as u8
}

/// Pack the magnitude classes of two adjacent fields into one byte, high field first.
///
/// In the top class the second field is ignored and the low nibble is the sentinel.
pub fn two_field_key(first: i32, second: i32) -> u8 {
    let high = magnitude_key(first);
    if high == TOP {
        return (high << 4) | SENTINEL;
    }
    (high << 4) | magnitude_key(second)
}

/// Key of the slots at `index` and `index + 1` of [`Version::fields`].
///
/// Type slots hold negative values and key as 0. `None` when `index + 1` is
/// past the last slot.
pub fn version_key(version: &Version, index: usize) -> Option<u8> {
    if index >= FIELD_COUNT - 1 {
        return None;
    }
    let fields = version.fields();
    Some(two_field_key(fields[index], fields[index + 1]))
}

/// Whether every version under `key` has the same values in both keyed fields.
fn is_exact(key: u8) -> bool {
    key >> 4 < LARGE && key & 0x0F < LARGE
}

/// Bucket for `key`. Within a large high class the low nibble is unordered,
/// so each such class is a single bucket.
fn bucket_of(key: u8) -> u8 {
    if key >> 4 >= LARGE { key | SENTINEL } else { key }
}

fn key_of<T: Borrow<Version>>(item: &T, depth: usize) -> u8 {
    // u8::MAX is not exact, so a miss is finished by the comparator.
    version_key(item.borrow(), KEY_INDICES[depth]).map_or(u8::MAX, bucket_of)
}

fn comparator_sort<T: Borrow<Version>>(items: &mut [T]) {
    items.sort_by(|a, b| a.borrow().cmp(b.borrow()));
}

/// Distribute `items` into key buckets, keeping their relative order.
fn partition<T: Borrow<Version>>(items: Vec<T>, depth: usize) -> Vec<Vec<T>> {
    let mut buckets: Vec<Vec<T>> = (0..BUCKETS).map(|_| Vec::new()).collect();
    for item in items {
        let key = key_of(&item, depth);
        buckets[usize::from(key)].push(item);
    }
    buckets
}

fn bucket_sort<T: Borrow<Version>>(mut items: Vec<T>, depth: usize, threshold: usize) -> Vec<T> {
    if depth >= KEY_INDICES.len() || items.len() < threshold.max(2) {
        comparator_sort(&mut items);
        return items;
    }

    let len = items.len();
    let mut sorted = Vec::with_capacity(len);
    for (key, bucket) in partition(items, depth).into_iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        sorted.extend(finish_bucket(bucket, key as u8, depth, threshold));
    }
    sorted
}

/// Sort one bucket: descend to the next key if the bucket is exact, else compare.
fn finish_bucket<T: Borrow<Version>>(
    mut bucket: Vec<T>,
    key: u8,
    depth: usize,
    threshold: usize,
) -> Vec<T> {
    if is_exact(key) {
        bucket_sort(bucket, depth + 1, threshold)
    } else {
        comparator_sort(&mut bucket);
        bucket
    }
}

/// Sort versions ascending by full ordering, bucketing large inputs on the magnitude key.
///
/// Works on owned versions as well as references (`Vec<&Version>`).
pub fn sort_versions<T: Borrow<Version>>(items: &mut Vec<T>, config: &SortConfig) {
    let taken = std::mem::take(items);
    *items = bucket_sort(taken, 0, config.bucket_threshold);
}

/// Like [`sort_versions`], but sorts the top-level buckets on the rayon pool.
///
/// Buckets are concatenated in key order, which is already the final order
/// between buckets.
pub fn par_sort_versions<T: Borrow<Version> + Send>(items: &mut Vec<T>, config: &SortConfig) {
    if items.len() < config.parallel_threshold.max(2) {
        sort_versions(items, config);
        return;
    }

    let taken = std::mem::take(items);
    let len = taken.len();
    let mut buckets: Vec<(u8, Vec<T>)> = partition(taken, 0)
        .into_iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(key, bucket)| (key as u8, bucket))
        .collect();
    debug!(len, buckets = buckets.len(), "sorting version buckets in parallel");

    let threshold = config.bucket_threshold;
    buckets.par_iter_mut().for_each(|(key, bucket)| {
        let taken = std::mem::take(bucket);
        *bucket = finish_bucket(taken, *key, 0, threshold);
    });

    let mut sorted = Vec::with_capacity(len);
    for (_, bucket) in buckets {
        sorted.extend(bucket);
    }
    *items = sorted;
}
