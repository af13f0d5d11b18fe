//! Ordering and equality over the field layout
//!
//! Every predicate walks the flat slots in order and stops at the first slot
//! that differs; they only disagree on how many slots they look at
//! (see [`Precision`]).

use std::cmp::Ordering;

use crate::version::field::{FIELD_COUNT, Precision, ReleaseType, Version};

/// Signum of the difference of the first differing slot, limited to `precision`.
pub(crate) fn sign_delta(
    a: &[i32; FIELD_COUNT],
    b: &[i32; FIELD_COUNT],
    precision: Precision,
) -> i8 {
    for (x, y) in a.iter().zip(b).take(precision.cutoff()) {
        if x == y {
            continue;
        }
        // Slots of one kind never span more than i32::MAX, so this cannot wrap.
        let delta = x.wrapping_sub(*y);
        return ((delta >> 31) - (delta.wrapping_neg() >> 31)) as i8;
    }
    0
}

/// Three-way comparison including the build number: -1, 0 or 1.
pub fn compare(a: &Version, b: &Version) -> i8 {
    match sign_delta(&a.fields(), &b.fields(), Precision::Full) {
        0 => a.build.cmp(&b.build) as i8,
        sign => sign,
    }
}

impl Version {
    /// Strict total order over all slots, then the build number.
    pub fn less(&self, other: &Version) -> bool {
        compare(self, other) < 0
    }

    /// Compare only the leading slots selected by `precision`; the build number is ignored.
    pub fn compare_prefix(&self, other: &Version, precision: Precision) -> Ordering {
        sign_delta(&self.fields(), &other.fields(), precision).cmp(&0)
    }

    /// Less-than over the numeric core and the release group.
    ///
    /// Versions that differ only in their specifier or build compare equal here.
    pub(crate) fn limited_less(&self, other: &Version) -> bool {
        self.compare_prefix(other, Precision::Specifier) == Ordering::Less
    }

    /// Equality over the numeric core and the release group.
    ///
    /// Read right to left: a plain release on the left accepts any pre-release of the
    /// same major, minor, patch and revision on the right. The reverse does not hold.
    pub fn limited_equal(&self, other: &Version) -> bool {
        if self.release_type == ReleaseType::Common && other.is_pre_release() {
            return self.shares_prefix_with(other);
        }
        self.compare_prefix(other, Precision::Specifier) == Ordering::Equal
    }

    /// Same major, minor, patch and revision.
    pub(crate) fn shares_prefix_with(&self, other: &Version) -> bool {
        self.compare_prefix(other, Precision::ReleaseType) == Ordering::Equal
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).cmp(&0)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
