//! Version ranges
//!
//! Supports:
//! - `*`, `x` or the empty string - every version
//! - `1.2.3` - exactly that version (read with limited precision)
//! - `^1.2.3` - >=1.2.3 <2.0.0 (`^0.2.3` is >=0.2.3 <0.3.0)
//! - `~1.2.3` - >=1.2.3 <1.3.0
//! - `1`, `1.2` - treated as `^1`, `~1.2`
//! - `1.x`, `1.2.*` - wildcards
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - one-sided bounds
//! - `1.2.3 - 2.0.0`, `>=1.0 <2.0`, `1.0,2.0` - two-sided intervals

use std::str::FromStr;

use tracing::{debug, trace};

use crate::version::error::VersionError;
use crate::version::field::{ReleaseType, Version};

/// A set of versions bounded below and/or above.
///
/// A range with neither bound contains every version. A range whose bounds are
/// identical matches that single version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    lower: Version,
    upper: Version,
    has_lower: bool,
    equals_lower: bool,
    has_upper: bool,
    equals_upper: bool,
}

impl Range {
    /// Parse a range expression.
    ///
    /// Fails only when a boundary is not a valid version.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        if s.is_empty() || s == "*" || s == "x" {
            return Ok(Range::default());
        }

        let mut s = s;
        let mut natural = true;
        if s.ends_with(".x") || s.ends_with(".*") {
            s = s.trim_end_matches(['.', 'x', '*']);
            natural = false;
        }
        if s.is_empty() {
            return Err(VersionError::InvalidVersionString);
        }
        if s.starts_with(['^', '~']) {
            return Self::from_shorthand(s);
        }

        let bytes = s.as_bytes();
        let (mut lower_bound, mut upper_bound) = (true, true);
        if bytes.len() >= 2 {
            lower_bound = !(bytes[0] == b'<' || bytes[1] == b'<');
            upper_bound = !(bytes[0] == b'>' || bytes[1] == b'>');
        }

        let (left_end, right_start) = split_points(s);
        natural = natural && left_end != right_start && s.len() > right_start;

        let left = &s[..left_end];
        if !natural && !left.starts_with(['<', '>', '=']) {
            match left.matches('.').count() {
                0 => return Self::from_shorthand(&format!("^{s}")),
                1 => return Self::from_shorthand(&format!("~{s}")),
                _ => {}
            }
        }

        let mut range = Range::default();
        if left_end == right_start {
            range.set_bound(s, lower_bound, upper_bound)?;
        } else {
            range.set_bound(left, true, false)?;
            range.set_bound(&s[right_start..], false, true)?;
        }
        trace!(input = s, ?range, "parsed range");
        Ok(range)
    }

    /// Expand a `^` or `~` prefixed version into an interval.
    fn from_shorthand(s: &str) -> Result<Self, VersionError> {
        let text = s.trim_start_matches(['~', '^']);
        let lower = Version::parse(text)?;
        if text.starts_with("0.0.") {
            return Range::parse(text);
        }

        let mut upper = Version::default();
        let bump = |n: i32| n.checked_add(1).ok_or(VersionError::OutOfBounds);
        if text.starts_with("0.") {
            upper.numeric[0] = lower.major();
            upper.numeric[1] = bump(lower.minor())?;
        } else if s.starts_with('^') || !text.contains('.') {
            upper.numeric[0] = bump(lower.major())?;
        } else {
            upper.numeric[0] = lower.major();
            upper.numeric[1] = bump(lower.minor())?;
        }

        debug!(shorthand = s, %lower, %upper, "expanded range shorthand");
        Ok(Range {
            lower,
            upper,
            has_lower: true,
            equals_lower: true,
            has_upper: true,
            equals_upper: false,
        })
    }

    fn set_bound(&mut self, s: &str, is_lower: bool, is_upper: bool) -> Result<(), VersionError> {
        let start = s
            .bytes()
            .position(|b| b.is_ascii_digit())
            .ok_or(VersionError::InvalidVersionString)?;
        let inclusive = start == 0 || s[..start].contains('=');
        let version = Version::parse(&s[start..])?;

        if is_upper {
            self.upper = version;
            self.has_upper = true;
            self.equals_upper = inclusive;
        }
        if is_lower {
            self.lower = version;
            self.has_lower = true;
            self.equals_lower = inclusive;
        }
        Ok(())
    }

    /// The lower boundary, if any.
    pub fn lower(&self) -> Option<&Version> {
        self.has_lower.then_some(&self.lower)
    }

    /// The upper boundary, if any.
    pub fn upper(&self) -> Option<&Version> {
        self.has_upper.then_some(&self.upper)
    }

    pub fn is_lower_inclusive(&self) -> bool {
        self.has_lower && self.equals_lower
    }

    pub fn is_upper_inclusive(&self) -> bool {
        self.has_upper && self.equals_upper
    }

    /// Whether the range is a single version rather than an interval.
    pub fn is_exact(&self) -> bool {
        self.has_lower && self.has_upper && self.lower == self.upper
    }

    /// Whether `v` lies inside the range.
    ///
    /// Pre-releases are contained like any other version; use
    /// [`Range::is_satisfied_by`] when pulling in packages.
    pub fn contains(&self, v: &Version) -> bool {
        if !self.has_lower && !self.has_upper {
            return true;
        }
        if self.is_exact() {
            return self.lower.limited_equal(v);
        }
        self.satisfies_lower_bound(v) && self.satisfies_upper_bound(v)
    }

    /// Like [`Range::contains`], but rejects pre-releases unless a boundary is a
    /// pre-release of the same major, minor, patch and revision.
    pub fn is_satisfied_by(&self, v: &Version) -> bool {
        if !self.contains(v) {
            return false;
        }
        if !v.is_pre_release() {
            return true;
        }
        self.lower()
            .into_iter()
            .chain(self.upper())
            .any(|bound| bound.is_pre_release() && bound.shares_prefix_with(v))
    }

    fn satisfies_lower_bound(&self, v: &Version) -> bool {
        if !self.has_lower {
            return true;
        }

        let equal = self.lower.limited_equal(v);
        if self.equals_lower && equal {
            return true;
        }
        self.lower.limited_less(v) && !equal
    }

    fn satisfies_upper_bound(&self, v: &Version) -> bool {
        if !self.has_upper {
            return true;
        }

        let mut equal = self.upper.limited_equal(v);
        if self.equals_upper && equal {
            return true;
        }
        // `<2.0.0` also keeps out 2.0.0-beta and friends.
        if !self.equals_upper && self.upper.release_type == ReleaseType::Common {
            equal = self.upper.shares_prefix_with(v);
        }
        v.limited_less(&self.upper) && !equal
    }
}

impl FromStr for Range {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

/// End of the left boundary and start of the right one.
///
/// Both are the string length when there is only one boundary.
fn split_points(s: &str) -> (usize, usize) {
    let separator = [' ', ','].into_iter().find_map(|sep| match s.find(sep) {
        Some(idx) if idx > 1 => Some(idx),
        _ => None,
    });
    let Some(left_end) = separator else {
        return (s.len(), s.len());
    };

    let right_start = match s.rfind(' ') {
        Some(idx) => idx + 1,
        None => s.rfind(',').map_or(0, |idx| idx + 1),
    };
    (left_end, right_start)
}

/// Parse `version` and `range` and report whether the version satisfies the range.
///
/// See [`Range::is_satisfied_by`].
pub fn satisfies(version: &str, range: &str) -> Result<bool, VersionError> {
    let version = Version::parse(version)?;
    let range = Range::parse(range)?;
    Ok(range.is_satisfied_by(&version))
}
