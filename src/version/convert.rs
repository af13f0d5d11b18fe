//! Conversions into and out of [`Version`]
//!
//! Text is the canonical representation: `Display` output parses back to an
//! identical `Version`, and serde goes through the same text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

use crate::version::error::VersionError;
use crate::version::field::{ReleaseType, Version};
use crate::version::parser;

/// Largest column value that still prints as nine digits.
const MAX_COLUMN: u64 = 999_999_999;

impl Version {
    /// Parse a version such as `1.2.3`, `v1.0-rc2` or `1.0.0_beta_p1+build7`.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        parser::parse(s.as_bytes())
    }

    /// Parse a version from raw bytes, as read from a file or socket.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VersionError> {
        parser::parse(bytes)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, revision] = self.numeric;
        write!(f, "{major}.{minor}.{patch}")?;
        if revision != 0 {
            write!(f, ".{revision}")?;
        }

        let has_specifier = !is_empty_group(self.specifier_type, &self.specifier);
        // An empty release group still needs a placeholder, or the specifier
        // would be read back as the release group.
        if has_specifier || !is_empty_group(self.release_type, &self.release) {
            write_group(f, self.release_type, &self.release)?;
        }
        if has_specifier {
            write_group(f, self.specifier_type, &self.specifier)?;
        }

        if self.build != 0 {
            write!(f, "+build{}", self.build)?;
        }
        Ok(())
    }
}

fn is_empty_group(kind: ReleaseType, numbers: &[i32; 4]) -> bool {
    kind == ReleaseType::Common && numbers.iter().all(|n| *n == 0)
}

fn write_group(f: &mut fmt::Formatter<'_>, kind: ReleaseType, numbers: &[i32; 4]) -> fmt::Result {
    write!(f, "-{}", kind.tag())?;

    let len = numbers.iter().rposition(|n| *n != 0).map_or(0, |i| i + 1);
    if len == 0 && kind == ReleaseType::Common {
        return f.write_str("0");
    }
    for (i, n) in numbers[..len].iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{n}")?;
    }
    Ok(())
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(de::Error::custom)
    }
}

fn column(value: u64) -> Result<i32, VersionError> {
    match value {
        0..=MAX_COLUMN => i32::try_from(value).map_err(|_| VersionError::OutOfBounds),
        v if v == i32::MAX as u64 => Ok(i32::MAX),
        _ => Err(VersionError::OutOfBounds),
    }
}

/// Numeric columns: major, minor, patch, revision.
impl TryFrom<&[u64]> for Version {
    type Error = VersionError;

    fn try_from(columns: &[u64]) -> Result<Self, Self::Error> {
        if columns.is_empty() {
            return Err(VersionError::InvalidVersionString);
        }
        if columns.len() > 4 {
            return Err(VersionError::TooManyColumns);
        }

        let mut version = Version::default();
        for (slot, value) in version.numeric.iter_mut().zip(columns) {
            *slot = column(*value)?;
        }
        Ok(version)
    }
}

/// Accepts version text, a bare major number or an array of numeric columns.
impl TryFrom<&Value> for Version {
    type Error = VersionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Version::parse(s),
            Value::Number(n) => {
                let major = n.as_u64().ok_or(VersionError::OutOfBounds)?;
                Version::try_from([major].as_slice())
            }
            Value::Array(items) => {
                let columns = items
                    .iter()
                    .map(|item| match item {
                        Value::Number(n) => n.as_u64().ok_or(VersionError::OutOfBounds),
                        _ => Err(VersionError::InvalidType),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Version::try_from(columns.as_slice())
            }
            _ => Err(VersionError::InvalidType),
        }
    }
}
