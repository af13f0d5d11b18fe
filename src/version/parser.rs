//! Single-pass text to [`Version`] conversion
//!
//! Grammar, left to right:
//!
//! ```text
//! [v]NUM(.NUM){0,3}[(-|_)TAG[.]NUM(.NUM){0,3}][(-|_)TAG[.]NUM(.NUM){0,3}][+buildNUM]
//! ```
//!
//! A dash followed by a digit opens a tag group without a tag (`1.2.3-4`),
//! letters directly after a number open one too (`1.0rc1`).

use crate::version::error::VersionError;
use crate::version::field::{
    IDX_RELEASE, IDX_RELEASE_TYPE, IDX_SPECIFIER, IDX_SPECIFIER_TYPE, ReleaseType, Version,
};

const BUILD_SUFFIX: &[u8] = b"+build";

/// Numbers are kept to nine digits, except for this literal which is taken verbatim.
const MAX_LITERAL: &[u8] = b"2147483647";

/// Dot-separated columns allowed per group.
const MAX_COLUMNS: usize = 4;

/// Parse a version from raw bytes.
pub(crate) fn parse(input: &[u8]) -> Result<Version, VersionError> {
    Parser::new(input).run()
}

/// Scan state threaded through the parse loop.
struct Parser<'a> {
    input: &'a [u8],
    idx: usize,
    /// Slot of the flat layout the next number lands in.
    field: usize,
    /// Columns seen in the current group.
    column: usize,
    version: Version,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            idx: 0,
            field: 0,
            column: 0,
            version: Version::default(),
        }
    }

    fn run(mut self) -> Result<Version, VersionError> {
        if self.input.is_empty() {
            return Err(VersionError::InvalidVersionString);
        }
        if self.input.len() > 1 && self.input[0] == b'v' {
            self.idx = 1;
        }

        while let Some(&byte) = self.input.get(self.idx) {
            match byte {
                b'.' => self.column_separator()?,
                b'0'..=b'9' => self.number()?,
                b'-' | b'_' => self.dash()?,
                b'+' => {
                    self.version.build = build_suffix(&self.input[self.idx..])?;
                    break;
                }
                b if b.is_ascii_alphabetic() => self.tag()?,
                _ => return Err(VersionError::InvalidVersionString),
            }
        }

        Ok(self.version)
    }

    fn column_separator(&mut self) -> Result<(), VersionError> {
        self.idx += 1;
        self.column += 1;
        if self.column >= MAX_COLUMNS || self.idx >= self.input.len() {
            return Err(VersionError::TooManyColumns);
        }
        self.field += 1;
        self.number()
    }

    fn number(&mut self) -> Result<(), VersionError> {
        let (len, value) = read_number(&self.input[self.idx..])?;
        let slot = self
            .version
            .numeric_slot_mut(self.field)
            .ok_or(VersionError::InvalidVersionString)?;
        *slot = value;
        self.idx += len;
        Ok(())
    }

    /// A dash either continues with a bare number or introduces a tag.
    fn dash(&mut self) -> Result<(), VersionError> {
        self.idx += 1;
        match self.input.get(self.idx) {
            Some(b) if b.is_ascii_digit() => {
                self.column = 0;
                self.field = match self.field {
                    f if f < IDX_RELEASE_TYPE => IDX_RELEASE,
                    f if f < IDX_SPECIFIER_TYPE => IDX_SPECIFIER,
                    _ => return Err(VersionError::InvalidVersionString),
                };
                Ok(())
            }
            Some(_) => self.tag(),
            None => Err(VersionError::InvalidVersionString),
        }
    }

    fn tag(&mut self) -> Result<(), VersionError> {
        let rest = &self.input[self.idx..];
        let len = rest.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        // An empty tag is only meaningful when numbers follow it.
        if len == 0 && rest.first() != Some(&b'.') {
            return Err(VersionError::InvalidVersionString);
        }
        let kind = ReleaseType::from_tag(&rest[..len]).ok_or(VersionError::InvalidVersionString)?;

        match self.field {
            f if f < IDX_RELEASE_TYPE => {
                self.field = IDX_RELEASE_TYPE;
                self.version.release_type = kind;
            }
            f if f < IDX_SPECIFIER_TYPE => {
                self.field = IDX_SPECIFIER_TYPE;
                self.version.specifier_type = kind;
            }
            _ => return Err(VersionError::InvalidVersionString),
        }

        let mut next = self.idx + len;
        if next + 1 < self.input.len() && self.input[next] == b'.' {
            next += 1;
        }

        self.field += 1;
        self.column = 0;
        self.idx = next;
        Ok(())
    }
}

/// Read the run of digits at the start of `input`, returning its length and value.
fn read_number(input: &[u8]) -> Result<(usize, i32), VersionError> {
    let len = input.iter().take_while(|b| b.is_ascii_digit()).count();
    let digits = &input[..len];

    match len {
        0 => Err(VersionError::InvalidVersionString),
        1..=9 => Ok((len, accumulate(digits))),
        10 if digits == MAX_LITERAL => Ok((len, i32::MAX)),
        10 => Err(VersionError::VersionTooLong),
        _ => Err(VersionError::InvalidVersionString),
    }
}

/// Fold at most nine ASCII digits into a number.
fn accumulate(digits: &[u8]) -> i32 {
    digits
        .iter()
        .fold(0, |acc, d| acc * 10 + i32::from(d - b'0'))
}

/// Parse `+buildNNN`, which must run to the end of the input.
fn build_suffix(input: &[u8]) -> Result<i32, VersionError> {
    let digits = input
        .strip_prefix(BUILD_SUFFIX)
        .ok_or(VersionError::InvalidBuildSuffix)?;
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(VersionError::InvalidBuildSuffix);
    }

    read_number(digits)
        .map(|(_, value)| value)
        .map_err(|_| VersionError::InvalidBuildSuffix)
}
