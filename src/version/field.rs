//! Fixed-width field encoding of a version
//!
//! A [`Version`] is laid out as 14 ordered `i32` slots plus a build number:
//!
//! ```text
//!  0..=3   major, minor, patch, revision
//!  4       release type       (alpha .. patch)
//!  5..=8   release numbers    (1.0-rc2.1 -> 2, 1)
//!  9       specifier type
//!  10..=13 specifier numbers  (1.0-rc4-alpha1 -> 1)
//! ```
//!
//! The slots are stored as named groups; [`Version::fields`] gives the flat view
//! that comparison and sorting walk over.

/// Number of ordered slots, not counting the build number.
pub const FIELD_COUNT: usize = 14;

pub(crate) const IDX_RELEASE_TYPE: usize = 4;
pub(crate) const IDX_RELEASE: usize = 5;
pub(crate) const IDX_SPECIFIER_TYPE: usize = 9;
pub(crate) const IDX_SPECIFIER: usize = 10;

/// Pre- and post-release kinds, ordered by maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ReleaseType {
    Alpha = -4,
    Beta = -3,
    Pre = -2,
    Rc = -1,
    #[default]
    Common = 0,
    Revision = 1,
    Patch = 2,
}

impl ReleaseType {
    /// Look up a release tag, ignoring ASCII case.
    ///
    /// The empty tag is an alias for `pre` (as in `1.0-.2`).
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        const TAGS: [(&[u8], ReleaseType); 7] = [
            (b"alpha", ReleaseType::Alpha),
            (b"beta", ReleaseType::Beta),
            (b"pre", ReleaseType::Pre),
            (b"", ReleaseType::Pre),
            (b"rc", ReleaseType::Rc),
            (b"r", ReleaseType::Revision),
            (b"p", ReleaseType::Patch),
        ];

        TAGS.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, kind)| *kind)
    }

    /// Canonical tag text; empty for `Common`.
    pub fn tag(self) -> &'static str {
        match self {
            ReleaseType::Alpha => "alpha",
            ReleaseType::Beta => "beta",
            ReleaseType::Pre => "pre",
            ReleaseType::Rc => "rc",
            ReleaseType::Common => "",
            ReleaseType::Revision => "r",
            ReleaseType::Patch => "p",
        }
    }

    /// Slot value used in the flat field layout.
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn is_pre_release(self) -> bool {
        self < ReleaseType::Common
    }
}

/// How many leading slots of the flat layout a comparison looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Major, minor, patch and revision only.
    ReleaseType,
    /// Everything before the specifier type: the numeric core plus the release group.
    Specifier,
    /// All 14 slots.
    Full,
}

impl Precision {
    pub(crate) fn cutoff(self) -> usize {
        match self {
            Precision::ReleaseType => IDX_RELEASE_TYPE,
            Precision::Specifier => IDX_SPECIFIER_TYPE,
            Precision::Full => FIELD_COUNT,
        }
    }
}

/// A parsed version such as `1.2.3`, `1.0.0_pre20140722+build14` or `1.0.0-rc4-alpha1`.
///
/// Values are immutable once built; construct them with [`Version::parse`] or one of
/// the `TryFrom` conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub(crate) numeric: [i32; 4],
    pub(crate) release_type: ReleaseType,
    pub(crate) release: [i32; 4],
    pub(crate) specifier_type: ReleaseType,
    pub(crate) specifier: [i32; 4],
    pub(crate) build: i32,
}

impl Version {
    pub fn major(&self) -> i32 {
        self.numeric[0]
    }

    pub fn minor(&self) -> i32 {
        self.numeric[1]
    }

    pub fn patch(&self) -> i32 {
        self.numeric[2]
    }

    pub fn revision(&self) -> i32 {
        self.numeric[3]
    }

    pub fn release_type(&self) -> ReleaseType {
        self.release_type
    }

    /// Numbers attached to the release tag (`2, 1` in `1.0-rc2.1`).
    pub fn release(&self) -> &[i32; 4] {
        &self.release
    }

    pub fn specifier_type(&self) -> ReleaseType {
        self.specifier_type
    }

    pub fn specifier(&self) -> &[i32; 4] {
        &self.specifier
    }

    /// Number from a `+buildNNN` suffix, 0 if absent.
    pub fn build(&self) -> i32 {
        self.build
    }

    /// Whether the release tag is one of alpha, beta, pre or rc.
    pub fn is_pre_release(&self) -> bool {
        self.release_type.is_pre_release()
    }

    /// The 14 ordered slots as one flat array.
    pub fn fields(&self) -> [i32; FIELD_COUNT] {
        let [major, minor, patch, revision] = self.numeric;
        let [r0, r1, r2, r3] = self.release;
        let [s0, s1, s2, s3] = self.specifier;
        [
            major,
            minor,
            patch,
            revision,
            self.release_type.value(),
            r0,
            r1,
            r2,
            r3,
            self.specifier_type.value(),
            s0,
            s1,
            s2,
            s3,
        ]
    }

    /// Mutable access to a numeric slot of the flat layout; `None` for type slots.
    pub(crate) fn numeric_slot_mut(&mut self, index: usize) -> Option<&mut i32> {
        match index {
            0..IDX_RELEASE_TYPE => self.numeric.get_mut(index),
            IDX_RELEASE..IDX_SPECIFIER_TYPE => self.release.get_mut(index - IDX_RELEASE),
            IDX_SPECIFIER..FIELD_COUNT => self.specifier.get_mut(index - IDX_SPECIFIER),
            _ => None,
        }
    }
}
