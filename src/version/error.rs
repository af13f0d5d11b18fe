use thiserror::Error;

/// Errors returned when text (or a loosely typed value) cannot become a `Version`.
///
/// Range parsing has no error kinds of its own; malformed ranges surface as one
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Given string does not resemble a Version")]
    InvalidVersionString,

    #[error("Version consists of too many columns")]
    TooManyColumns,

    #[error("Version is too long")]
    VersionTooLong,

    #[error("Version has a '+' but no +buildNNN suffix")]
    InvalidBuildSuffix,

    #[error("Cannot read this type into a Version")]
    InvalidType,

    #[error("The source representation does not fit into a Version")]
    OutOfBounds,
}

impl VersionError {
    /// Always `true`; lets input validators recognise these as validation failures.
    pub fn is_invalid(&self) -> bool {
        true
    }
}
