//! Parse, order and range-match versions that extend `major.minor.patch` with
//! release tags (`1.0-rc2`, `1.0.0_beta_p1`), a fourth column and build numbers.
//!
//! ```
//! use semverx::{Range, Version, satisfies};
//!
//! let v = Version::parse("1.2.3").unwrap();
//! assert!(v < Version::parse("1.2.4-beta").unwrap());
//! assert!(Range::parse("^1.2.0").unwrap().is_satisfied_by(&v));
//! assert_eq!(satisfies("2.0.0", "^1.2.0"), Ok(false));
//! ```

pub mod config;
pub mod logging;
pub mod version;

pub use version::{Range, ReleaseType, Version, VersionError, compare, satisfies};
