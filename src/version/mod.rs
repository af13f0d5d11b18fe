//! Version layer: parsing, ordering, ranges and sorting
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Parser    │────▶│    Field    │◀────│    Range    │
//! │ (text→slots)│     │  (14 slots) │     │ (contains)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ▲                   │
//!                            │                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │    Sort     │────▶│   Compare   │
//!                     │ (key bucket)│     │ (precision) │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`field`]: The fixed-width slot layout and release types
//! - `parser`: Single-pass text to `Version` conversion
//! - [`compare`]: Full and limited-precision ordering
//! - [`convert`]: Display, FromStr, serde and loosely typed conversions
//! - [`range`]: Range grammar and containment
//! - [`sort`]: Magnitude key and bucketed sorting
//! - [`error`]: Error taxonomy

pub mod compare;
pub mod convert;
pub mod error;
pub mod field;
mod parser;
pub mod range;
pub mod sort;

pub use compare::compare;
pub use error::VersionError;
pub use field::{FIELD_COUNT, Precision, ReleaseType, Version};
pub use range::{Range, satisfies};
pub use sort::{magnitude_key, par_sort_versions, sort_versions, two_field_key, version_key};
