//! Version selection core for avn-nodebrew.
//!
//! Everything here is independent of a concrete version manager:
//! - Identifier decomposition (`node@4.2.0` into name and number).
//! - npm-style range evaluation on top of `semver`.
//! - The `VersionManager` seam and the matcher that ranks its listing.

mod error;
mod matcher;
mod range;
mod traits;
mod types;

pub use error::BackendError;
pub use matcher::{find_version, match_version};
pub use range::{RangeParseError, VersionRange};
pub use traits::VersionManager;
pub use types::{Identifier, VersionMatch, parse_name, parse_number, parse_version};
