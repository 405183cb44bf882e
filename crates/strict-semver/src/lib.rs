//! Strict Semantic Versioning 2.0.0 parsing and precedence ordering
//!
//! This crate parses version strings into immutable [`Version`] values and
//! orders them by SemVer precedence. Build metadata is kept for rendering but
//! never affects equality or ordering.

mod comparator;
mod identifier;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use identifier::Identifier;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{InvalidReason, ParseMode, VersionParser, VersionParserError};
