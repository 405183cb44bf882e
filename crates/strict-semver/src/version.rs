//! The parsed semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{Comparator, Identifier, VersionParser, VersionParserError};

/// A parsed Semantic Versioning 2.0.0 version.
///
/// Values are immutable and can only be obtained by parsing. Equality,
/// hashing and ordering ignore build metadata.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build: Option<String>,
}

impl Version {
    pub(crate) fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<String>,
        build: Option<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    /// Parse a version string using the strict grammar
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }

    /// Parse raw bytes using the strict grammar
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, VersionParserError> {
        VersionParser::new().parse_bytes(bytes)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Iterate over the dot-separated pre-release identifiers, empty for a release
    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        self.pre_release
            .as_deref()
            .into_iter()
            .flat_map(|pre_release| pre_release.split('.'))
            .map(Identifier::new)
    }

    /// Render as `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    ///
    /// Strict input is reproduced exactly. A pre-release accepted without its
    /// hyphen in permissive mode is rendered with the hyphen.
    pub fn canonical(&self) -> String {
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if let Some(pre_release) = &self.pre_release {
            out.push('-');
            out.push_str(pre_release);
        }
        if let Some(build) = &self.build {
            out.push('+');
            out.push_str(build);
        }
        out
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version: {}", self.canonical())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionParserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let version = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&version).map_err(serde::de::Error::custom)
    }
}
