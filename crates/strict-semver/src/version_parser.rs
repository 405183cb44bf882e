//! Version parsing and validation module

use std::fmt;
use std::str::Utf8Error;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

/// Which grammar the parser accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Semantic Versioning 2.0.0 exactly
    #[default]
    Strict,
    /// Also accepts a pre-release without its leading hyphen (`1.0.0alpha`)
    Permissive,
}

/// Why a string was rejected by the version grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    Whitespace,
    MissingCoreComponent,
    TooManyCoreComponents,
    NonNumericCoreComponent,
    LeadingZero,
    CoreComponentTooLarge,
    EmptyPreRelease,
    EmptyPreReleaseIdentifier,
    LeadingZeroPreRelease,
    EmptyBuild,
    EmptyBuildIdentifier,
    InvalidCharacter(char),
    Malformed,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => write!(f, "empty input"),
            InvalidReason::Whitespace => write!(f, "contains whitespace"),
            InvalidReason::MissingCoreComponent => write!(f, "missing core component"),
            InvalidReason::TooManyCoreComponents => write!(f, "too many core components"),
            InvalidReason::NonNumericCoreComponent => write!(f, "non-numeric core component"),
            InvalidReason::LeadingZero => write!(f, "leading zero in core component"),
            InvalidReason::CoreComponentTooLarge => write!(f, "core component too large"),
            InvalidReason::EmptyPreRelease => write!(f, "empty pre-release segment"),
            InvalidReason::EmptyPreReleaseIdentifier => write!(f, "empty pre-release identifier"),
            InvalidReason::LeadingZeroPreRelease => {
                write!(f, "leading zero in numeric pre-release identifier")
            }
            InvalidReason::EmptyBuild => write!(f, "empty build metadata"),
            InvalidReason::EmptyBuildIdentifier => write!(f, "empty build identifier"),
            InvalidReason::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            InvalidReason::Malformed => {
                write!(f, "does not match MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")
            }
        }
    }
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Version input is not text: {0}")]
    NotText(#[from] Utf8Error),
    #[error("Invalid version string \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: InvalidReason },
}

impl VersionParserError {
    fn invalid(version: &str, reason: InvalidReason) -> Self {
        VersionParserError::InvalidVersion {
            version: version.to_string(),
            reason,
        }
    }

    /// The grammar violation, if this is a validation failure
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            VersionParserError::InvalidVersion { reason, .. } => Some(*reason),
            VersionParserError::NotText(_) => None,
        }
    }
}

lazy_static! {
    static ref NUMERIC_ID: &'static str = r"0|[1-9][0-9]*";

    // A pre-release identifier: numeric without leading zero, or containing a non-digit
    static ref PRE_RELEASE_ID: String = format!(r"(?:{}|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)", *NUMERIC_ID);

    static ref CORE_REGEX: String = format!(
        r"({n})\.({n})\.({n})",
        n = *NUMERIC_ID
    );

    static ref BUILD_REGEX: &'static str = r"(?:\+(?P<build>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?";

    static ref STRICT_VERSION_RE: Regex = Regex::new(&format!(
        r"^{core}(?:-(?P<pre>{id}(?:\.{id})*))?{build}$",
        core = *CORE_REGEX,
        id = *PRE_RELEASE_ID,
        build = *BUILD_REGEX,
    )).unwrap();

    // The hyphen-less pre-release must open with a letter so the patch number stays unambiguous
    static ref PERMISSIVE_VERSION_RE: Regex = Regex::new(&format!(
        r"^{core}(?:-(?P<pre>{id}(?:\.{id})*)|(?P<bare>[a-zA-Z][0-9a-zA-Z-]*(?:\.{id})*))?{build}$",
        core = *CORE_REGEX,
        id = *PRE_RELEASE_ID,
        build = *BUILD_REGEX,
    )).unwrap();
}

/// Find the first grammar violation in a string the regex rejected
fn diagnose(version: &str, mode: ParseMode) -> InvalidReason {
    if version.is_empty() {
        return InvalidReason::Empty;
    }
    if version.chars().any(char::is_whitespace) {
        return InvalidReason::Whitespace;
    }

    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (version, None),
    };
    let (core, pre_release) = split_pre_release(rest, mode);

    diagnose_core(core)
        .or_else(|| pre_release.and_then(diagnose_pre_release))
        .or_else(|| build.and_then(diagnose_build))
        .unwrap_or(InvalidReason::Malformed)
}

fn split_pre_release(rest: &str, mode: ParseMode) -> (&str, Option<&str>) {
    if mode == ParseMode::Permissive {
        // A hyphen-less pre-release starts at the first letter after the numeric core
        let start = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'));
        if let Some(start) = start.filter(|&i| rest.as_bytes()[i].is_ascii_alphabetic()) {
            return (&rest[..start], Some(&rest[start..]));
        }
    }

    match rest.split_once('-') {
        Some((core, pre_release)) => (core, Some(pre_release)),
        None => (rest, None),
    }
}

fn diagnose_core(core: &str) -> Option<InvalidReason> {
    let parts: Vec<&str> = core.split('.').collect();

    for part in &parts {
        if part.is_empty() {
            return Some(InvalidReason::MissingCoreComponent);
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Some(InvalidReason::NonNumericCoreComponent);
        }
        if part.len() > 1 && part.starts_with('0') {
            return Some(InvalidReason::LeadingZero);
        }
        if part.parse::<u64>().is_err() {
            return Some(InvalidReason::CoreComponentTooLarge);
        }
    }

    match parts.len() {
        0..=2 => Some(InvalidReason::MissingCoreComponent),
        3 => None,
        _ => Some(InvalidReason::TooManyCoreComponents),
    }
}

fn diagnose_pre_release(pre_release: &str) -> Option<InvalidReason> {
    if pre_release.is_empty() {
        return Some(InvalidReason::EmptyPreRelease);
    }
    for identifier in pre_release.split('.') {
        if identifier.is_empty() {
            return Some(InvalidReason::EmptyPreReleaseIdentifier);
        }
        if let Some(c) = find_invalid_char(identifier) {
            return Some(InvalidReason::InvalidCharacter(c));
        }
        if identifier.len() > 1
            && identifier.starts_with('0')
            && identifier.bytes().all(|b| b.is_ascii_digit())
        {
            return Some(InvalidReason::LeadingZeroPreRelease);
        }
    }
    None
}

fn diagnose_build(build: &str) -> Option<InvalidReason> {
    if build.is_empty() {
        return Some(InvalidReason::EmptyBuild);
    }
    for identifier in build.split('.') {
        if identifier.is_empty() {
            return Some(InvalidReason::EmptyBuildIdentifier);
        }
        if let Some(c) = find_invalid_char(identifier) {
            return Some(InvalidReason::InvalidCharacter(c));
        }
    }
    None
}

fn find_invalid_char(identifier: &str) -> Option<char> {
    identifier
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || c == '-'))
}

fn parse_core_component(digits: &str, version: &str) -> Result<u64, VersionParserError> {
    digits
        .parse()
        .map_err(|_| VersionParserError::invalid(version, InvalidReason::CoreComponentTooLarge))
}

/// Version parser turning version strings into [`Version`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    mode: ParseMode,
}

impl VersionParser {
    /// Create a strict version parser
    pub fn new() -> Self {
        Self::with_mode(ParseMode::Strict)
    }

    /// Create a parser that tolerates a missing hyphen before the pre-release
    pub fn permissive() -> Self {
        Self::with_mode(ParseMode::Permissive)
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        VersionParser { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string, anchored at both ends
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let re = match self.mode {
            ParseMode::Strict => &*STRICT_VERSION_RE,
            ParseMode::Permissive => &*PERMISSIVE_VERSION_RE,
        };

        let Some(caps) = re.captures(version) else {
            let reason = diagnose(version, self.mode);
            log::debug!("Rejected version {:?}: {}", version, reason);
            return Err(VersionParserError::invalid(version, reason));
        };

        let major = parse_core_component(&caps[1], version)?;
        let minor = parse_core_component(&caps[2], version)?;
        let patch = parse_core_component(&caps[3], version)?;
        let pre_release = caps
            .name("pre")
            .or_else(|| caps.name("bare"))
            .map(|m| m.as_str().to_string());
        let build = caps.name("build").map(|m| m.as_str().to_string());

        log::trace!("Parsed version {:?} ({:?} mode)", version, self.mode);

        Ok(Version::new(major, minor, patch, pre_release, build))
    }

    /// Parse raw bytes, failing with [`VersionParserError::NotText`] when they are not UTF-8
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Version, VersionParserError> {
        let version = std::str::from_utf8(bytes)?;
        self.parse(version)
    }
}
