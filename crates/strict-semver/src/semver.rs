//! Semver facade providing high-level operations on version strings

use crate::{Version, VersionParser};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a string is a valid strict semantic version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    // Unparseable inputs are dropped; equal versions keep their input order
    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping version while sorting: {}", err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Semver::is_valid("1.0.2"));
        assert!(Semver::is_valid("1.0.0-rc.1+build.1"));
        assert!(!Semver::is_valid("1.0.2.5"));
        assert!(!Semver::is_valid("foo"));
        assert!(!Semver::is_valid("1.0.0alpha"));
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);
    }

    #[test]
    fn test_sort_semver_chain() {
        let versions = vec![
            "1.0.0",
            "1.0.0-rc.1",
            "1.0.0-beta.11",
            "1.0.0-beta.2",
            "1.0.0-beta",
            "1.0.0-alpha.beta",
            "1.0.0-alpha.1",
            "1.0.0-alpha",
        ];
        let mut expected = versions.clone();
        expected.reverse();
        assert_eq!(Semver::sort(&versions), expected);
    }

    #[test]
    fn test_sort_drops_invalid_and_is_stable() {
        let versions = vec!["1.0.0+b", "not-a-version", "1.0.0+a", "01.0.0", "0.9.0"];
        assert_eq!(Semver::sort(&versions), vec!["0.9.0", "1.0.0+b", "1.0.0+a"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0", "0.1.0"]);
    }
}
