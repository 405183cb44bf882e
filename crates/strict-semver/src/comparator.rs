//! Version comparison utilities

use std::cmp::Ordering;

use crate::Version;

/// Comparator implementing Semantic Versioning precedence
pub struct Comparator;

impl Comparator {
    /// Three-way comparison; every relational operator on [`Version`] goes through here
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        let core1 = (version1.major(), version1.minor(), version1.patch());
        let core2 = (version2.major(), version2.minor(), version2.patch());

        core1.cmp(&core2).then_with(|| {
            match (version1.is_pre_release(), version2.is_pre_release()) {
                (false, false) => Ordering::Equal,
                // A release outranks any of its pre-releases
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => Self::compare_pre_release(version1, version2),
            }
        })
    }

    /// Identifier-by-identifier comparison; a strict prefix sorts first
    fn compare_pre_release(version1: &Version, version2: &Version) -> Ordering {
        version1
            .pre_release_identifiers()
            .cmp(version2.pre_release_identifiers())
    }
}
