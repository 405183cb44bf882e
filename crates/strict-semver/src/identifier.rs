//! Pre-release identifiers and their precedence

use std::cmp::Ordering;
use std::fmt;

/// One dot-separated segment of a pre-release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// Only ASCII digits
    Numeric(&'a str),
    /// Contains at least one letter or hyphen
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    /// Classify an identifier the parser has already validated
    pub(crate) fn new(identifier: &'a str) -> Self {
        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(identifier)
        } else {
            Identifier::AlphaNumeric(identifier)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Numeric identifiers carry no leading zeros, so the longer one is larger
            (Identifier::Numeric(a), Identifier::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(Identifier::new("0"), Identifier::Numeric("0"));
        assert_eq!(Identifier::new("11"), Identifier::Numeric("11"));
        assert_eq!(Identifier::new("alpha"), Identifier::AlphaNumeric("alpha"));
        assert_eq!(Identifier::new("1a"), Identifier::AlphaNumeric("1a"));
        assert_eq!(Identifier::new("-"), Identifier::AlphaNumeric("-"));
        assert!(Identifier::new("42").is_numeric());
        assert!(!Identifier::new("rc").is_numeric());
    }

    #[test]
    fn test_parsed_identifiers_are_never_empty() {
        let version = crate::Version::parse("1.0.0-0.a-.--.x7").unwrap();
        let identifiers: Vec<Identifier<'_>> = version.pre_release_identifiers().collect();
        assert_eq!(identifiers.len(), 4);
        assert!(identifiers.iter().all(|id| !id.as_str().is_empty()));
        assert_eq!(identifiers[0], Identifier::Numeric("0"));
    }

    #[test]
    fn test_numeric_compares_by_value() {
        assert!(Identifier::new("2") < Identifier::new("11"));
        assert!(Identifier::new("0") < Identifier::new("1"));
        assert!(Identifier::new("99") < Identifier::new("100"));
        assert_eq!(Identifier::new("7").cmp(&Identifier::new("7")), Ordering::Equal);
        assert!(
            Identifier::new("18446744073709551616") > Identifier::new("18446744073709551615")
        );
    }

    #[test]
    fn test_numeric_sorts_before_alphanumeric() {
        assert!(Identifier::new("1") < Identifier::new("alpha"));
        assert!(Identifier::new("999") < Identifier::new("a"));
        assert!(Identifier::new("beta") > Identifier::new("2"));
    }

    #[test]
    fn test_alphanumeric_compares_ordinally() {
        assert!(Identifier::new("alpha") < Identifier::new("beta"));
        assert!(Identifier::new("RC") < Identifier::new("rc"));
        assert!(Identifier::new("alpha-beta") > Identifier::new("alpha"));
        assert!(Identifier::new("-") < Identifier::new("0a"));
    }
}
