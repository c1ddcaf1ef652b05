//! Relaxed semantic version parsing.
//!
//! Go reports release numbers with omitted components ("go1.10", "go1");
//! the `semver` crate requires all three. Parsing zero-pads the missing
//! minor/patch components before deferring to `semver`.

use semver::Version;

use crate::error::{Result, VersionError};

/// Parse a version number, tolerating omitted minor/patch components.
///
/// "1" and "1.9" parse as 1.0.0 and 1.9.0. Anything `semver` still
/// rejects after padding (non-numeric segments, four segments) is an
/// error.
pub fn parse_relaxed(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VersionError::Empty);
    }

    let candidate = match trimmed.split('.').count() {
        1 => format!("{trimmed}.0.0"),
        2 => format!("{trimmed}.0"),
        _ => trimmed.to_string(),
    };

    Version::parse(&candidate).map_err(|source| VersionError::Invalid {
        raw: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_omitted_components() {
        assert_eq!(parse_relaxed("1").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse_relaxed("1.9").unwrap(), Version::new(1, 9, 0));
        assert_eq!(parse_relaxed("0.9").unwrap(), Version::new(0, 9, 0));
    }

    #[test]
    fn full_versions_pass_through() {
        assert_eq!(parse_relaxed("1.9.2").unwrap(), Version::new(1, 9, 2));
        assert_eq!(parse_relaxed("99.99.99").unwrap(), Version::new(99, 99, 99));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_relaxed(" 1.12.5 ").unwrap(), Version::new(1, 12, 5));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_relaxed(""), Err(VersionError::Empty)));
        assert!(matches!(parse_relaxed("   "), Err(VersionError::Empty)));
    }

    #[test]
    fn rejects_non_versions() {
        assert!(parse_relaxed("abc").is_err());
        assert!(parse_relaxed("1.x").is_err());
        assert!(parse_relaxed("1.2.3.4").is_err());
    }
}
