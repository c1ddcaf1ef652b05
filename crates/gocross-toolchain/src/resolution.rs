//! Version-to-platform-list resolution.
//!
//! An ordered table of version constraints, one per release range, maps a
//! parsed toolchain version to its platform list. The resolver always
//! produces a usable list and never an error: unparseable or unmatched
//! input resolves to the newest release list.

use gocross_platform::Platform;
use semver::VersionReq;
use tracing::warn;

use crate::registry;
use crate::version;

/// Prefix the toolchain puts on its self-reported version ("go1.9.2").
const TOOLCHAIN_PREFIX: &str = "go";

/// Release ranges in ascending order; the first match wins. Lower bounds
/// are inclusive, upper bounds exclusive. The table is hand-authored and
/// trusted; a constraint expression that fails to parse is a defect in
/// this file, not in caller input.
const RANGES: &[(&str, fn() -> Vec<Platform>)] = &[
    ("<=1.0", registry::go_1_0),
    (">=1.1, <1.3", registry::go_1_1),
    (">=1.3, <1.4", registry::go_1_3),
    (">=1.4, <1.5", registry::go_1_4),
    (">=1.5, <1.6", registry::go_1_5),
    (">=1.6, <1.7", registry::go_1_6),
    (">=1.7, <1.8", registry::go_1_7),
    (">=1.8, <1.9", registry::go_1_8),
    (">=1.9, <1.10", registry::go_1_9),
    (">=1.10, <1.11", registry::go_1_10),
    (">=1.11, <1.12", registry::go_1_11),
    (">=1.12, <1.13", registry::go_1_12),
];

/// Resolve a toolchain version string to the platforms it can build for.
///
/// Accepts the string `go version` reports (e.g. "go1.9.2"). Input without
/// the "go" prefix resolves to the newest release list silently; input
/// whose version number does not parse resolves to the newest list with a
/// logged warning.
pub fn supported_platforms(toolchain_version: &str) -> Vec<Platform> {
    let Some(number) = toolchain_version.strip_prefix(TOOLCHAIN_PREFIX) else {
        return registry::latest();
    };

    let current = match version::parse_relaxed(number) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("unable to parse toolchain version '{number}': {err}");
            return registry::latest();
        }
    };

    for (constraint, release) in RANGES {
        let req = VersionReq::parse(constraint)
            .unwrap_or_else(|err| panic!("malformed version constraint '{constraint}': {err}"));
        if req.matches(&current) {
            return release();
        }
    }

    // Newer than every known range.
    registry::latest()
}

/// The subset of [`supported_platforms`] built when the caller gives no
/// explicit OS/arch filter.
pub fn default_platforms(toolchain_version: &str) -> Vec<Platform> {
    supported_platforms(toolchain_version)
        .into_iter()
        .filter(|p| p.default)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(platforms: &[Platform], os: &str, arch: &str, default: bool) -> bool {
        platforms
            .iter()
            .any(|p| p.os == os && p.arch == arch && p.default == default)
    }

    #[test]
    fn resolves_to_the_release_range() {
        let platforms = supported_platforms("go1.9.2");
        assert_eq!(platforms, registry::go_1_9());
        assert!(contains(&platforms, "js", "wasm", true));
        assert!(contains(&platforms, "linux", "riscv64", true));
        assert!(!contains(&platforms, "aix", "ppc64", true));
    }

    #[test]
    fn newest_range_includes_aix() {
        let platforms = supported_platforms("go1.12.5");
        assert_eq!(platforms, registry::go_1_12());
        assert!(contains(&platforms, "aix", "ppc64", true));
    }

    #[test]
    fn range_bounds_are_inclusive_exclusive() {
        assert_eq!(supported_platforms("go1.1"), registry::go_1_1());
        assert_eq!(supported_platforms("go1.2.2"), registry::go_1_1());
        assert_eq!(supported_platforms("go1.3"), registry::go_1_3());
        assert_eq!(supported_platforms("go1.11.13"), registry::go_1_11());
    }

    #[test]
    fn versions_before_the_first_release_get_the_initial_list() {
        let platforms = supported_platforms("go0.9");
        assert_eq!(platforms, registry::go_1_0());
        assert_eq!(platforms.len(), 11);
        assert!(platforms.iter().all(|p| p.default));
    }

    #[test]
    fn two_component_versions_resolve() {
        assert_eq!(supported_platforms("go1.10"), registry::go_1_10());
    }

    #[test]
    fn unexpected_input_falls_back_to_latest() {
        assert_eq!(supported_platforms("not-a-version"), registry::latest());
        assert_eq!(supported_platforms(""), registry::latest());
        assert_eq!(supported_platforms("gobbledygook"), registry::latest());
        // Parseable but newer than every known range.
        assert_eq!(supported_platforms("go99.99.99"), registry::latest());
        assert_eq!(
            supported_platforms("not-a-version"),
            supported_platforms("go99.99.99")
        );
    }

    #[test]
    fn default_platforms_drops_non_default_entries() {
        let defaults = default_platforms("go1.3.1");
        assert_eq!(defaults.len(), 15);
        assert!(defaults.iter().all(|p| p.default));
        assert!(!defaults.iter().any(|p| p.os == "plan9"));
        assert!(!defaults.iter().any(|p| p.os == "solaris"));
    }

    #[test]
    fn default_platforms_falls_back_like_the_resolver() {
        let defaults = default_platforms("not-a-version");
        let latest: Vec<Platform> = registry::latest()
            .into_iter()
            .filter(|p| p.default)
            .collect();
        assert_eq!(defaults, latest);
    }
}
