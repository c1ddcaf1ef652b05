//! OS/architecture pair model.
//!
//! Canonical identifiers follow the Go toolchain's naming ("linux",
//! "amd64"). The uname lookups translate them to the labels a `uname -s`
//! or `uname -m` invocation would report on that platform.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An OS/architecture combination that can be built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Canonical operating-system identifier (e.g. "linux", "darwin").
    pub os: String,
    /// Canonical CPU architecture identifier (e.g. "amd64", "arm64").
    pub arch: String,
    /// Whether this platform belongs in the default build set when no
    /// explicit OS/arch filter is given. Niche targets and targets with
    /// incomplete toolchain support are left out of the defaults.
    pub default: bool,
}

impl Platform {
    /// Construct a platform from its canonical identifiers.
    pub fn new(os: impl Into<String>, arch: impl Into<String>, default: bool) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            default,
        }
    }

    /// The label `uname -s` reports on this OS, if it has one.
    ///
    /// Identifiers with no uname equivalent ("android", "nacl", "js")
    /// yield `None`.
    pub fn uname_os(&self) -> Option<&'static str> {
        match self.os.as_str() {
            "darwin" => Some("Darwin"),
            "dragonfly" => Some("DragonFly"),
            "freebsd" => Some("FreeBSD"),
            "linux" => Some("Linux"),
            "netbsd" => Some("NetBSD"),
            "openbsd" => Some("OpenBSD"),
            "plan9" => Some("Plan9"),
            "solaris" => Some("SunOS"),
            "windows" => Some("Windows"),
            _ => None,
        }
    }

    /// The label `uname -m` reports for this architecture, if it has one.
    ///
    /// Several toolchain-recognized architectures (the mips family, s390x,
    /// sparc, riscv64, wasm) have no stable uname mapping and yield `None`.
    pub fn uname_arch(&self) -> Option<&'static str> {
        match self.arch.as_str() {
            "386" => Some("i386"),
            "amd64" => Some("x86_64"),
            "arm" => Some("arm"),
            "arm64" => Some("aarch64"),
            "ppc64" => Some("ppc64"),
            "ppc64le" => Some("ppc64le"),
            _ => None,
        }
    }
}

/// Renders as `"<os>/<arch>"`, the stable identifier used in target
/// filters and build output paths.
impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
