//! Go toolchain version to supported-platform resolution.
//!
//! The Go toolchain grows its set of cross-compilation targets with each
//! minor release. This crate records those per-release platform lists and
//! resolves a toolchain's self-reported version string (e.g. "go1.9.2") to
//! the list that release supports, so a build tool can enumerate valid
//! targets without invoking the compiler.
//!
//! Resolution never fails: input that does not parse or does not match any
//! known release range resolves to the newest list.

pub mod error;
pub mod registry;
pub mod resolution;
pub mod version;

// Re-exports for convenience.
pub use error::VersionError;
pub use gocross_platform::Platform;
pub use resolution::{default_platforms, supported_platforms};
pub use version::parse_relaxed;
