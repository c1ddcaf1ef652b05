//! Target platform model for Go cross-compilation.
//!
//! A platform is an OS/architecture pair the Go toolchain can produce
//! binaries for, plus a flag marking whether the pair belongs in the
//! default build set when the caller gives no explicit OS/arch filter.

pub mod platform;

pub use platform::Platform;
