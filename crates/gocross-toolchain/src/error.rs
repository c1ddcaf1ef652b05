//! Version parsing error types.

/// Errors that can occur while parsing a toolchain version number.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The version string was empty.
    #[error("empty version string")]
    Empty,

    /// The version string did not parse as a (relaxed) semantic version.
    #[error("invalid version '{raw}': {source}")]
    Invalid {
        /// The rejected input.
        raw: String,
        /// The underlying semver parse error.
        #[source]
        source: semver::Error,
    },
}

/// Result type alias for version operations.
pub type Result<T> = std::result::Result<T, VersionError>;
