use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while resolving or stamping a version.
///
/// Only `WriteFailure` is fatal; the other variants are recovered by the
/// next stage of the fallback chain.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The persisted artifact is absent, unreadable, or does not hold a
    /// usable version value.
    #[error("version artifact unavailable: {0}")]
    MissingArtifact(String),

    /// `git describe` produced output that does not match the tag grammar.
    #[error("describe output {0:?} does not match the tag grammar")]
    MalformedTag(String),

    /// The version-control tool could not be spawned, waited on, or did
    /// not finish within the configured timeout.
    #[error("version control tool unavailable: {0}")]
    ExternalToolUnavailable(String),

    /// The artifact could not be written. The one fatal condition:
    /// producing the artifact is the stamp step's entire purpose.
    #[error("failed to write version artifact {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}
