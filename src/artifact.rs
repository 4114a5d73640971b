//! The persisted version artifact.
//!
//! A machine-written TOML file holding exactly one `version` binding, read
//! back on later builds where version-control metadata may be missing
//! (e.g. building from a release tarball). The stamp step is the sole
//! writer; resolution only reads.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::VersionError;

/// First line of every generated artifact.
pub const HEADER: &str = "# DO NOT EDIT THIS FILE BY HAND -- YOUR CHANGES WILL BE OVERWRITTEN.";

#[derive(Debug, Deserialize)]
struct Artifact {
    version: String,
}

/// Read the stored version back out of an artifact.
///
/// The stored value is trusted verbatim — no grammar validation — but an
/// empty value is rejected so a version string is always non-empty.
pub fn read(path: &Path) -> Result<String, VersionError> {
    let content = fs::read_to_string(path)
        .map_err(|e| VersionError::MissingArtifact(format!("{}: {e}", path.display())))?;
    let artifact: Artifact = toml::from_str(&content)
        .map_err(|e| VersionError::MissingArtifact(format!("{}: {e}", path.display())))?;
    if artifact.version.is_empty() {
        return Err(VersionError::MissingArtifact(format!(
            "{}: empty version value",
            path.display()
        )));
    }
    Ok(artifact.version)
}

/// Overwrite the artifact in full with the header and a single
/// `version = "<v>"` binding. Truncate-then-write; no append mode.
pub fn write(path: &Path, version: &str) -> Result<(), VersionError> {
    let content = format!("{HEADER}\nversion = \"{version}\"\n");
    fs::write(path, content).map_err(|source| VersionError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
