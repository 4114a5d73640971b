//! The `version` build step: resolve, persist, report.

use anyhow::Result;

use crate::config::Config;
use crate::{artifact, resolver};

/// Resolve the version, overwrite the artifact, and print the confirmation
/// banner. Returns the resolved version for the caller.
///
/// Every resolution failure is recovered inside the chain; the only error
/// that propagates is a failed artifact write.
pub fn run(cfg: &Config) -> Result<String> {
    let version = resolver::resolve(cfg);
    artifact::write(&cfg.artifact_path, &version)?;
    println!("*** {} Version {} ***", cfg.project_name, version);
    Ok(version)
}
