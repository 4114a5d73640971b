//! The ordered fallback chain behind every resolved version.
//!
//! Strict order, first success wins, no backtracking:
//! persisted artifact → live `git describe` → hardcoded default.

use crate::config::Config;
use crate::{artifact, describe};

/// Last-resort safety net, used only if an upstream stage ever yields an
/// empty string. Deliberately distinct from [`describe::DESCRIBE_FALLBACK`]:
/// this literal carries no separator before the dev suffix.
pub const FALLBACK_VERSION: &str = "0.0.0dev0";

/// Resolve the authoritative version string. Total: never fails, always
/// returns a non-empty string.
///
/// The artifact value, when present, is trusted verbatim without grammar
/// validation; a stale or hand-supplied artifact wins over a live describe.
pub fn resolve(cfg: &Config) -> String {
    let version = match artifact::read(&cfg.artifact_path) {
        Ok(version) => {
            tracing::debug!(
                "resolved version {version:?} from {}",
                cfg.artifact_path.display()
            );
            version
        }
        Err(e) => {
            tracing::debug!("{e}; falling back to version control");
            describe::resolve(cfg.describe_timeout())
        }
    };

    if version.is_empty() {
        tracing::warn!("resolution produced an empty version; using {FALLBACK_VERSION}");
        FALLBACK_VERSION.to_string()
    } else {
        version
    }
}
