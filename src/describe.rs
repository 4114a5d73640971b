//! Version resolution from `git describe`.
//!
//! Runs the describe query as a subprocess with a bounded timeout, parses
//! the nearest-tag output into a `MAJOR.MINOR[.MICRO[.devDEV]]` string, and
//! falls back to a hardcoded default on any failure. Total by contract:
//! every error is recovered here, with a diagnostic at each recovery.

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use std::thread;
use std::time::{Duration, Instant};

use regex::Regex;

use crate::errors::VersionError;

/// Returned whenever the describe query is unavailable or unparseable.
pub const DESCRIBE_FALLBACK: &str = "0.0.0.dev0";

const GIT: &str = "git";
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Tag grammar: optional non-digit prefix (e.g. a leading `v`), then
/// `MAJOR.MINOR`, optionally `.MICRO`, optionally `-DEV` (commit distance).
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\D*(?P<major>\d+)\.(?P<minor>\d+)(?:\.(?P<micro>\d+)(?:-(?P<dev>\d+))?)?")
        .expect("tag regex is valid")
});

/// Resolve a version from the nearest git tag.
///
/// Never fails: a missing tool, a hung subprocess, and malformed output all
/// collapse into [`DESCRIBE_FALLBACK`].
pub fn resolve(timeout: Duration) -> String {
    let line = match describe_first_line(GIT, timeout) {
        Ok(line) => line,
        Err(e) => {
            tracing::debug!("{e}; using {DESCRIBE_FALLBACK}");
            return DESCRIBE_FALLBACK.to_string();
        }
    };

    match parse_tag_line(&line) {
        Some(version) => version,
        None => {
            let e = VersionError::MalformedTag(line);
            tracing::debug!("{e}; using {DESCRIBE_FALLBACK}");
            DESCRIBE_FALLBACK.to_string()
        }
    }
}

/// Run `<program> describe` and return the first line of its stdout.
///
/// Stderr is discarded entirely. The wait is bounded: past the deadline the
/// child is killed, reaped, and reported as unavailable.
fn describe_first_line(program: &str, timeout: Duration) -> Result<String, VersionError> {
    let mut child = Command::new(program)
        .arg("describe")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            VersionError::ExternalToolUnavailable(format!("failed to spawn {program}: {e}"))
        })?;

    // An overflowing deadline means the wait is effectively unbounded
    let deadline = Instant::now().checked_add(timeout);
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(VersionError::ExternalToolUnavailable(format!(
                        "{program} describe did not finish within {timeout:?}"
                    )));
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(VersionError::ExternalToolUnavailable(format!(
                    "failed to wait on {program}: {e}"
                )));
            }
        }
    }

    let mut stdout = String::new();
    if let Some(mut out) = child.stdout.take() {
        out.read_to_string(&mut stdout).map_err(|e| {
            VersionError::ExternalToolUnavailable(format!(
                "failed to read {program} describe output: {e}"
            ))
        })?;
    }

    Ok(stdout.lines().next().unwrap_or_default().to_string())
}

/// Parse one line of describe output against the tag grammar.
///
/// A named group can be absent even when the overall match succeeds, so
/// each optional segment is appended only when its specific capture is
/// present.
fn parse_tag_line(line: &str) -> Option<String> {
    let caps = TAG_RE.captures(line.trim())?;
    let mut version = format!("{}.{}", &caps["major"], &caps["minor"]);
    if let Some(micro) = caps.name("micro") {
        version.push('.');
        version.push_str(micro.as_str());
        if let Some(dev) = caps.name("dev") {
            version.push_str(".dev");
            version.push_str(dev.as_str());
        }
    }
    Some(version)
}
