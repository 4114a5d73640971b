use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "stampver.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Project name printed in the stamp confirmation banner.
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Well-known path of the generated version artifact.
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Upper bound on the `git describe` subprocess, in seconds.
    #[serde(default = "default_describe_timeout_secs")]
    pub describe_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_name: default_project_name(),
            artifact_path: default_artifact_path(),
            describe_timeout_secs: default_describe_timeout_secs(),
        }
    }
}

fn default_project_name() -> String {
    "stampver".to_string()
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("version.toml")
}

fn default_describe_timeout_secs() -> u64 {
    5
}

impl Config {
    pub fn describe_timeout(&self) -> Duration {
        Duration::from_secs(self.describe_timeout_secs)
    }
}

/// Load config from ./stampver.toml (or return defaults if it doesn't exist)
pub fn load() -> Result<Config> {
    load_from(Path::new(CONFIG_FILE))
}

fn load_from(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}
