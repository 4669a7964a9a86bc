use super::tokenizer::PhraseOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
const APP_NAME: &str = "cmdprefix";
#[cfg(feature = "cli")]
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How phrases are cleaned up before matching
    #[serde(default)]
    pub phrase: PhraseOptions,

    /// Process batch input lines in parallel
    #[serde(default = "default_parallel_batch")]
    pub parallel_batch: bool,

    /// Maximum worker threads for batch scans
    /// If 0, uses the number of CPU cores
    #[serde(default = "default_batch_threads")]
    pub batch_threads: usize,
}

fn default_parallel_batch() -> bool {
    true
}

fn default_batch_threads() -> usize {
    0 // 0 means use CPU count
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phrase: PhraseOptions::default(),
            parallel_batch: default_parallel_batch(),
            batch_threads: default_batch_threads(),
        }
    }
}

impl AppConfig {
    /// Load config from an explicit path, or return default if the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Get the effective batch thread count (resolves 0 to CPU count)
    pub fn effective_batch_threads(&self) -> usize {
        if self.batch_threads == 0 {
            num_cpus()
        } else {
            self.batch_threads
        }
    }
}

/// Get the number of CPUs available
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Get the path to the config file
#[cfg(feature = "cli")]
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}

/// Resolve `--config`, falling back to the user config path
#[cfg(feature = "cli")]
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_path(),
    }
}

/// Resolve `--config` when the CLI feature (and so `dirs`) is unavailable
#[cfg(not(feature = "cli"))]
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .context("No config path given")
}
