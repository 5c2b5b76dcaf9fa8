use crate::types::ScopeId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Runtime configuration for opening archives.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
    pub tuning: StoreTuning,
}

impl Config {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            tuning: StoreTuning::default(),
        }
    }

    /// Configuration for a data directory, reading tuning from its
    /// `archive.toml` when present and falling back to defaults.
    /// Hosts persist tuning changes with [`StoreTuning::save`].
    pub fn load(base_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base_path = base_path.into();
        let tuning = StoreTuning::load(&StoreTuning::path(&base_path))?;

        Ok(Self { base_path, tuning })
    }

    /// Database file for a single-scope archive.
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("arca.redb")
    }

    /// Database file for the archive of the given scope.
    pub fn scope_db_path(&self, scope: &ScopeId) -> PathBuf {
        self.base_path.join(scope.as_str()).join("arca.redb")
    }
}

/// Store tuning knobs, persisted as archive.toml.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreTuning {
    /// Number of id draws between forced random cursor resets. Bounds
    /// how long a monotonic id run can grow before the allocator jumps
    /// elsewhere in the key space.
    pub random_draw_interval: u32,
}

impl Default for StoreTuning {
    fn default() -> Self {
        Self {
            random_draw_interval: default_random_draw_interval(),
        }
    }
}

fn default_random_draw_interval() -> u32 {
    4000
}

impl StoreTuning {
    /// Returns the tuning file path within the given data directory.
    pub fn path(base_path: &Path) -> PathBuf {
        base_path.join("archive.toml")
    }

    /// Loads tuning from a TOML file. Returns defaults if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let tuning = toml::from_str(&content)?;
        Ok(tuning)
    }

    /// Saves tuning to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates tuning values and returns a list of validation errors.
    /// Returns an empty vec if the tuning is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.random_draw_interval == 0 {
            errors.push("random_draw_interval must be at least 1".to_string());
        }

        errors
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests;
