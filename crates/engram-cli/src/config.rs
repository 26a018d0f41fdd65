//! Configuration management for the Engram CLI.

use anyhow::{Context, Result};
use engram::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "engram.toml";

/// Engram project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub recall: RecallConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_slots")]
    pub slots: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_tolerance_ratio")]
    pub tolerance_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_on")]
    pub on: char,
    #[serde(default = "default_off")]
    pub off: char,
}

// Default value functions
fn default_size() -> usize { 10 }
fn default_slots() -> usize { 3 }
fn default_tolerance_ratio() -> f64 { DEFAULT_TOLERANCE_RATIO }
fn default_on() -> char { '#' }
fn default_off() -> char { '.' }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            slots: default_slots(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            tolerance_ratio: default_tolerance_ratio(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            on: default_on(),
            off: default_off(),
        }
    }
}

impl Config {
    /// Load config from engram.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match std::env::current_dir().ok().and_then(|dir| find_config_file(&dir)) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Workbench settings for this config.
    pub fn workbench(&self) -> WorkbenchConfig {
        WorkbenchConfig {
            grid_size: self.grid.size,
            slot_count: self.grid.slots,
            match_policy: MatchPolicy {
                tolerance_ratio: self.matching.tolerance_ratio,
            },
            recall: self.recall,
        }
    }
}

/// Find engram.toml in `start` or its parent directories.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
