// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Planner configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! profile_path = "./model_offline_config/model_config.json"
//! result_path = "/tmp/shared_offline_planning.bin"
//! memory_limit = "2G"
//! strategy = "ucb1"
//! episodes = 500
//! exploration = 1.0
//! progress_interval = 50
//! ```

use cost_profile::log_parser::DEFAULT_OUTPUT_PATH;
use cost_profile::MemoryLimit;
use result_sink::DEFAULT_SHARED_PATH;
use std::path::{Path, PathBuf};
use window_planner::strategy::ucb::{
    DEFAULT_EPISODES, DEFAULT_EXPLORATION, DEFAULT_PROGRESS_INTERVAL,
};
use window_planner::{ExhaustiveSearch, PlannerError, SearchStrategy, Ucb1Search};

/// Configuration for one planning run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlannerConfig {
    /// Path to the cost profile JSON.
    #[serde(default = "default_profile_path")]
    pub profile_path: PathBuf,
    /// Path of the shared handoff file.
    #[serde(default = "default_result_path")]
    pub result_path: PathBuf,
    /// Memory limit (human-readable, e.g. `"25"`, `"512M"`, `"2G"`).
    #[serde(default)]
    pub memory_limit: Option<String>,
    /// Search strategy name: `"ucb1"` or `"exhaustive"`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Bandit episode budget.
    #[serde(default = "default_episodes")]
    pub episodes: usize,
    /// UCB1 exploration constant.
    #[serde(default = "default_exploration")]
    pub exploration: f64,
    /// Episodes between progress reports (0 disables them).
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

fn default_profile_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_result_path() -> PathBuf {
    PathBuf::from(DEFAULT_SHARED_PATH)
}

fn default_strategy() -> String {
    "ucb1".to_string()
}

fn default_episodes() -> usize {
    DEFAULT_EPISODES
}

fn default_exploration() -> f64 {
    DEFAULT_EXPLORATION
}

fn default_progress_interval() -> usize {
    DEFAULT_PROGRESS_INTERVAL
}

impl PlannerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::RuntimeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::RuntimeError::ConfigError(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::RuntimeError> {
        toml::from_str(toml_str).map_err(|e| {
            super::RuntimeError::ConfigError(format!("TOML parse error: {e}"))
        })
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::RuntimeError> {
        toml::to_string_pretty(self).map_err(|e| {
            super::RuntimeError::ConfigError(format!("TOML serialise error: {e}"))
        })
    }

    /// Parses the memory limit string into a [`MemoryLimit`].
    pub fn parse_limit(&self) -> Result<MemoryLimit, super::RuntimeError> {
        let raw = self.memory_limit.as_deref().ok_or_else(|| {
            super::RuntimeError::ConfigError("memory limit is not set".into())
        })?;
        Ok(MemoryLimit::parse(raw)?)
    }

    /// Creates the search strategy specified by this config.
    pub fn create_strategy(&self) -> Result<Box<dyn SearchStrategy>, super::RuntimeError> {
        match self.strategy.to_lowercase().as_str() {
            "ucb1" | "ucb" | "bandit" => Ok(Box::new(
                Ucb1Search::new(self.episodes, self.exploration)?
                    .with_progress_interval(self.progress_interval),
            )),
            "exhaustive" => Ok(Box::new(
                ExhaustiveSearch::new().with_progress_interval(self.progress_interval),
            )),
            other => Err(PlannerError::UnknownStrategy(other.to_string()).into()),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            profile_path: default_profile_path(),
            result_path: default_result_path(),
            memory_limit: None,
            strategy: default_strategy(),
            episodes: default_episodes(),
            exploration: default_exploration(),
            progress_interval: default_progress_interval(),
        }
    }
}
