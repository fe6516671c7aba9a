// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod convert;
pub mod plan;
pub mod read;
pub mod simulate;
pub mod write;

use anyhow::Context;
use planner_runtime::PlannerConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` count picks the level.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the TOML config if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<PlannerConfig> {
    match path {
        Some(p) => PlannerConfig::from_file(p)
            .with_context(|| format!("loading config '{}'", p.display())),
        None => Ok(PlannerConfig::default()),
    }
}

/// Replaces `slot` when a command-line value was given.
pub fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_with() {
        let mut episodes = 500usize;
        override_with(&mut episodes, None);
        assert_eq!(episodes, 500);
        override_with(&mut episodes, Some(100));
        assert_eq!(episodes, 100);
    }

    #[test]
    fn test_load_config_default() {
        let c = load_config(None).unwrap();
        assert_eq!(c, PlannerConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config(Some(Path::new("/nonexistent/planner.toml"))).is_err());
    }
}
