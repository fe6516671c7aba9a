// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Best-effort extraction of a cost profile from the runtime's execution log.
//!
//! The instrumented runtime writes lines such as:
//!
//! ```text
//! prefetch index:blk.0, prefetch time:412, layer size:50 MB, IO Speed:121 MB/s
//! compute index:blk.0 compute time:10 ms
//! release index:blk.0, release time:3 ms
//! ```
//!
//! Every pattern is tried on every line, so one line may contribute both a
//! layer size and an I/O speed sample. Lines that match nothing are skipped
//! silently: the log format is owned by another process and partial or
//! malformed lines are expected.

use crate::{ProfileDocument, ProfileError};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

/// Default location the runtime writes its log to.
pub const DEFAULT_LOG_PATH: &str = "/tmp/offline_planning_log";

/// Default location of the generated cost profile.
pub const DEFAULT_OUTPUT_PATH: &str = "./model_offline_config/model_config.json";

/// Raw values extracted from a log, in the log's integer units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Mean of the I/O speed samples (MB/s), rounded half-to-even.
    pub io_speed: u64,
    /// Layer sizes (MB) in log order.
    pub layer_sizes: Vec<u64>,
    /// Compute times (ms), sorted by block index.
    pub t_compute: Vec<u64>,
    /// Release times (ms), sorted by block index.
    pub t_release: Vec<u64>,
}

/// Compiled log patterns.
#[derive(Debug, Clone)]
pub struct LogParser {
    io_speed: Regex,
    layer_size: Regex,
    compute: Regex,
    release: Regex,
}

impl LogParser {
    pub fn new() -> Result<Self, ProfileError> {
        Ok(Self {
            io_speed: Regex::new(r"IO Speed:(\d+)\s*MB/s")?,
            layer_size: Regex::new(r"layer size:(\d+)\s*MB")?,
            compute: Regex::new(r"compute index:blk\.(\d+)\s*compute time:(\d+)\s*ms")?,
            release: Regex::new(r"release index:blk\.(\d+),\s*release time:(\d+)\s*ms")?,
        })
    }

    /// Reads and parses the log file at `path`.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedLog, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        let parsed = self.parse_str(&content);
        tracing::info!(
            "parsed '{}': {} layer sizes, {} compute, {} release entries, io speed {} MB/s",
            path.display(),
            parsed.layer_sizes.len(),
            parsed.t_compute.len(),
            parsed.t_release.len(),
            parsed.io_speed,
        );
        Ok(parsed)
    }

    /// Parses log text. Never fails; unrecognised lines are ignored.
    pub fn parse_str(&self, text: &str) -> ParsedLog {
        let mut io_speeds: Vec<u64> = Vec::new();
        let mut layer_sizes = Vec::new();
        let mut compute_times = BTreeMap::new();
        let mut release_times = BTreeMap::new();

        for line in text.lines() {
            if let Some(v) = capture_one(&self.io_speed, line) {
                io_speeds.push(v);
            }
            if let Some(v) = capture_one(&self.layer_size, line) {
                layer_sizes.push(v);
            }
            if let Some((idx, ms)) = capture_pair(&self.compute, line) {
                compute_times.insert(idx, ms);
            }
            if let Some((idx, ms)) = capture_pair(&self.release, line) {
                release_times.insert(idx, ms);
            }
        }

        let io_speed = if io_speeds.is_empty() {
            0
        } else {
            let mean = io_speeds.iter().map(|&v| v as f64).sum::<f64>() / io_speeds.len() as f64;
            mean.round_ties_even() as u64
        };

        ParsedLog {
            io_speed,
            layer_sizes,
            t_compute: compute_times.into_values().collect(),
            t_release: release_times.into_values().collect(),
        }
    }
}

// Digit runs that overflow `u64` are skipped like any other unusable line.
fn parse_number(digits: &str, line: &str) -> Option<u64> {
    match digits.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!("skipping '{line}': value {digits} out of range ({e})");
            None
        }
    }
}

fn capture_one(re: &Regex, line: &str) -> Option<u64> {
    parse_number(re.captures(line)?.get(1)?.as_str(), line)
}

fn capture_pair(re: &Regex, line: &str) -> Option<(u64, u64)> {
    let caps = re.captures(line)?;
    let idx = parse_number(caps.get(1)?.as_str(), line)?;
    let value = parse_number(caps.get(2)?.as_str(), line)?;
    Some((idx, value))
}

impl ParsedLog {
    /// Converts to the floating-point document the planner loads.
    pub fn to_document(&self) -> ProfileDocument {
        let to_f64 = |v: &[u64]| v.iter().map(|&x| x as f64).collect::<Vec<_>>();
        ProfileDocument {
            io_speed: self.io_speed as f64,
            layer_sizes: to_f64(&self.layer_sizes),
            t_compute: to_f64(&self.t_compute),
            t_release: to_f64(&self.t_release),
        }
    }

    /// Renders the profile JSON with a fixed key order and one array per line.
    pub fn to_json(&self) -> String {
        format!(
            "{{\n  \"io_speed\": {},\n  \"layer_sizes\": {},\n  \"t_compute\": {},\n  \"t_release\": {}\n}}\n",
            self.io_speed,
            json_array(&self.layer_sizes),
            json_array(&self.t_compute),
            json_array(&self.t_release),
        )
    }

    /// Writes [`Self::to_json`] to `path`, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json())?;
        tracing::info!("wrote cost profile to '{}'", path.display());
        Ok(())
    }
}

fn json_array(values: &[u64]) -> String {
    let items: Vec<String> = values.iter().map(u64::to_string).collect();
    format!("[{}]", items.join(", "))
}
