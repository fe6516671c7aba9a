// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `kw-plan convert` command: scrape an execution log into a cost profile.

use anyhow::Context;
use cost_profile::LogParser;
use std::path::PathBuf;

pub fn execute(log_path: PathBuf, output_path: PathBuf) -> anyhow::Result<()> {
    let parser = LogParser::new()?;
    let parsed = parser
        .parse_file(&log_path)
        .with_context(|| format!("reading log '{}'", log_path.display()))?;

    if parsed.io_speed == 0 {
        tracing::warn!("no IO Speed samples in '{}'", log_path.display());
    }
    if parsed.t_compute.len() != parsed.layer_sizes.len()
        || parsed.t_release.len() != parsed.layer_sizes.len()
    {
        tracing::warn!(
            "inconsistent layer counts: {} sizes, {} compute, {} release",
            parsed.layer_sizes.len(),
            parsed.t_compute.len(),
            parsed.t_release.len(),
        );
    }

    parsed
        .write_json(&output_path)
        .with_context(|| format!("writing profile '{}'", output_path.display()))?;

    println!("Cost profile written to {}", output_path.display());
    println!(
        "  io_speed={} MB/s, {} layer sizes, {} compute times, {} release times",
        parsed.io_speed,
        parsed.layer_sizes.len(),
        parsed.t_compute.len(),
        parsed.t_release.len(),
    );
    Ok(())
}
