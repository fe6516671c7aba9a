// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `kw-plan write` command: manual override of the handoff record.

use anyhow::Context;
use result_sink::{PlanRecord, ResultSink};
use std::path::PathBuf;

pub fn execute(k: i32, w: i32, shared_path: PathBuf) -> anyhow::Result<()> {
    let record = PlanRecord::new(k, w);
    ResultSink::new(shared_path.clone())
        .write(record)
        .with_context(|| format!("writing '{}'", shared_path.display()))?;
    println!("Successfully wrote {record} to {}", shared_path.display());
    Ok(())
}
