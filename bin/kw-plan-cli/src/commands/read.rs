// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `kw-plan read` command: print the handoff record as the consumer sees it.

use anyhow::Context;
use result_sink::ResultSink;
use std::path::PathBuf;

pub fn execute(shared_path: PathBuf) -> anyhow::Result<()> {
    let record = ResultSink::new(shared_path.clone())
        .read()
        .with_context(|| format!("reading '{}'", shared_path.display()))?;
    println!("{record}");
    Ok(())
}
