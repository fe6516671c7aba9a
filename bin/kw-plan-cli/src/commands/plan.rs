// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `kw-plan plan` command: search for the best (k, w) and hand it off.
//!
//! Demonstrates the full type-state pipeline:
//! ```text
//! PlanningSession<Idle> → load_profile → <Profiled> → search → <Planned> → commit
//! ```

use anyhow::Context;
use planner_runtime::{PlannerConfig, PlanningSession};
use window_planner::EpisodeProgress;

pub fn execute(config: PlannerConfig, json: bool) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            kw-plan · Offline (k, w) Planner          ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    println!("  Config:");
    println!("   Profile:  {}", config.profile_path.display());
    println!("   Artifact: {}", config.result_path.display());
    println!("   Limit:    {}", config.memory_limit.as_deref().unwrap_or("<unset>"));
    println!("   Strategy: {} ({} episodes, c={})", config.strategy, config.episodes, config.exploration);
    println!();

    // Step 1: Idle → Profiled (load profile + build action space).
    println!("  [1/3] Loading cost profile...");
    let profiled = PlanningSession::new(config.clone())
        .load_profile()
        .with_context(|| format!("loading profile '{}'", config.profile_path.display()))?;
    println!("        {}", profiled.profile().summary());
    println!(
        "        layer_max={}, {} candidate actions",
        profiled.space().layer_max(),
        profiled.space().len()
    );
    println!();

    // Step 2: Profiled → Planned (run the search).
    println!("  [2/3] Searching...");
    let mut report_progress = |p: &EpisodeProgress| println!("        {}", progress_line(p));
    let planned = profiled.search(&mut report_progress)?;
    println!("        {}", planned.outcome().summary());
    println!();

    // Step 3: Planned → PlanReport (write the handoff record).
    println!("  [3/3] Writing result...");
    let report = planned
        .commit()
        .with_context(|| format!("committing plan to '{}'", config.result_path.display()))?;
    println!("        Wrote {} to {}", report.action, report.result_path.display());
    println!();

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.summary_line());
        println!("{}", report.metrics.summary());
    }

    Ok(())
}

/// One progress line: the pulled action and its reward, then the incumbent.
fn progress_line(p: &EpisodeProgress) -> String {
    let pulled = format!(
        "Episode {:>5}: action {}, reward {:.2}",
        p.episode, p.action, p.reward
    );
    match p.best {
        Some(best) => format!(
            "{pulled}, best action {}, best reward {:.2}",
            best.action, best.reward
        ),
        None => format!("{pulled}, no incumbent yet"),
    }
}
