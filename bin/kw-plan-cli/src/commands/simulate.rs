// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `kw-plan simulate` command: inspect the pipeline model.
//!
//! With `-k`/`-w`, prints the per-layer event timeline of that action.
//! Without, prints the predicted latency of every candidate action.

use anyhow::Context;
use cost_profile::CostProfile;
use planner_runtime::PlannerConfig;
use window_planner::{Action, ActionSpace, IncumbentTracker, PipelineSimulator, RewardOracle};

pub fn execute(config: PlannerConfig, action: Option<Action>) -> anyhow::Result<()> {
    let limit = config.parse_limit()?;
    let profile = CostProfile::load(&config.profile_path, limit)
        .with_context(|| format!("loading profile '{}'", config.profile_path.display()))?;
    let space = ActionSpace::build(&profile);
    let sim = PipelineSimulator::for_space(&profile, &space);

    println!("  {}", profile.summary());
    println!("  Limit: {limit}, layer_max={}, {} actions", space.layer_max(), space.len());
    println!();

    match action {
        Some(action) => print_timeline(&profile, &sim, action),
        None => {
            print_table(&space, &sim);
            Ok(())
        }
    }
}

fn print_timeline(
    profile: &CostProfile,
    sim: &PipelineSimulator<'_>,
    action: Action,
) -> anyhow::Result<()> {
    let timeline = sim.timeline(action).with_context(|| {
        format!("{action} is infeasible (needs k + w <= {})", sim.layer_max())
    })?;

    println!("  Timeline for {action}:");
    println!("   resident compute done at {:.2} ms", timeline.start_time);
    println!("  ┌───────┬──────────────┬──────────────┐");
    println!("  │ layer │ load done ms │ compute ms   │");
    println!("  ├───────┼──────────────┼──────────────┤");
    let first = timeline.first_tail_layer(profile.total_layers());
    for (j, (load, compute)) in timeline
        .load_done
        .iter()
        .zip(&timeline.compute_done)
        .enumerate()
    {
        println!("  │ {:>5} │ {:>12.2} │ {:>12.2} │", first + j, load, compute);
    }
    println!("  └───────┴──────────────┴──────────────┘");
    println!();
    println!("  Predicted latency: {:.2} ms", timeline.completion_time());
    Ok(())
}

fn print_table(space: &ActionSpace, sim: &PipelineSimulator<'_>) {
    if space.is_empty() {
        println!("  No feasible action: not even one layer fits the limit.");
        return;
    }

    let mut best = IncumbentTracker::new();
    println!("  ┌──────┬──────┬──────────────┐");
    println!("  │  k   │  w   │ latency ms   │");
    println!("  ├──────┼──────┼──────────────┤");
    for &action in space {
        let reward = sim.reward(action);
        best.offer(action, reward);
        println!("  │ {:>4} │ {:>4} │ {:>12.2} │", action.k, action.w, -reward);
    }
    println!("  └──────┴──────┴──────────────┘");

    if let Some(b) = best.best() {
        println!();
        println!("  Best: {} at {:.2} ms", b.action, b.latency_ms());
    }
}
