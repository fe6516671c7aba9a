// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the pipeline simulator and the bandit search.

use cost_profile::{CostProfile, MemoryLimit, ProfileDocument};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use window_planner::{ActionSpace, NoProgress, PipelineSimulator, SearchStrategy, Ucb1Search};

/// A 32-layer profile shaped like a 7B model streamed from flash.
fn synthetic_profile(limit_mb: f64) -> CostProfile {
    let n = 32;
    CostProfile::new(
        ProfileDocument {
            io_speed: 1200.0,
            layer_sizes: vec![202.0; n],
            t_compute: (0..n).map(|i| 45.0 + (i % 4) as f64).collect(),
            t_release: vec![3.0; n],
        },
        MemoryLimit::from_mb(limit_mb),
    )
    .unwrap()
}

fn bench_simulator(c: &mut Criterion) {
    let profile = synthetic_profile(4096.0);
    let space = ActionSpace::build(&profile);
    let sim = PipelineSimulator::for_space(&profile, &space);
    let half = space.layer_max() as i64 / 2;

    c.bench_function("simulator_evaluate_32_layers", |b| {
        b.iter(|| sim.evaluate(black_box(half), black_box(half)))
    });
}

fn bench_ucb1_search(c: &mut Criterion) {
    let profile = synthetic_profile(4096.0);
    let space = ActionSpace::build(&profile);
    let sim = PipelineSimulator::for_space(&profile, &space);
    let search = Ucb1Search::default().with_progress_interval(0);

    c.bench_function("ucb1_500_episodes", |b| {
        b.iter(|| search.search(black_box(&space), &sim, &mut NoProgress))
    });
}

criterion_group!(benches, bench_simulator, bench_ucb1_search);
criterion_main!(benches);
