// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property-based tests for the pipeline simulator and the searches.

use cost_profile::{CostProfile, MemoryLimit, ProfileDocument};
use proptest::prelude::*;
use window_planner::{
    resident_capacity, Action, ActionSpace, ExhaustiveSearch, NoProgress, PipelineSimulator,
    SearchStrategy, Ucb1Search, INFEASIBLE_PENALTY,
};

// Profile with every layer resident-capable, uniform release time.
prop_compose! {
    fn arb_uniform_release_profile()(
        n in 1..=10usize,
    )(
        sizes in prop::collection::vec(1.0..200.0f64, n),
        compute in prop::collection::vec(0.0..50.0f64, n),
        release in 0.0..10.0f64,
        io_speed in 10.0..2000.0f64,
    ) -> CostProfile {
        let n = sizes.len();
        let limit = sizes.iter().sum::<f64>() + 1.0;
        CostProfile::new(
            ProfileDocument {
                io_speed,
                layer_sizes: sizes,
                t_compute: compute,
                t_release: vec![release; n],
            },
            MemoryLimit::from_mb(limit),
        )
        .unwrap()
    }
}

// Arbitrary profile with a limit that cuts somewhere inside the layers.
prop_compose! {
    fn arb_profile()(
        n in 1..=10usize,
    )(
        sizes in prop::collection::vec(1.0..200.0f64, n),
        compute in prop::collection::vec(0.0..50.0f64, n),
        release in prop::collection::vec(0.0..10.0f64, n),
        io_speed in 10.0..2000.0f64,
        limit in 1.0..1500.0f64,
    ) -> CostProfile {
        CostProfile::new(
            ProfileDocument {
                io_speed,
                layer_sizes: sizes,
                t_compute: compute,
                t_release: release,
            },
            MemoryLimit::from_mb(limit),
        )
        .unwrap()
    }
}

proptest! {
    #[test]
    fn prop_evaluate_is_deterministic(profile in arb_profile()) {
        let space = ActionSpace::build(&profile);
        let sim = PipelineSimulator::for_space(&profile, &space);
        for a in &space {
            let first = sim.evaluate(a.k as i64, a.w as i64);
            let second = sim.evaluate(a.k as i64, a.w as i64);
            prop_assert_eq!(first.to_bits(), second.to_bits());
            prop_assert!(first <= 0.0);
        }
    }

    #[test]
    fn prop_infeasible_gets_penalty(profile in arb_profile(), k in -3i64..15, w in -3i64..15) {
        let space = ActionSpace::build(&profile);
        let sim = PipelineSimulator::for_space(&profile, &space);
        let feasible = k >= 0 && w >= 1 && k + w <= space.layer_max() as i64;
        if !feasible {
            prop_assert_eq!(sim.evaluate(k, w), INFEASIBLE_PENALTY);
        } else {
            prop_assert!(space.contains(Action::new(k as usize, w as usize)));
        }
    }

    #[test]
    fn prop_wider_window_never_slower(profile in arb_uniform_release_profile()) {
        let layer_max = profile.total_layers();
        let sim = PipelineSimulator::new(&profile, layer_max);
        for k in 0..layer_max {
            for w in 1..(layer_max - k) {
                let narrow = sim.completion_time(Action::new(k, w)).unwrap();
                let wide = sim.completion_time(Action::new(k, w + 1)).unwrap();
                prop_assert!(
                    wide <= narrow,
                    "k={} w={}: {} ms -> {} ms with w+1", k, w, narrow, wide
                );
            }
        }
    }

    #[test]
    fn prop_layer_max_is_longest_fitting_prefix(profile in arb_profile()) {
        let sizes = profile.layer_sizes();
        let limit = profile.memory_limit().as_mb();
        let m = resident_capacity(sizes, limit);
        let prefix: f64 = sizes[..m].iter().sum();
        prop_assert!(prefix <= limit);
        if m < sizes.len() {
            prop_assert!(prefix + sizes[m] > limit);
        }
        prop_assert_eq!(ActionSpace::build(&profile).layer_max(), m);
    }

    #[test]
    fn prop_bandit_agrees_with_exhaustive(profile in arb_profile()) {
        // With at most 55 arms every arm is pulled within the 500 episodes,
        // so the bandit's incumbent must equal the full sweep's.
        let space = ActionSpace::build(&profile);
        let sim = PipelineSimulator::for_space(&profile, &space);
        let bandit = Ucb1Search::default().search(&space, &sim, &mut NoProgress);
        let sweep = ExhaustiveSearch::new().search(&space, &sim, &mut NoProgress);
        prop_assert_eq!(bandit.best, sweep.best);
    }
}
