// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Exhaustive search: evaluate every action exactly once.
//!
//! The simulator is cheap and the action space is quadratic in
//! `layer_max`, so a full sweep is affordable for small profiles. It
//! applies the same incumbent rule as the bandit and serves as the
//! reference the bandit is checked against.

use crate::strategy::SearchStrategy;
use crate::{
    ActionSpace, EpisodeProgress, IncumbentTracker, RewardOracle, SearchObserver, SearchOutcome,
};

/// Evaluates every action once, in enumeration order.
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    progress_interval: usize,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self {
            progress_interval: super::ucb::DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many evaluations pass between progress reports (0 disables).
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }
}

impl SearchStrategy for ExhaustiveSearch {
    fn name(&self) -> &str {
        "exhaustive"
    }

    fn search(
        &self,
        space: &ActionSpace,
        oracle: &dyn RewardOracle,
        observer: &mut dyn SearchObserver,
    ) -> SearchOutcome {
        let mut tracker = IncumbentTracker::new();

        for (i, &action) in space.iter().enumerate() {
            let reward = oracle.reward(action);
            tracker.offer(action, reward);

            let episode = i + 1;
            if self.progress_interval > 0 && episode % self.progress_interval == 0 {
                observer.on_progress(&EpisodeProgress {
                    episode,
                    action,
                    reward,
                    best: tracker.best(),
                });
            }
        }

        let outcome = SearchOutcome {
            strategy_name: self.name().to_string(),
            layer_max: space.layer_max(),
            episodes: space.len(),
            visits: space.iter().map(|&a| (a, 1)).collect(),
            best: tracker.best(),
        };
        tracing::info!("{}", outcome.summary());
        outcome
    }
}
