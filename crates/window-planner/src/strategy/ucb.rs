// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! UCB1 multi-armed bandit search.
//!
//! Each action is an arm. In episode `t` every arm is scored
//!
//! ```text
//! score(a) = +∞                                   if a was never pulled
//!          = mean_reward(a) + c · √(ln t / n(a))  otherwise
//! ```
//!
//! and the highest-scoring arm is pulled. Ties go to the first arm in
//! enumeration order, so runs are reproducible. The episode budget is
//! fixed: there is no early stopping.

use crate::strategy::SearchStrategy;
use crate::{
    Action, ActionSpace, EpisodeProgress, IncumbentTracker, PlannerError, RewardOracle,
    SearchObserver, SearchOutcome,
};

/// Default episode budget.
pub const DEFAULT_EPISODES: usize = 500;

/// Default exploration constant `c`.
pub const DEFAULT_EXPLORATION: f64 = 1.0;

/// Default number of episodes between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// Per-arm visit counts and cumulative rewards, plus the incumbent.
///
/// Arms are indexed by position in the [`ActionSpace`] enumeration.
#[derive(Debug, Clone)]
pub struct BanditState {
    counts: Vec<u64>,
    rewards: Vec<f64>,
    incumbent: IncumbentTracker,
}

impl BanditState {
    /// Creates zeroed state for `num_arms` arms.
    pub fn new(num_arms: usize) -> Self {
        Self {
            counts: vec![0; num_arms],
            rewards: vec![0.0; num_arms],
            incumbent: IncumbentTracker::new(),
        }
    }

    pub fn num_arms(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, arm: usize) -> u64 {
        self.counts[arm]
    }

    /// Mean observed reward of `arm`, if it was ever pulled.
    pub fn mean_reward(&self, arm: usize) -> Option<f64> {
        match self.counts[arm] {
            0 => None,
            n => Some(self.rewards[arm] / n as f64),
        }
    }

    /// UCB1 score of `arm` in 1-based `episode`.
    pub fn score(&self, arm: usize, episode: usize, exploration: f64) -> f64 {
        match self.mean_reward(arm) {
            None => f64::INFINITY,
            Some(mean) => {
                let n = self.counts[arm] as f64;
                mean + exploration * ((episode as f64).ln() / n).sqrt()
            }
        }
    }

    /// Arm with the strictly highest score; the first one on ties.
    pub fn select(&self, episode: usize, exploration: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for arm in 0..self.num_arms() {
            let score = self.score(arm, episode, exploration);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((arm, score));
            }
        }
        best.map(|(arm, _)| arm)
    }

    /// Records one pull and offers it to the incumbent.
    /// Returns `true` if the incumbent changed.
    pub fn record(&mut self, arm: usize, action: Action, reward: f64) -> bool {
        self.counts[arm] += 1;
        self.rewards[arm] += reward;
        self.incumbent.offer(action, reward)
    }

    pub fn incumbent(&self) -> &IncumbentTracker {
        &self.incumbent
    }
}

/// UCB1 bandit over a finite action space with a fixed episode budget.
#[derive(Debug, Clone)]
pub struct Ucb1Search {
    episodes: usize,
    exploration: f64,
    progress_interval: usize,
}

impl Default for Ucb1Search {
    fn default() -> Self {
        Self {
            episodes: DEFAULT_EPISODES,
            exploration: DEFAULT_EXPLORATION,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl Ucb1Search {
    /// Creates a search with the given budget and exploration constant.
    ///
    /// `episodes` must be at least 1 and `exploration` finite and
    /// non-negative.
    pub fn new(episodes: usize, exploration: f64) -> Result<Self, PlannerError> {
        if episodes == 0 {
            return Err(PlannerError::InvalidParameter {
                name: "episodes",
                detail: "must be at least 1".into(),
            });
        }
        if !(exploration.is_finite() && exploration >= 0.0) {
            return Err(PlannerError::InvalidParameter {
                name: "exploration",
                detail: format!("must be finite and non-negative, got {exploration}"),
            });
        }
        Ok(Self {
            episodes,
            exploration,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        })
    }

    /// Sets how many episodes pass between progress reports (0 disables).
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn episodes(&self) -> usize {
        self.episodes
    }

    pub fn exploration(&self) -> f64 {
        self.exploration
    }
}

impl SearchStrategy for Ucb1Search {
    fn name(&self) -> &str {
        "ucb1"
    }

    fn search(
        &self,
        space: &ActionSpace,
        oracle: &dyn RewardOracle,
        observer: &mut dyn SearchObserver,
    ) -> SearchOutcome {
        let mut state = BanditState::new(space.len());
        let mut episodes_run = 0;

        if space.is_empty() {
            tracing::warn!(
                "action space is empty (layer_max={}); nothing to search",
                space.layer_max(),
            );
        }

        for episode in 1..=self.episodes {
            let Some(arm) = state.select(episode, self.exploration) else {
                break;
            };
            let action = space.actions()[arm];
            let reward = oracle.reward(action);
            if state.record(arm, action, reward) {
                tracing::debug!("episode {episode}: new incumbent {action} reward {reward:.2}");
            }
            episodes_run = episode;

            if self.progress_interval > 0 && episode % self.progress_interval == 0 {
                observer.on_progress(&EpisodeProgress {
                    episode,
                    action,
                    reward,
                    best: state.incumbent().best(),
                });
            }
        }

        let outcome = SearchOutcome {
            strategy_name: self.name().to_string(),
            layer_max: space.layer_max(),
            episodes: episodes_run,
            visits: space.iter().copied().zip(state.counts.iter().copied()).collect(),
            best: state.incumbent().best(),
        };
        tracing::info!("{}", outcome.summary());
        outcome
    }
}
