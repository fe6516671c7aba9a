// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Search results: the running incumbent and the final outcome.

use crate::{Action, PlannerError};

/// The best configuration seen so far and its reward.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Incumbent {
    pub action: Action,
    pub reward: f64,
}

impl Incumbent {
    /// Predicted completion time in ms.
    pub fn latency_ms(&self) -> f64 {
        -self.reward
    }
}

/// Tracks the incumbent across evaluations.
///
/// A new observation replaces the incumbent if its reward is strictly
/// higher, or if the rewards are equal and the new action is more
/// aggressive (larger `k + w`, then larger `k`).
#[derive(Debug, Clone, Default)]
pub struct IncumbentTracker {
    best: Option<Incumbent>,
}

impl IncumbentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers an observation; returns `true` if it became the incumbent.
    pub fn offer(&mut self, action: Action, reward: f64) -> bool {
        let replace = match &self.best {
            None => reward > f64::NEG_INFINITY,
            Some(best) => {
                reward > best.reward
                    || (reward == best.reward && action.is_more_aggressive_than(&best.action))
            }
        };
        if replace {
            self.best = Some(Incumbent { action, reward });
        }
        replace
    }

    pub fn best(&self) -> Option<Incumbent> {
        self.best
    }

    /// Best reward so far; negative infinity before any observation.
    pub fn best_reward(&self) -> f64 {
        self.best.map_or(f64::NEG_INFINITY, |b| b.reward)
    }
}

/// Snapshot handed to a [`SearchObserver`] at each progress interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeProgress {
    /// 1-based episode number.
    pub episode: usize,
    /// Action evaluated in this episode.
    pub action: Action,
    /// Reward it received.
    pub reward: f64,
    /// Incumbent after this episode.
    pub best: Option<Incumbent>,
}

/// Receives periodic progress from a running search.
pub trait SearchObserver {
    fn on_progress(&mut self, progress: &EpisodeProgress);
}

impl<F: FnMut(&EpisodeProgress)> SearchObserver for F {
    fn on_progress(&mut self, progress: &EpisodeProgress) {
        self(progress)
    }
}

/// Observer that discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl SearchObserver for NoProgress {
    fn on_progress(&mut self, _progress: &EpisodeProgress) {}
}

/// The result of running a [`crate::SearchStrategy`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchOutcome {
    /// Strategy that produced this outcome.
    pub strategy_name: String,
    /// `layer_max` of the searched space.
    pub layer_max: usize,
    /// Episodes actually run.
    pub episodes: usize,
    /// How often each action was evaluated, in enumeration order.
    pub visits: Vec<(Action, u64)>,
    /// Final incumbent; `None` when the action space was empty.
    pub best: Option<Incumbent>,
}

impl SearchOutcome {
    pub fn best_action(&self) -> Option<Action> {
        self.best.map(|b| b.action)
    }

    /// Best reward; negative infinity when nothing was evaluated.
    pub fn best_reward(&self) -> f64 {
        self.best.map_or(f64::NEG_INFINITY, |b| b.reward)
    }

    /// Total simulator evaluations.
    pub fn evaluations(&self) -> u64 {
        self.visits.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct actions evaluated at least once.
    pub fn explored_actions(&self) -> usize {
        self.visits.iter().filter(|(_, n)| *n > 0).count()
    }

    /// Returns the incumbent, or an error when no action was feasible.
    pub fn require_best(&self) -> Result<Incumbent, PlannerError> {
        self.best.ok_or(PlannerError::NoFeasibleAction {
            layer_max: self.layer_max,
        })
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        match &self.best {
            Some(best) => format!(
                "Search '{}': {} episodes, {} evaluations over {}/{} actions, \
                 best {} at {:.2} ms",
                self.strategy_name,
                self.episodes,
                self.evaluations(),
                self.explored_actions(),
                self.visits.len(),
                best.action,
                best.latency_ms(),
            ),
            None => format!(
                "Search '{}': no feasible action (layer_max={})",
                self.strategy_name, self.layer_max,
            ),
        }
    }
}
