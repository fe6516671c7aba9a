// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Discrete-event model of the pipelined load → compute → release schedule.
//!
//! # Model
//!
//! The first `k` layers are resident and compute back to back, so the tail
//! cannot start computing before `start_time = Σ t_compute[0..k]`. The
//! remaining `D = total_layers − k` tail layers are streamed. For tail
//! position `j` (layer `idx = k + j`):
//!
//! ```text
//! j <  w : L[j] = L[j−1] + t_load[idx]
//! j >= w : L[j] = max(L[j−1], C[j−w] + t_release[idx−w]) + t_load[idx]
//!          C[j] = max(L[j], C[j−1] or start_time) + t_compute[idx]
//! ```
//!
//! Loads are serial on the storage device. Inside the window a load reuses
//! free capacity; outside it, the load waits until layer `idx − w` has
//! finished computing and has been released. Completion time is `C[D−1]`
//! (or `start_time` when there is no tail), and the reward is its negation.

use crate::{Action, ActionSpace};
use cost_profile::CostProfile;

/// Reward returned for configurations outside the feasible region.
pub const INFEASIBLE_PENALTY: f64 = -1e6;

/// Anything the search strategies can query for the reward of an action.
pub trait RewardOracle {
    /// Reward of `action`; higher is better.
    fn reward(&self, action: Action) -> f64;
}

impl<F: Fn(Action) -> f64> RewardOracle for F {
    fn reward(&self, action: Action) -> f64 {
        self(action)
    }
}

/// Predicted event times for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Time at which the resident layers finish computing.
    pub start_time: f64,
    /// Load completion time of each tail layer.
    pub load_done: Vec<f64>,
    /// Compute completion time of each tail layer.
    pub compute_done: Vec<f64>,
}

impl Timeline {
    /// Index of the first streamed layer.
    pub fn first_tail_layer(&self, total_layers: usize) -> usize {
        total_layers - self.compute_done.len()
    }

    /// Total predicted completion time in ms.
    pub fn completion_time(&self) -> f64 {
        self.compute_done.last().copied().unwrap_or(self.start_time)
    }
}

/// Pure pipeline timing model over a [`CostProfile`].
#[derive(Debug, Clone, Copy)]
pub struct PipelineSimulator<'a> {
    profile: &'a CostProfile,
    layer_max: usize,
}

impl<'a> PipelineSimulator<'a> {
    /// Creates a simulator whose feasible region is `k + w ≤ layer_max`.
    pub fn new(profile: &'a CostProfile, layer_max: usize) -> Self {
        Self {
            profile,
            layer_max: layer_max.min(profile.total_layers()),
        }
    }

    /// Creates a simulator sharing the feasible region of `space`.
    pub fn for_space(profile: &'a CostProfile, space: &ActionSpace) -> Self {
        Self::new(profile, space.layer_max())
    }

    pub fn layer_max(&self) -> usize {
        self.layer_max
    }

    pub fn profile(&self) -> &CostProfile {
        self.profile
    }

    /// Reward for raw `(k, w)`: negated completion time, or
    /// [`INFEASIBLE_PENALTY`] if `k < 0`, `w < 1` or `k + w > layer_max`.
    pub fn evaluate(&self, k: i64, w: i64) -> f64 {
        match (usize::try_from(k), usize::try_from(w)) {
            (Ok(k), Ok(w)) => self.reward(Action::new(k, w)),
            _ => INFEASIBLE_PENALTY,
        }
    }

    pub fn is_feasible(&self, action: Action) -> bool {
        action.w >= 1
            && action
                .k
                .checked_add(action.w)
                .is_some_and(|span| span <= self.layer_max)
    }

    /// Predicted completion time in ms, or `None` when infeasible.
    pub fn completion_time(&self, action: Action) -> Option<f64> {
        self.timeline(action).map(|t| t.completion_time())
    }

    /// Full event timeline, or `None` when infeasible.
    pub fn timeline(&self, action: Action) -> Option<Timeline> {
        if !self.is_feasible(action) {
            return None;
        }

        let Action { k, w } = action;
        let t_load = self.profile.t_load();
        let t_compute = self.profile.t_compute();
        let t_release = self.profile.t_release();

        let tail = self.profile.total_layers() - k;
        let start_time: f64 = t_compute[..k].iter().sum();
        let mut load_done = vec![0.0f64; tail];
        let mut compute_done = vec![0.0f64; tail];

        for j in 0..tail {
            let idx = k + j;
            let prev_load = if j == 0 { 0.0 } else { load_done[j - 1] };

            let load_start = if j < w {
                prev_load
            } else {
                let release_done = compute_done[j - w] + t_release[idx - w];
                prev_load.max(release_done)
            };
            load_done[j] = load_start + t_load[idx];

            let compute_ready = if j == 0 { start_time } else { compute_done[j - 1] };
            compute_done[j] = load_done[j].max(compute_ready) + t_compute[idx];
        }

        Some(Timeline {
            start_time,
            load_done,
            compute_done,
        })
    }
}

impl RewardOracle for PipelineSimulator<'_> {
    fn reward(&self, action: Action) -> f64 {
        match self.completion_time(action) {
            Some(t) => -t,
            None => INFEASIBLE_PENALTY,
        }
    }
}
