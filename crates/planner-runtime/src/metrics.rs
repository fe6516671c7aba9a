// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Planning-run metrics.
//!
//! [`PlanningMetrics`] records wall-clock time per pipeline phase. The
//! total is what the CLI reports as the memory-planning cost.

use std::time::Duration;

/// Timing and size counters for a single planning run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct PlanningMetrics {
    /// Time spent reading and validating the cost profile.
    pub profile_load_duration: Duration,
    /// Time spent in the search strategy.
    pub search_duration: Duration,
    /// Time spent writing the handoff record.
    pub write_duration: Duration,
    /// Wall-clock time from session start to commit.
    pub total_duration: Duration,
    /// Number of layers in the profile.
    pub num_layers: usize,
    /// `layer_max` of the action space.
    pub layer_max: usize,
    /// Number of candidate actions.
    pub num_actions: usize,
    /// Simulator evaluations performed by the search.
    pub evaluations: u64,
}

impl PlanningMetrics {
    /// Creates an empty metrics container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the profile-load phase and the resulting action-space size.
    pub fn record_profile(
        &mut self,
        duration: Duration,
        num_layers: usize,
        layer_max: usize,
        num_actions: usize,
    ) {
        self.profile_load_duration = duration;
        self.num_layers = num_layers;
        self.layer_max = layer_max;
        self.num_actions = num_actions;
    }

    pub fn record_search(&mut self, duration: Duration, evaluations: u64) {
        self.search_duration = duration;
        self.evaluations = evaluations;
    }

    pub fn record_write(&mut self, duration: Duration) {
        self.write_duration = duration;
    }

    /// Finalises metrics with the total wall-clock time.
    pub fn finalise(&mut self, total: Duration) {
        self.total_duration = total;
    }

    /// Total planning cost in milliseconds.
    pub fn planning_cost_ms(&self) -> f64 {
        self.total_duration.as_secs_f64() * 1000.0
    }

    /// Simulator evaluations per second of search time.
    pub fn evaluations_per_second(&self) -> f64 {
        let secs = self.search_duration.as_secs_f64();
        if secs <= 0.0 || self.evaluations == 0 {
            return 0.0;
        }
        self.evaluations as f64 / secs
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        format!(
            "memory-planning cost: {:.3} ms (profile {:.3} ms, search {:.3} ms, \
             write {:.3} ms), {} layers, layer_max {}, {} actions, {} evaluations",
            self.planning_cost_ms(),
            self.profile_load_duration.as_secs_f64() * 1000.0,
            self.search_duration.as_secs_f64() * 1000.0,
            self.write_duration.as_secs_f64() * 1000.0,
            self.num_layers,
            self.layer_max,
            self.num_actions,
            self.evaluations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let m = PlanningMetrics::new();
        assert_eq!(m.planning_cost_ms(), 0.0);
        assert_eq!(m.evaluations_per_second(), 0.0);
    }

    #[test]
    fn test_record_phases() {
        let mut m = PlanningMetrics::new();
        m.record_profile(Duration::from_millis(2), 32, 10, 55);
        m.record_search(Duration::from_millis(20), 500);
        m.record_write(Duration::from_millis(1));
        m.finalise(Duration::from_millis(25));

        assert_eq!(m.num_layers, 32);
        assert_eq!(m.num_actions, 55);
        assert_eq!(m.evaluations, 500);
        assert!((m.planning_cost_ms() - 25.0).abs() < 1e-9);
        assert!((m.evaluations_per_second() - 25_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_summary_format() {
        let mut m = PlanningMetrics::new();
        m.record_profile(Duration::from_millis(1), 3, 2, 3);
        m.finalise(Duration::from_millis(4));

        let s = m.summary();
        assert!(s.contains("memory-planning cost"));
        assert!(s.contains("3 layers"));
        assert!(s.contains("layer_max 2"));
    }
}
