// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The planning session with a type-state–enforced pipeline.
//!
//! ```text
//! PlanningSession<Idle>
//!     │  .load_profile()
//!     ▼
//! PlanningSession<Profiled>     (cost profile + action space)
//!     │  .search(observer)
//!     ▼
//! PlanningSession<Planned>      (search outcome)
//!     │  .commit()
//!     ▼
//!   PlanReport                  (record written to the result sink)
//! ```
//!
//! Each state transition consumes the old value and returns a new one,
//! so the handoff record can only be written after a search has run.

use crate::{PlannerConfig, PlanningMetrics, RuntimeError};
use cost_profile::{CostProfile, MemoryLimit};
use result_sink::{PlanRecord, ResultSink};
use std::path::PathBuf;
use std::time::Instant;
use window_planner::{
    Action, ActionSpace, Incumbent, PipelineSimulator, SearchObserver, SearchOutcome,
    SearchStrategy,
};

// ── Type-state markers ─────────────────────────────────────────

/// Session is created but no profile is loaded.
#[derive(Debug)]
pub struct Idle;

/// The cost profile is loaded and the action space is built.
#[derive(Debug)]
pub struct Profiled {
    profile: CostProfile,
    space: ActionSpace,
}

/// The search has run; the outcome is ready to commit.
#[derive(Debug)]
pub struct Planned {
    profile: CostProfile,
    space: ActionSpace,
    outcome: SearchOutcome,
}

/// Sealed trait for session states.
pub trait SessionState: std::fmt::Debug {}
impl SessionState for Idle {}
impl SessionState for Profiled {}
impl SessionState for Planned {}

// ── Plan report ────────────────────────────────────────────────

/// The result of a committed planning run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlanReport {
    /// Memory limit the plan was computed under.
    pub memory_limit: MemoryLimit,
    /// Strategy that produced the plan.
    pub strategy: String,
    /// Largest resident prefix that fits the limit.
    pub layer_max: usize,
    /// Winning configuration.
    pub action: Action,
    /// Predicted completion time in ms.
    pub predicted_latency_ms: f64,
    /// Where the handoff record was written.
    pub result_path: PathBuf,
    /// Per-phase timings.
    pub metrics: PlanningMetrics,
}

impl PlanReport {
    /// The one-line result summary printed at the end of a run.
    pub fn summary_line(&self) -> String {
        format!(
            "[Memory Limit = {}] best parameters: k={}, w={}, inference time={:.2} ms",
            self.memory_limit, self.action.k, self.action.w, self.predicted_latency_ms,
        )
    }

    /// Serialises the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RuntimeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Session ────────────────────────────────────────────────────

/// One offline planning run.
///
/// `S` is a type-state marker that enforces the pipeline ordering at
/// compile time. You cannot `.commit()` an `Idle` session or
/// `.search()` one that has no profile.
///
/// # Example
/// ```no_run
/// use planner_runtime::{PlannerConfig, PlanningSession};
/// use window_planner::NoProgress;
///
/// # fn example() -> Result<(), planner_runtime::RuntimeError> {
/// let config = PlannerConfig {
///     memory_limit: Some("2G".into()),
///     ..Default::default()
/// };
/// let report = PlanningSession::new(config)
///     .load_profile()?
///     .search(&mut NoProgress)?
///     .commit()?;
/// println!("{}", report.summary_line());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PlanningSession<S: SessionState = Idle> {
    config: PlannerConfig,
    metrics: PlanningMetrics,
    started: Instant,
    state: S,
}

impl<S: SessionState> PlanningSession<S> {
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Metrics recorded so far.
    pub fn metrics(&self) -> &PlanningMetrics {
        &self.metrics
    }

    fn transition<T: SessionState>(self, state: T) -> PlanningSession<T> {
        PlanningSession {
            config: self.config,
            metrics: self.metrics,
            started: self.started,
            state,
        }
    }
}

// ── Idle → Profiled ────────────────────────────────────────────

impl PlanningSession<Idle> {
    /// Creates a new session from the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        tracing::info!("planning session created with strategy '{}'", config.strategy);
        Self {
            config,
            metrics: PlanningMetrics::new(),
            started: Instant::now(),
            state: Idle,
        }
    }

    /// Loads the cost profile and builds the action space.
    /// Transitions to the `Profiled` state.
    ///
    /// Any configuration problem (bad limit, missing or inconsistent
    /// profile) fails here, before anything is written.
    pub fn load_profile(self) -> Result<PlanningSession<Profiled>, RuntimeError> {
        let t0 = Instant::now();
        let limit = self.config.parse_limit()?;
        tracing::info!("memory limit: {limit}");

        let profile = CostProfile::load(&self.config.profile_path, limit)?;
        Ok(self.with_profile(profile, t0))
    }

    /// Convenience: starts from an already-built profile (for testing).
    pub fn from_profile(config: PlannerConfig, profile: CostProfile) -> PlanningSession<Profiled> {
        let t0 = Instant::now();
        Self::new(config).with_profile(profile, t0)
    }

    fn with_profile(mut self, profile: CostProfile, t0: Instant) -> PlanningSession<Profiled> {
        let space = ActionSpace::build(&profile);
        self.metrics.record_profile(
            t0.elapsed(),
            profile.total_layers(),
            space.layer_max(),
            space.len(),
        );
        self.transition(Profiled { profile, space })
    }
}

// ── Profiled → Planned ─────────────────────────────────────────

impl PlanningSession<Profiled> {
    pub fn profile(&self) -> &CostProfile {
        &self.state.profile
    }

    pub fn space(&self) -> &ActionSpace {
        &self.state.space
    }

    /// A simulator bound to this session's profile and action space.
    pub fn simulator(&self) -> PipelineSimulator<'_> {
        PipelineSimulator::for_space(&self.state.profile, &self.state.space)
    }

    /// Runs the configured strategy. Transitions to the `Planned` state.
    pub fn search(
        self,
        observer: &mut dyn SearchObserver,
    ) -> Result<PlanningSession<Planned>, RuntimeError> {
        let strategy = self.config.create_strategy()?;
        Ok(self.search_with(strategy.as_ref(), observer))
    }

    /// Runs an explicit strategy instead of the configured one.
    pub fn search_with(
        mut self,
        strategy: &dyn SearchStrategy,
        observer: &mut dyn SearchObserver,
    ) -> PlanningSession<Planned> {
        tracing::info!("using strategy: {}", strategy.name());
        let t0 = Instant::now();
        let outcome = {
            let simulator = self.simulator();
            strategy.search(&self.state.space, &simulator, observer)
        };
        self.metrics.record_search(t0.elapsed(), outcome.evaluations());

        let Profiled { profile, space } = self.state;
        PlanningSession {
            config: self.config,
            metrics: self.metrics,
            started: self.started,
            state: Planned {
                profile,
                space,
                outcome,
            },
        }
    }
}

// ── Planned → PlanReport ───────────────────────────────────────

impl PlanningSession<Planned> {
    pub fn profile(&self) -> &CostProfile {
        &self.state.profile
    }

    pub fn space(&self) -> &ActionSpace {
        &self.state.space
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.state.outcome
    }

    /// The incumbent, or [`window_planner::PlannerError::NoFeasibleAction`].
    pub fn best(&self) -> Result<Incumbent, RuntimeError> {
        Ok(self.state.outcome.require_best()?)
    }

    /// Writes the winning `(k, w)` to the result sink and finalises metrics.
    ///
    /// Fails without touching the artifact when the search found nothing.
    pub fn commit(self) -> Result<PlanReport, RuntimeError> {
        let best = self.best()?;
        let record = PlanRecord::from_counts(best.action.k, best.action.w)?;

        let mut metrics = self.metrics;
        let sink = ResultSink::new(self.config.result_path.clone());
        let t0 = Instant::now();
        sink.write(record)?;
        metrics.record_write(t0.elapsed());
        metrics.finalise(self.started.elapsed());
        tracing::info!("{}", metrics.summary());

        Ok(PlanReport {
            memory_limit: self.state.profile.memory_limit(),
            strategy: self.state.outcome.strategy_name,
            layer_max: self.state.space.layer_max(),
            action: best.action,
            predicted_latency_ms: best.latency_ms(),
            result_path: self.config.result_path,
            metrics,
        })
    }
}
