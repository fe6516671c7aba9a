// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # planner-runtime
//!
//! Orchestrates one offline planning run.
//!
//! The runtime takes:
//! - A `CostProfile` from `cost-profile`.
//! - An `ActionSpace` and a `SearchStrategy` from `window-planner`.
//! - A `ResultSink` from `result-sink`.
//!
//! And runs them in order, recording per-phase timings. Configuration
//! comes from a [`PlannerConfig`], which can be loaded from TOML.
//!
//! # Type-State Pipeline
//! ```text
//! PlanningSession<Idle> → PlanningSession<Profiled> → PlanningSession<Planned> → PlanReport
//! ```
//! Transitions are compile-time checked. The run is single-threaded
//! and synchronous from start to finish.

mod config;
mod engine;
mod error;
mod metrics;

pub use config::PlannerConfig;
pub use engine::{Idle, PlanReport, Planned, PlanningSession, Profiled, SessionState};
pub use error::RuntimeError;
pub use metrics::PlanningMetrics;
