// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the planning runtime.

/// Errors that can occur during a planning run.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The cost profile could not be loaded or is inconsistent.
    #[error("profile error: {0}")]
    ProfileError(#[from] cost_profile::ProfileError),

    /// The search could not be configured or found no feasible action.
    #[error("planner error: {0}")]
    PlannerError(#[from] window_planner::PlannerError),

    /// Writing the handoff record failed.
    #[error("result sink error: {0}")]
    SinkError(#[from] result_sink::SinkError),

    /// The plan report could not be serialised.
    #[error("report error: {0}")]
    ReportError(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
