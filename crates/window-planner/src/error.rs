// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the window planner.

/// Errors that can occur while configuring or concluding a search.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// No `(k, w)` pair fits under the memory limit.
    #[error("no feasible (k, w) configuration: layer_max is {layer_max}")]
    NoFeasibleAction { layer_max: usize },

    /// The requested strategy name is not known.
    #[error("unknown search strategy '{0}'; expected 'ucb1' or 'exhaustive'")]
    UnknownStrategy(String),

    /// A search parameter is out of range.
    #[error("invalid search parameter '{name}': {detail}")]
    InvalidParameter { name: &'static str, detail: String },
}
