// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for cost profile loading and log conversion.

use std::path::PathBuf;

/// Errors that can occur while building a [`crate::CostProfile`].
///
/// All of these are configuration errors: the planner fails fast on them
/// before any search runs or any artifact is written.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The cost profile file does not exist.
    #[error("cost profile not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The profile JSON is malformed.
    #[error("failed to parse cost profile: {0}")]
    Parse(#[from] serde_json::Error),

    /// A per-layer array does not have one entry per layer.
    #[error("length mismatch: '{field}' has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A numeric field is out of its admissible range.
    #[error("invalid value for '{field}': {detail}")]
    InvalidValue { field: &'static str, detail: String },

    /// The memory limit string could not be parsed.
    #[error("invalid memory limit '{input}': {detail}")]
    InvalidLimit { input: String, detail: String },

    /// A log pattern failed to compile.
    #[error("invalid log pattern: {0}")]
    Pattern(#[from] regex::Error),
}
