// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON cost profile document.
//!
//! The document is what the log converter writes and what the planner
//! reads. Index `i` of every array describes layer `i`.
//!
//! # Format
//! ```json
//! {
//!   "io_speed": 110,
//!   "layer_sizes": [50, 50, 48],
//!   "t_compute": [10, 12, 9],
//!   "t_release": [3, 3, 2]
//! }
//! ```

use crate::ProfileError;
use std::path::Path;

/// The on-disk cost profile, deserialized from JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileDocument {
    /// Storage throughput in MB/s.
    pub io_speed: f64,
    /// Size of each layer in MB.
    pub layer_sizes: Vec<f64>,
    /// Compute time of each layer in ms.
    pub t_compute: Vec<f64>,
    /// Release time of each layer in ms.
    pub t_release: Vec<f64>,
}

impl ProfileDocument {
    /// Loads a document from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        if !path.is_file() {
            return Err(ProfileError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let document: Self = serde_json::from_str(json)?;
        Ok(document)
    }

    /// Number of layers described by the document.
    pub fn num_layers(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Validates that the document is internally consistent.
    ///
    /// Checks:
    /// - `t_compute` and `t_release` have one entry per layer.
    /// - `io_speed` is finite and positive.
    /// - Layer sizes are finite and positive.
    /// - Compute and release times are finite and non-negative.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let expected = self.num_layers();
        for (field, found) in [
            ("t_compute", self.t_compute.len()),
            ("t_release", self.t_release.len()),
        ] {
            if found != expected {
                return Err(ProfileError::LengthMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }

        if !(self.io_speed.is_finite() && self.io_speed > 0.0) {
            return Err(ProfileError::InvalidValue {
                field: "io_speed",
                detail: format!("must be a positive number, got {}", self.io_speed),
            });
        }

        if let Some((i, size)) = self
            .layer_sizes
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.is_finite() && **s > 0.0))
        {
            return Err(ProfileError::InvalidValue {
                field: "layer_sizes",
                detail: format!("layer {i} has non-positive size {size}"),
            });
        }

        for (field, times) in [("t_compute", &self.t_compute), ("t_release", &self.t_release)] {
            if let Some((i, t)) = times
                .iter()
                .enumerate()
                .find(|(_, t)| !(t.is_finite() && **t >= 0.0))
            {
                return Err(ProfileError::InvalidValue {
                    field,
                    detail: format!("layer {i} has negative or non-finite time {t}"),
                });
            }
        }

        Ok(())
    }
}
