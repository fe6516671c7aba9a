// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The validated, immutable cost profile consumed by the planner.

use crate::{MemoryLimit, ProfileDocument, ProfileError};
use std::path::Path;

/// Costs of a single layer, with the derived load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerCost {
    /// Position of this layer in execution order.
    pub index: usize,
    /// Size in MB.
    pub size: f64,
    /// Load time in ms (`size / io_speed * 1000`).
    pub load: f64,
    /// Compute time in ms.
    pub compute: f64,
    /// Release time in ms.
    pub release: f64,
}

/// Per-layer load/compute/release costs plus the memory limit.
///
/// Constructed once from a [`ProfileDocument`]; there are no mutators.
#[derive(Debug, Clone)]
pub struct CostProfile {
    io_speed: f64,
    layer_sizes: Vec<f64>,
    t_compute: Vec<f64>,
    t_release: Vec<f64>,
    t_load: Vec<f64>,
    memory_limit: MemoryLimit,
}

impl CostProfile {
    /// Validates `document` and derives per-layer load times.
    pub fn new(document: ProfileDocument, memory_limit: MemoryLimit) -> Result<Self, ProfileError> {
        document.validate()?;
        if !memory_limit.is_valid() {
            return Err(ProfileError::InvalidValue {
                field: "memory_limit",
                detail: format!("must be a positive number, got {}", memory_limit.as_mb()),
            });
        }

        let ProfileDocument {
            io_speed,
            layer_sizes,
            t_compute,
            t_release,
        } = document;

        let t_load: Vec<f64> = layer_sizes
            .iter()
            .map(|size| size / io_speed * 1000.0)
            .collect();

        let profile = Self {
            io_speed,
            layer_sizes,
            t_compute,
            t_release,
            t_load,
            memory_limit,
        };

        tracing::info!(
            "cost profile: {} layers, {:.2} MB total, io speed {} MB/s, limit {}",
            profile.total_layers(),
            profile.total_size(),
            profile.io_speed,
            profile.memory_limit,
        );
        tracing::debug!("t_load: {:?}", profile.t_load);

        Ok(profile)
    }

    /// Loads and validates the JSON document at `path`.
    pub fn load(path: &Path, memory_limit: MemoryLimit) -> Result<Self, ProfileError> {
        let document = ProfileDocument::from_file(path)?;
        Self::new(document, memory_limit)
    }

    /// Number of layers in the profile.
    pub fn total_layers(&self) -> usize {
        self.layer_sizes.len()
    }

    pub fn io_speed(&self) -> f64 {
        self.io_speed
    }

    pub fn memory_limit(&self) -> MemoryLimit {
        self.memory_limit
    }

    pub fn layer_sizes(&self) -> &[f64] {
        &self.layer_sizes
    }

    pub fn t_compute(&self) -> &[f64] {
        &self.t_compute
    }

    pub fn t_release(&self) -> &[f64] {
        &self.t_release
    }

    /// Derived load time of every layer, in ms.
    pub fn t_load(&self) -> &[f64] {
        &self.t_load
    }

    /// Sum of all layer sizes in MB.
    pub fn total_size(&self) -> f64 {
        self.layer_sizes.iter().sum()
    }

    /// Returns the costs of layer `index`, if it exists.
    pub fn layer(&self, index: usize) -> Option<LayerCost> {
        Some(LayerCost {
            index,
            size: *self.layer_sizes.get(index)?,
            load: self.t_load[index],
            compute: self.t_compute[index],
            release: self.t_release[index],
        })
    }

    /// Iterates over all layers in execution order.
    pub fn iter_layers(&self) -> impl Iterator<Item = LayerCost> + '_ {
        (0..self.total_layers()).filter_map(|i| self.layer(i))
    }

    /// Returns a one-line human-readable summary.
    pub fn summary(&self) -> String {
        let compute: f64 = self.t_compute.iter().sum();
        let load: f64 = self.t_load.iter().sum();
        format!(
            "Profile: {} layers, {:.2} MB total, io {} MB/s, \
             {:.2}ms load, {:.2}ms compute (serial), limit {}",
            self.total_layers(),
            self.total_size(),
            self.io_speed,
            load,
            compute,
            self.memory_limit,
        )
    }
}
