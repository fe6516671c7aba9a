// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`SearchStrategy`] trait and strategy implementations.

pub mod exhaustive;
pub mod ucb;

use crate::{ActionSpace, RewardOracle, SearchObserver, SearchOutcome};

/// Trait for search strategies over the `(k, w)` action space.
///
/// Strategies only talk to the world through the [`RewardOracle`] and the
/// [`SearchObserver`], so they are deterministic given their inputs and
/// can be tested against hand-written reward tables.
pub trait SearchStrategy {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Explores `space` and returns the best action found.
    ///
    /// An empty space is not an error: the outcome simply has no incumbent.
    fn search(
        &self,
        space: &ActionSpace,
        oracle: &dyn RewardOracle,
        observer: &mut dyn SearchObserver,
    ) -> SearchOutcome;
}
