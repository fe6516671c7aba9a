// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # window-planner
//!
//! Chooses how many layers to keep resident (`k`) and how wide a prefetch
//! window to stream the rest with (`w`), under a fixed memory limit.
//!
//! # Components
//!
//! - [`ActionSpace`]: every admissible `(k, w)` with `k + w ≤ layer_max`,
//!   where `layer_max` is the longest layer prefix that fits the limit.
//! - [`PipelineSimulator`]: predicts total completion time of the
//!   load → compute → release pipeline for one configuration. Pure and
//!   deterministic; infeasible input yields [`INFEASIBLE_PENALTY`].
//! - [`SearchStrategy`]: explores the action space against a
//!   [`RewardOracle`]:
//!
//! | Strategy | Evaluations | Use |
//! |---|---|---|
//! | [`Ucb1Search`] | fixed episode budget (default 500) | default planner |
//! | [`ExhaustiveSearch`] | one per action | reference, small spaces |
//!
//! # Example
//! ```
//! use cost_profile::{CostProfile, MemoryLimit, ProfileDocument};
//! use window_planner::{ActionSpace, NoProgress, PipelineSimulator, SearchStrategy, Ucb1Search};
//!
//! let profile = CostProfile::new(
//!     ProfileDocument {
//!         io_speed: 10.0,
//!         layer_sizes: vec![10.0, 10.0, 10.0],
//!         t_compute: vec![5.0, 5.0, 5.0],
//!         t_release: vec![2.0, 2.0, 2.0],
//!     },
//!     MemoryLimit::from_mb(25.0),
//! )
//! .unwrap();
//!
//! let space = ActionSpace::build(&profile);
//! let sim = PipelineSimulator::for_space(&profile, &space);
//! let outcome = Ucb1Search::default().search(&space, &sim, &mut NoProgress);
//! let best = outcome.require_best().unwrap();
//! assert_eq!((best.action.k, best.action.w), (1, 1));
//! ```

mod action;
mod error;
mod outcome;
pub mod simulator;
pub mod strategy;

pub use action::{resident_capacity, Action, ActionSpace};
pub use error::PlannerError;
pub use outcome::{
    EpisodeProgress, Incumbent, IncumbentTracker, NoProgress, SearchObserver, SearchOutcome,
};
pub use simulator::{PipelineSimulator, RewardOracle, Timeline, INFEASIBLE_PENALTY};
pub use strategy::exhaustive::ExhaustiveSearch;
pub use strategy::ucb::{BanditState, Ucb1Search};
pub use strategy::SearchStrategy;
