// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # cost-profile
//!
//! Static per-layer timing data for the offline (k, w) planner.
//!
//! - [`ProfileDocument`]: the JSON document on disk (`io_speed`,
//!   `layer_sizes`, `t_compute`, `t_release`).
//! - [`MemoryLimit`]: the fast-memory budget, in the same unit as the
//!   layer sizes (MB), with suffix parsing for CLI ergonomics.
//! - [`CostProfile`]: the validated, immutable profile the planner works
//!   on. Load times are derived once: `t_load[i] = size[i] / io_speed * 1000`.
//! - [`LogParser`]: best-effort extraction of a profile from the
//!   runtime's free-text execution log.
//!
//! # Example
//! ```no_run
//! use cost_profile::{CostProfile, MemoryLimit};
//! use std::path::Path;
//!
//! let limit = MemoryLimit::parse("2G").unwrap();
//! let profile = CostProfile::load(Path::new("./model_offline_config/model_config.json"), limit).unwrap();
//! println!("{}", profile.summary());
//! ```

mod document;
mod error;
mod limit;
pub mod log_parser;
mod profile;

pub use document::ProfileDocument;
pub use error::ProfileError;
pub use limit::MemoryLimit;
pub use log_parser::{LogParser, ParsedLog};
pub use profile::{CostProfile, LayerCost};
