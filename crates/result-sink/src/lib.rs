// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # result-sink
//!
//! Hands the chosen `(k, w)` to the consumer process through a small
//! shared file.
//!
//! # Layout
//!
//! ```text
//! offset 0..4  k  (i32, native byte order)
//! offset 4..8  w  (i32, native byte order)
//! ```
//!
//! The file is exactly [`RECORD_LEN`] bytes. The consumer maps it
//! read-only and copies the two integers out; the writer maps it
//! read-write, overwrites all eight bytes and flushes. There is no lock:
//! callers must not run two writers against the same path at once.
//!
//! # Example
//! ```no_run
//! use result_sink::{PlanRecord, ResultSink};
//!
//! let sink = ResultSink::new("/tmp/shared_offline_planning.bin");
//! sink.write(PlanRecord::new(3, 2)).unwrap();
//! assert_eq!(sink.read().unwrap(), PlanRecord::new(3, 2));
//! ```

mod error;
mod record;
mod sink;

pub use error::SinkError;
pub use record::{PlanRecord, RECORD_LEN};
pub use sink::{ResultSink, DEFAULT_SHARED_PATH};
