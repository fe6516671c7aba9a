// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the result sink.

use std::path::PathBuf;

/// Errors that can occur while writing or reading the handoff record.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Opening, resizing, mapping or flushing the file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is shorter than one record.
    #[error("'{}' holds {len} bytes, expected at least {expected}", path.display())]
    Truncated {
        path: PathBuf,
        len: usize,
        expected: usize,
    },

    /// A value does not fit the record's 32-bit signed field.
    #[error("{field} = {value} does not fit in a 32-bit signed integer")]
    OutOfRange { field: &'static str, value: usize },
}
