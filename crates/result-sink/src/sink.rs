// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory-mapped writer and reader for the handoff file.

use crate::{PlanRecord, SinkError, RECORD_LEN};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Path the consumer process maps by default.
pub const DEFAULT_SHARED_PATH: &str = "/tmp/shared_offline_planning.bin";

/// Writes and reads [`PlanRecord`]s at a fixed path.
#[derive(Debug, Clone)]
pub struct ResultSink {
    path: PathBuf,
}

impl Default for ResultSink {
    fn default() -> Self {
        Self::new(DEFAULT_SHARED_PATH)
    }
}

impl ResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `record`, replacing whatever the file held.
    ///
    /// The file is created if absent and its length forced to exactly
    /// [`RECORD_LEN`] bytes, so no stale bytes from a longer file remain.
    /// The mapping is flushed before returning.
    pub fn write(&self, record: PlanRecord) -> Result<(), SinkError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.set_len(RECORD_LEN as u64)
            .map_err(|e| self.io_error(e))?;

        // SAFETY: the file was just sized to RECORD_LEN and stays open for
        // the lifetime of the mapping. Concurrent writers are excluded by
        // contract.
        let mut mmap = unsafe { memmap2::MmapMut::map_mut(&file) }.map_err(|e| self.io_error(e))?;
        mmap[..RECORD_LEN].copy_from_slice(&record.to_bytes());
        mmap.flush().map_err(|e| self.io_error(e))?;

        tracing::info!("wrote {record} to '{}'", self.path.display());
        Ok(())
    }

    /// Reads the record currently stored in the file.
    pub fn read(&self) -> Result<PlanRecord, SinkError> {
        let file = std::fs::File::open(&self.path).map_err(|e| self.io_error(e))?;
        let len = file.metadata().map_err(|e| self.io_error(e))?.len() as usize;
        if len < RECORD_LEN {
            return Err(self.truncated(len));
        }

        // SAFETY: read-only mapping of a file we hold open; the length was
        // checked above.
        let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| self.io_error(e))?;
        PlanRecord::from_bytes(&mmap).ok_or_else(|| self.truncated(mmap.len()))
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn truncated(&self, len: usize) -> SinkError {
        SinkError::Truncated {
            path: self.path.clone(),
            len,
            expected: RECORD_LEN,
        }
    }
}
