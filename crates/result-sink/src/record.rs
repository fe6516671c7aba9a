// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The fixed 8-byte `(k, w)` record.

use crate::SinkError;
use std::fmt;

/// Size of an encoded record in bytes.
pub const RECORD_LEN: usize = 8;

/// The planner's decision as the consumer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlanRecord {
    /// Resident layer count.
    pub k: i32,
    /// Prefetch window.
    pub w: i32,
}

impl PlanRecord {
    pub fn new(k: i32, w: i32) -> Self {
        Self { k, w }
    }

    /// Builds a record from planner-side counts, checking the 32-bit range.
    pub fn from_counts(k: usize, w: usize) -> Result<Self, SinkError> {
        let narrow = |field: &'static str, value: usize| {
            i32::try_from(value).map_err(|_| SinkError::OutOfRange { field, value })
        };
        Ok(Self {
            k: narrow("k", k)?,
            w: narrow("w", w)?,
        })
    }

    /// Encodes `k` then `w` in native byte order.
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        out[..4].copy_from_slice(&self.k.to_ne_bytes());
        out[4..].copy_from_slice(&self.w.to_ne_bytes());
        out
    }

    /// Decodes a record from the first [`RECORD_LEN`] bytes of `bytes`.
    /// Returns `None` if fewer bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let k: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        let w: [u8; 4] = bytes.get(4..RECORD_LEN)?.try_into().ok()?;
        Some(Self {
            k: i32::from_ne_bytes(k),
            w: i32::from_ne_bytes(w),
        })
    }
}

impl fmt::Display for PlanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k = {}, w = {}", self.k, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_k_then_w() {
        let bytes = PlanRecord::new(3, 2).to_bytes();
        assert_eq!(&bytes[..4], &3i32.to_ne_bytes());
        assert_eq!(&bytes[4..], &2i32.to_ne_bytes());
    }

    #[test]
    fn test_negative_values_survive() {
        let r = PlanRecord::new(-1, i32::MAX);
        assert_eq!(PlanRecord::from_bytes(&r.to_bytes()), Some(r));
    }

    #[test]
    fn test_from_bytes_short_input() {
        assert_eq!(PlanRecord::from_bytes(&[0u8; 7]), None);
        assert_eq!(PlanRecord::from_bytes(&[]), None);
    }

    #[test]
    fn test_from_bytes_ignores_trailing_bytes() {
        let mut bytes = PlanRecord::new(4, 1).to_bytes().to_vec();
        bytes.extend_from_slice(&[0xff; 8]);
        assert_eq!(PlanRecord::from_bytes(&bytes), Some(PlanRecord::new(4, 1)));
    }

    #[test]
    fn test_from_counts_range() {
        assert_eq!(PlanRecord::from_counts(3, 2).unwrap(), PlanRecord::new(3, 2));
        let too_big = i32::MAX as usize + 1;
        assert!(matches!(
            PlanRecord::from_counts(0, too_big),
            Err(SinkError::OutOfRange { field: "w", .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(PlanRecord::new(3, 2).to_string(), "k = 3, w = 2");
    }
}
