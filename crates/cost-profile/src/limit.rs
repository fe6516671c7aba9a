// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory limit configuration and parsing.
//!
//! A [`MemoryLimit`] is the fast-memory ceiling the resident layers must fit
//! under. It is expressed in the same unit as the profile's layer sizes
//! (megabytes), and accepts human-readable strings for CLI ergonomics.

use crate::ProfileError;
use std::fmt;

/// A hard ceiling on the total size of resident layers, in megabytes.
///
/// # Parsing
/// - `"25"` or `"25.5"` → plain megabytes
/// - `"512M"` or `"512MB"` → 512 MB
/// - `"1G"` or `"1GB"` → 1024 MB
/// - `"2048K"` or `"2048KB"` → 2 MB
///
/// # Examples
/// ```
/// use cost_profile::MemoryLimit;
///
/// let l = MemoryLimit::from_mb(512.0);
/// assert_eq!(l.as_mb(), 512.0);
///
/// let l = MemoryLimit::parse("1G").unwrap();
/// assert_eq!(l.as_mb(), 1024.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryLimit {
    /// Limit in megabytes.
    mb: f64,
}

impl MemoryLimit {
    /// Creates a limit from a megabyte count.
    pub fn from_mb(mb: f64) -> Self {
        Self { mb }
    }

    /// Creates a limit from gigabytes.
    pub fn from_gb(gb: f64) -> Self {
        Self { mb: gb * 1024.0 }
    }

    /// Returns the limit in megabytes.
    pub fn as_mb(&self) -> f64 {
        self.mb
    }

    /// Returns `true` if the limit is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.mb.is_finite() && self.mb > 0.0
    }

    /// Parses a human-readable limit string. Case-insensitive.
    pub fn parse(s: &str) -> Result<Self, ProfileError> {
        let s = s.trim();
        let invalid = |detail: &str| ProfileError::InvalidLimit {
            input: s.to_string(),
            detail: detail.to_string(),
        };

        if s.is_empty() {
            return Err(invalid("empty string"));
        }

        let s_upper = s.to_uppercase();

        let (num_str, multiplier) = if s_upper.ends_with("GB") {
            (&s[..s.len() - 2], 1024.0)
        } else if s_upper.ends_with('G') {
            (&s[..s.len() - 1], 1024.0)
        } else if s_upper.ends_with("MB") {
            (&s[..s.len() - 2], 1.0)
        } else if s_upper.ends_with('M') {
            (&s[..s.len() - 1], 1.0)
        } else if s_upper.ends_with("KB") {
            (&s[..s.len() - 2], 1.0 / 1024.0)
        } else if s_upper.ends_with('K') {
            (&s[..s.len() - 1], 1.0 / 1024.0)
        } else {
            (s, 1.0)
        };

        let value: f64 = num_str
            .trim()
            .parse()
            .map_err(|_| invalid("expected a number followed by an optional suffix (K, M, G)"))?;

        let limit = Self::from_mb(value * multiplier);
        if !limit.is_valid() {
            return Err(invalid("limit must be finite and greater than zero"));
        }

        Ok(limit)
    }
}

impl fmt::Display for MemoryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mb.fract() == 0.0 {
            write!(f, "{:.0} MB", self.mb)
        } else {
            write!(f, "{} MB", self.mb)
        }
    }
}
