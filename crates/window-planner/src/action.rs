// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The admissible `(k, w)` action space.
//!
//! `layer_max` is the length of the longest prefix of layers, in execution
//! order, whose cumulative size fits under the memory limit. The scan stops
//! at the first layer that would overflow; a later, smaller layer is never
//! admitted in its place.
//!
//! ```text
//! actions = { (k, w) : 0 ≤ k ≤ layer_max, 1 ≤ w ≤ layer_max − k }
//! ```
//!
//! Actions are enumerated k-major, w-minor. That order is the search's
//! stable tie-break order.

use cost_profile::CostProfile;
use std::fmt;

/// A candidate configuration: `k` resident layers, prefetch window `w`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Action {
    /// Number of layers kept resident before the streamed tail begins.
    pub k: usize,
    /// Number of tail loads allowed in flight ahead of a release.
    pub w: usize,
}

impl Action {
    pub fn new(k: usize, w: usize) -> Self {
        Self { k, w }
    }

    /// Memory slots the configuration occupies (`k + w`).
    pub fn span(&self) -> usize {
        self.k + self.w
    }

    /// Incumbent tie-break: larger `k + w` wins, then larger `k`.
    pub fn is_more_aggressive_than(&self, other: &Action) -> bool {
        (self.span(), self.k) > (other.span(), other.k)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(k={}, w={})", self.k, self.w)
    }
}

/// Longest prefix of `layer_sizes` whose running sum stays within `limit`.
pub fn resident_capacity(layer_sizes: &[f64], limit: f64) -> usize {
    let mut used = 0.0;
    let mut count = 0;
    for &size in layer_sizes {
        if used + size > limit {
            break;
        }
        used += size;
        count += 1;
    }
    count
}

/// The materialised set of admissible actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpace {
    layer_max: usize,
    actions: Vec<Action>,
}

impl ActionSpace {
    /// Derives `layer_max` from the profile and enumerates every action.
    pub fn build(profile: &CostProfile) -> Self {
        let layer_max =
            resident_capacity(profile.layer_sizes(), profile.memory_limit().as_mb());
        let space = Self::from_layer_max(layer_max);
        tracing::info!(
            "action space: layer_max={}, {} actions",
            space.layer_max,
            space.len(),
        );
        tracing::debug!("actions: {:?}", space.actions);
        space
    }

    /// Enumerates the action space for a known `layer_max`.
    pub fn from_layer_max(layer_max: usize) -> Self {
        let actions = (0..=layer_max)
            .flat_map(|k| (1..=layer_max - k).map(move |w| Action::new(k, w)))
            .collect();
        Self { layer_max, actions }
    }

    pub fn layer_max(&self) -> usize {
        self.layer_max
    }

    /// Actions in enumeration order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// An empty space means no feasible configuration exists.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Position of `action` in enumeration order.
    pub fn index_of(&self, action: Action) -> Option<usize> {
        self.actions.iter().position(|a| *a == action)
    }

    pub fn contains(&self, action: Action) -> bool {
        action.w >= 1
            && action
                .k
                .checked_add(action.w)
                .is_some_and(|span| span <= self.layer_max)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionSpace {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_profile::{MemoryLimit, ProfileDocument};

    fn profile(sizes: Vec<f64>, limit: f64) -> CostProfile {
        let n = sizes.len();
        CostProfile::new(
            ProfileDocument {
                io_speed: 10.0,
                layer_sizes: sizes,
                t_compute: vec![1.0; n],
                t_release: vec![1.0; n],
            },
            MemoryLimit::from_mb(limit),
        )
        .unwrap()
    }

    #[test]
    fn test_resident_capacity_prefix() {
        assert_eq!(resident_capacity(&[10.0, 10.0, 10.0], 25.0), 2);
        assert_eq!(resident_capacity(&[10.0, 10.0, 10.0], 30.0), 3);
        assert_eq!(resident_capacity(&[10.0, 10.0, 10.0], 9.0), 0);
        assert_eq!(resident_capacity(&[], 9.0), 0);
    }

    #[test]
    fn test_resident_capacity_never_skips() {
        // Layer 1 overflows; layer 2 would fit but is not admitted.
        assert_eq!(resident_capacity(&[10.0, 30.0, 5.0], 20.0), 1);
    }

    #[test]
    fn test_resident_capacity_off_by_one() {
        // First three layers sum to limit + 1.
        let sizes = [10.0, 10.0, 10.0];
        assert_eq!(resident_capacity(&sizes, 29.0), 2);
        let extended = [10.0, 10.0, 10.0, 10.0];
        assert_eq!(resident_capacity(&extended, 29.0), 2);
    }

    #[test]
    fn test_build_small_space() {
        let space = ActionSpace::build(&profile(vec![10.0, 10.0, 10.0], 25.0));
        assert_eq!(space.layer_max(), 2);
        assert_eq!(
            space.actions(),
            &[Action::new(0, 1), Action::new(0, 2), Action::new(1, 1)]
        );
    }

    #[test]
    fn test_every_action_fits() {
        let space = ActionSpace::from_layer_max(6);
        // sum_{k=0}^{6} (6 - k) = 21
        assert_eq!(space.len(), 21);
        for a in &space {
            assert!(a.w >= 1);
            assert!(a.span() <= 6);
            assert!(space.contains(*a));
        }
    }

    #[test]
    fn test_enumeration_order_is_k_major() {
        let space = ActionSpace::from_layer_max(3);
        let order: Vec<(usize, usize)> = space.iter().map(|a| (a.k, a.w)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (0, 3), (1, 1), (1, 2), (2, 1)]);
        assert_eq!(space.index_of(Action::new(1, 2)), Some(4));
        assert_eq!(space.index_of(Action::new(3, 1)), None);
    }

    #[test]
    fn test_empty_space() {
        let space = ActionSpace::build(&profile(vec![10.0, 10.0], 5.0));
        assert_eq!(space.layer_max(), 0);
        assert!(space.is_empty());
        assert!(!space.contains(Action::new(0, 1)));
    }

    #[test]
    fn test_single_layer_capacity() {
        let space = ActionSpace::from_layer_max(1);
        assert_eq!(space.actions(), &[Action::new(0, 1)]);
    }

    #[test]
    fn test_aggressiveness_order() {
        assert!(Action::new(2, 1).is_more_aggressive_than(&Action::new(1, 2)));
        assert!(Action::new(0, 3).is_more_aggressive_than(&Action::new(2, 0)));
        assert!(!Action::new(1, 2).is_more_aggressive_than(&Action::new(1, 2)));
        assert!(!Action::new(0, 2).is_more_aggressive_than(&Action::new(1, 2)));
    }

    #[test]
    fn test_contains_rejects_overflowing_action() {
        let space = ActionSpace::from_layer_max(3);
        assert!(!space.contains(Action::new(usize::MAX, 1)));
        assert!(!space.contains(Action::new(1, usize::MAX)));
        assert!(space.contains(Action::new(2, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::new(3, 2).to_string(), "(k=3, w=2)");
    }
}
