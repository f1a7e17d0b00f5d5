// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Counters collected while building a tree, useful for tuning
/// [`crate::BuilderConfig`] and for `geoquad-cli`'s `stats` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderStats {
    /// Total nodes created (leaves plus internal nodes).
    pub nodes_created: u64,
    /// Leaf nodes created.
    pub leaves_created: u64,
    /// Internal nodes created.
    pub internal_nodes_created: u64,
    /// Total oracle point lookups issued, including batched ones.
    pub oracle_calls: u64,
    /// Number of rectangles that went through brute-force verification.
    pub brute_force_verifications: u64,
    /// Deepest recursion level reached.
    pub max_depth_reached: u32,
    /// Rectangles split because sampling alone found more than one
    /// country.
    pub sampling_detected_mixed: u64,
    /// Rectangles split because brute-force verification, not sampling,
    /// found more than one country.
    pub brute_force_detected_mixed: u64,
}
