// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::{debug, trace};

use geoquad_geom::{rectangle_seed, Rectangle};
use geoquad_oracle::Oracle;
use geoquad_quantize::grid_dimensions;
use geoquad_tree::{Node, QuadTree};

use crate::config::BuilderConfig;
use crate::error::{Error, Result};
use crate::stats::BuilderStats;

/// Builds a sparse quadtree from an [`Oracle`] using a prove-or-split
/// strategy: sample a handful of points to catch obviously mixed regions
/// cheaply, brute-force verify the rest when small enough, and split
/// conservatively otherwise.
pub struct QuadTreeBuilder<'o, O: Oracle + ?Sized> {
    oracle: &'o O,
    config: BuilderConfig,
    stats: BuilderStats,
    full_bounds: Rectangle,
}

impl<'o, O: Oracle + ?Sized> QuadTreeBuilder<'o, O> {
    /// Create a builder covering the full grid at `config`'s precision.
    #[must_use]
    pub fn new(oracle: &'o O, config: BuilderConfig) -> Self {
        let (max_ilon, max_ilat) = grid_dimensions(config.precision());
        Self {
            oracle,
            config,
            stats: BuilderStats::default(),
            full_bounds: Rectangle::new(0, max_ilon, 0, max_ilat),
        }
    }

    /// Build the complete tree, resetting and returning fresh stats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaxDepthExceeded`] if recursion reaches
    /// `config.max_depth()` without proving a rectangle uniform.
    pub fn build(&mut self) -> Result<QuadTree> {
        self.stats = BuilderStats::default();
        debug!(
            "building tree at precision {} over {:?}",
            self.config.precision(),
            self.full_bounds
        );
        let root = self.build_node(self.full_bounds, 0)?;
        debug!(
            "built tree: {} nodes, {} leaves, max depth {}",
            self.stats.nodes_created, self.stats.leaves_created, self.stats.max_depth_reached
        );
        Ok(QuadTree::new(root, self.full_bounds, self.config.precision()))
    }

    /// Stats from the most recent [`QuadTreeBuilder::build`] call.
    #[must_use]
    pub const fn stats(&self) -> &BuilderStats {
        &self.stats
    }

    fn sample_rectangle(&mut self, rect: &Rectangle) -> Vec<u32> {
        let seed = rectangle_seed(self.config.seed(), rect);
        let points = rect.sample_points(self.config.sample_k(), seed);
        self.stats.oracle_calls += points.len() as u64;
        // Rectangle points are (x=ilon, y=ilat); the oracle wants (ilat, ilon).
        let oracle_points: Vec<(i64, i64)> = points.iter().map(|&(x, y)| (y, x)).collect();
        let mut ids = self.oracle.lookup_batch(&oracle_points);
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn brute_force_verify(&mut self, rect: &Rectangle, expected: u32) -> bool {
        self.stats.brute_force_verifications += 1;
        let batch_size = self.config.batch_size();
        let mut batch = Vec::with_capacity(batch_size);
        for (x, y) in rect.iter_points() {
            batch.push((y, x));
            if batch.len() >= batch_size {
                self.stats.oracle_calls += batch.len() as u64;
                if self.oracle.lookup_batch(&batch).iter().any(|&id| id != expected) {
                    return false;
                }
                batch.clear();
            }
        }
        if !batch.is_empty() {
            self.stats.oracle_calls += batch.len() as u64;
            if self.oracle.lookup_batch(&batch).iter().any(|&id| id != expected) {
                return false;
            }
        }
        true
    }

    fn build_node(&mut self, rect: Rectangle, depth: u32) -> Result<Node> {
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(depth);

        if rect.is_single_point() {
            let country_id = self.oracle.lookup(rect.y0, rect.x0);
            self.stats.oracle_calls += 1;
            self.stats.nodes_created += 1;
            self.stats.leaves_created += 1;
            return Ok(Node::leaf(country_id));
        }

        if depth >= self.config.max_depth() {
            return Err(Error::MaxDepthExceeded {
                max_depth: self.config.max_depth(),
                rect,
            });
        }

        let sample_ids = self.sample_rectangle(&rect);
        if sample_ids.len() > 1 {
            self.stats.sampling_detected_mixed += 1;
            trace!("{rect:?} mixed by sampling, splitting");
            return self.split_node(rect, depth);
        }

        let candidate = sample_ids[0];

        if rect.point_count() <= self.config.brute_force_threshold() {
            if self.brute_force_verify(&rect, candidate) {
                self.stats.nodes_created += 1;
                self.stats.leaves_created += 1;
                return Ok(Node::leaf(candidate));
            }
            self.stats.brute_force_detected_mixed += 1;
            trace!("{rect:?} mixed by brute force, splitting");
            self.split_node(rect, depth)
        } else {
            trace!("{rect:?} too large to brute force, splitting conservatively");
            self.split_node(rect, depth)
        }
    }

    fn split_node(&mut self, rect: Rectangle, depth: u32) -> Result<Node> {
        let child_rects = rect.subdivide();
        let mut children: [Option<Box<Node>>; 4] = [None, None, None, None];
        for (idx, child_rect) in child_rects.into_iter().enumerate() {
            if let Some(child_rect) = child_rect {
                children[idx] = Some(Box::new(self.build_node(child_rect, depth + 1)?));
            }
        }
        self.stats.nodes_created += 1;
        self.stats.internal_nodes_created += 1;
        Ok(Node::internal(children))
    }
}

/// Build a tree over the full grid at `config`'s precision, returning the
/// tree and the stats collected while building it.
///
/// # Errors
///
/// Same as [`QuadTreeBuilder::build`].
pub fn build_quadtree<O: Oracle + ?Sized>(
    oracle: &O,
    config: BuilderConfig,
) -> Result<(QuadTree, BuilderStats)> {
    let mut builder = QuadTreeBuilder::new(oracle, config);
    let tree = builder.build()?;
    Ok((tree, *builder.stats()))
}
