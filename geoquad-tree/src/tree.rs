// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use geoquad_geom::Rectangle;
use geoquad_quantize::quantize;

use crate::error::{Error, Result};
use crate::node::Node;

/// A sparse quadtree classifying every point of a quantized grid by
/// country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadTree {
    root: Node,
    bounds: Rectangle,
    precision: u32,
}

impl QuadTree {
    /// Assemble a tree from its root node, bounding rectangle and the
    /// quantization precision it was built at.
    #[must_use]
    pub fn new(root: Node, bounds: Rectangle, precision: u32) -> Self {
        Self {
            root,
            bounds,
            precision,
        }
    }

    /// The root node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// The rectangle covering the whole tree.
    #[must_use]
    pub const fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    /// The quantization precision this tree was built at.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Look up the country id for quantized grid indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(ilat, ilon)` falls outside the
    /// tree's bounds, or [`Error::Structural`] if the tree's shape is
    /// inconsistent with its bounds.
    pub fn lookup_indices(&self, ilat: i64, ilon: i64) -> Result<u32> {
        if !self.bounds.contains(ilon, ilat) {
            return Err(Error::OutOfBounds {
                ilat,
                ilon,
                bounds: self.bounds,
            });
        }
        self.root.lookup(ilon, ilat, &self.bounds)
    }

    /// Look up the country id for WGS84 coordinates, quantizing them at
    /// this tree's precision first.
    ///
    /// # Errors
    ///
    /// Same as [`QuadTree::lookup_indices`].
    pub fn lookup_coords(&self, lat: f64, lon: f64) -> Result<u32> {
        let (ilat, ilon) = quantize(lat, lon, self.precision);
        self.lookup_indices(ilat, ilon)
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of leaf nodes in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Maximum depth of the tree, counted in subdivisions from the root.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.root.max_depth()
    }
}
