// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use geoquad_geom::Rectangle;

use crate::error::{Error, Result};

/// A node in a sparse region quadtree.
///
/// A [`Node::Leaf`] asserts that every point in its associated rectangle
/// maps to the same country. A [`Node::Internal`] instead defers to up to
/// four children, ordered NW, NE, SW, SE to match
/// [`geoquad_geom::ChildIndex`]; a `None` slot means the corresponding
/// child rectangle doesn't exist (see [`Rectangle::subdivide`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A uniform region; every point classifies as `country_id`.
    Leaf {
        /// The country identifier shared by every point in this region.
        country_id: u32,
    },
    /// A mixed region, subdivided into up to four children.
    Internal {
        /// Children in NW, NE, SW, SE order.
        children: [Option<Box<Node>>; 4],
    },
}

impl Node {
    /// Build a leaf node.
    #[must_use]
    pub fn leaf(country_id: u32) -> Self {
        Self::Leaf { country_id }
    }

    /// Build an internal node from four optional children.
    #[must_use]
    pub fn internal(children: [Option<Box<Node>>; 4]) -> Self {
        Self::Internal { children }
    }

    /// Whether this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Look up the country id for `(x, y)`, given the rectangle this node
    /// represents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] if the tree's shape doesn't match the
    /// rectangle's subdivision (a missing child where one is required).
    pub fn lookup(&self, x: i64, y: i64, rect: &Rectangle) -> Result<u32> {
        match self {
            Self::Leaf { country_id } => Ok(*country_id),
            Self::Internal { children } => {
                let child_idx = rect.child_index_for_point(x, y).as_usize();
                let child = children[child_idx].as_deref().ok_or_else(|| {
                    Error::Structural(format!(
                        "no child at index {child_idx} for point ({x}, {y}) in rect {rect:?}"
                    ))
                })?;
                let child_rects = rect.subdivide();
                let child_rect = child_rects[child_idx].ok_or_else(|| {
                    Error::Structural(format!(
                        "rectangle {rect:?} has no child rectangle at index {child_idx}"
                    ))
                })?;
                child.lookup(x, y, &child_rect)
            }
        }
    }

    /// Total number of nodes (leaves and internal) in this subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { children } => {
                1 + children
                    .iter()
                    .flatten()
                    .map(|c| c.node_count())
                    .sum::<usize>()
            }
        }
    }

    /// Number of leaf nodes in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { children } => {
                children.iter().flatten().map(|c| c.leaf_count()).sum()
            }
        }
    }

    /// Maximum depth of this subtree; a single leaf has depth 0.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { children } => {
                1 + children
                    .iter()
                    .flatten()
                    .map(|c| c.max_depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: u32) -> Box<Node> {
        Box::new(Node::leaf(id))
    }

    #[test]
    fn leaf_node_reports_itself() {
        let n = Node::leaf(7);
        assert!(n.is_leaf());
        assert_eq!(n.node_count(), 1);
        assert_eq!(n.leaf_count(), 1);
        assert_eq!(n.max_depth(), 0);
    }

    #[test]
    fn leaf_lookup_ignores_the_point() {
        let n = Node::leaf(42);
        let rect = Rectangle::new(0, 10, 0, 10);
        assert_eq!(n.lookup(3, 3, &rect).unwrap(), 42);
        assert_eq!(n.lookup(9, 1, &rect).unwrap(), 42);
    }

    #[test]
    fn internal_node_counts_and_depth() {
        let n = Node::internal([Some(leaf(1)), Some(leaf(2)), Some(leaf(3)), Some(leaf(4))]);
        assert!(!n.is_leaf());
        assert_eq!(n.node_count(), 5);
        assert_eq!(n.leaf_count(), 4);
        assert_eq!(n.max_depth(), 1);
    }

    #[test]
    fn internal_node_tolerates_missing_children() {
        let n = Node::internal([None, None, Some(leaf(1)), None]);
        assert_eq!(n.node_count(), 2);
        assert_eq!(n.leaf_count(), 1);
    }

    #[test]
    fn internal_lookup_dispatches_to_correct_child() {
        let n = Node::internal([Some(leaf(1)), Some(leaf(2)), Some(leaf(3)), Some(leaf(4))]);
        let rect = Rectangle::new(0, 10, 0, 10);
        let (xm, ym) = rect.midpoints();
        assert_eq!(n.lookup(0, ym + 1, &rect).unwrap(), 1); // NW
        assert_eq!(n.lookup(xm + 1, ym + 1, &rect).unwrap(), 2); // NE
        assert_eq!(n.lookup(0, 0, &rect).unwrap(), 3); // SW
        assert_eq!(n.lookup(xm + 1, 0, &rect).unwrap(), 4); // SE
    }

    #[test]
    fn internal_lookup_errors_on_missing_child() {
        let n = Node::internal([None, Some(leaf(2)), Some(leaf(3)), Some(leaf(4))]);
        let rect = Rectangle::new(0, 10, 0, 10);
        let (_, ym) = rect.midpoints();
        let err = n.lookup(0, ym + 1, &rect).unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
    }

    #[test]
    fn deep_tree_reports_correct_max_depth() {
        let inner = Node::internal([Some(leaf(1)), Some(leaf(2)), Some(leaf(3)), Some(leaf(4))]);
        let outer = Node::internal([Some(Box::new(inner)), None, Some(leaf(5)), None]);
        assert_eq!(outer.max_depth(), 2);
        assert_eq!(outer.node_count(), 6);
        assert_eq!(outer.leaf_count(), 5);
    }
}
