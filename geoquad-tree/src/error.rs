// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use geoquad_geom::Rectangle;
use thiserror::Error;

/// Errors raised while querying a [`crate::QuadTree`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The queried point falls outside the tree's bounds.
    #[error("point (ilat={ilat}, ilon={ilon}) is outside tree bounds {bounds:?}")]
    OutOfBounds {
        /// Latitude index of the rejected query.
        ilat: i64,
        /// Longitude index of the rejected query.
        ilon: i64,
        /// The tree's root rectangle.
        bounds: Rectangle,
    },

    /// The tree's shape is inconsistent with the rectangle it was built
    /// over — for example an internal node with a missing child where the
    /// rectangle's subdivision says one must exist. This only happens for
    /// trees assembled outside the builder, such as ones decoded from a
    /// corrupt wire stream.
    #[error("structural violation: {0}")]
    Structural(String),
}

/// Convenience alias for results from this crate.
pub type Result<T> = std::result::Result<T, Error>;
