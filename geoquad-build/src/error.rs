// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use geoquad_geom::Rectangle;
use thiserror::Error;

/// Errors raised while constructing a [`crate::BuilderConfig`] or running
/// [`crate::QuadTreeBuilder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A [`crate::BuilderConfig`] field was out of its valid range.
    #[error("invalid builder configuration: {0}")]
    Configuration(String),

    /// The builder recursed past `max_depth` without proving the
    /// rectangle uniform.
    ///
    /// This is treated as a hard failure rather than silently emitting an
    /// approximate leaf: a leaf the builder never proved uniform would
    /// break the soundness guarantee that every decoded tree agrees with
    /// the oracle at every point.
    #[error("max depth {max_depth} exceeded while building {rect:?}")]
    MaxDepthExceeded {
        /// The configured depth limit.
        max_depth: u32,
        /// The rectangle being built when the limit was hit.
        rect: Rectangle,
    },
}

/// Convenience alias for results from this crate.
pub type Result<T> = std::result::Result<T, Error>;
