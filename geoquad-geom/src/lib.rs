// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned integer rectangles over the quantized grid.
//!
//! A [`Rectangle`] is the unit of work for the `geoquad` builder: it names a
//! closed range of grid columns (`x`, longitude indices) and rows (`y`,
//! latitude indices), knows how to split itself into four children in a
//! fixed order, and can produce a small deterministic sample of its points
//! for the builder's quick mixed-region check.

mod rectangle;
mod sampling;

pub use rectangle::{ChildIndex, PointIter, Rectangle};
pub use sampling::rectangle_seed;

/// A grid coordinate. Signed so that intermediate arithmetic (midpoints,
/// offsets) never has to special-case the origin.
pub type GridCoord = i64;
