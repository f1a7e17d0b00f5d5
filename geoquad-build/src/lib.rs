// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offline quadtree construction.
//!
//! [`QuadTreeBuilder`] turns an [`geoquad_oracle::Oracle`] into a
//! [`geoquad_tree::QuadTree`] by recursively proving rectangles uniform
//! (by sampling, then brute force for small rectangles) or splitting them
//! into quadrants when they aren't.

mod builder;
mod config;
mod error;
mod stats;

pub use builder::{build_quadtree, QuadTreeBuilder};
pub use config::BuilderConfig;
pub use error::{Error, Result};
pub use stats::BuilderStats;
