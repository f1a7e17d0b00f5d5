// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use clap::ValueEnum;
use geoquad_oracle::{CheckerboardOracle, CircleOracle, HemisphereOracle, Oracle, RectangleOracle};

/// Which built-in mock oracle to build against.
///
/// There is no real-data oracle in this tool: the Natural Earth /
/// spatial-database lookup a production build would use is a separate
/// concern from the quadtree compiler itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MockOracleKind {
    /// North/south split with an ocean band at the equator.
    Hemisphere,
    /// Five circular countries.
    Circle,
    /// Five axis-aligned rectangular countries.
    Rectangle,
    /// Dense alternating checkerboard, for stress testing.
    Checkerboard,
}

impl MockOracleKind {
    /// Instantiate the chosen oracle at the given precision.
    #[must_use]
    pub fn build(self, precision: u32) -> Box<dyn Oracle> {
        match self {
            Self::Hemisphere => Box::new(HemisphereOracle::new(precision)),
            Self::Circle => Box::new(CircleOracle::new(precision)),
            Self::Rectangle => Box::new(RectangleOracle::new(precision)),
            Self::Checkerboard => Box::new(CheckerboardOracle::new(precision, 10)),
        }
    }
}
