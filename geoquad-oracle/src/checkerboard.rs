// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use geoquad_quantize::scale;

use crate::Oracle;

/// An alternating two-country checkerboard, for stress-testing the
/// builder: every cell boundary is a country border, so the tree can
/// never prove a region uniform above the cell size.
pub struct CheckerboardOracle {
    cell_size: i64,
}

impl CheckerboardOracle {
    /// Build the oracle for a given quantization precision and the number
    /// of checkerboard cells per degree.
    #[must_use]
    pub fn new(precision: u32, grid_size: i64) -> Self {
        let q = scale(precision);
        Self {
            cell_size: q / grid_size,
        }
    }
}

impl Oracle for CheckerboardOracle {
    fn lookup(&self, ilat: i64, ilon: i64) -> u32 {
        if self.cell_size == 0 {
            return 1;
        }
        let cell_x = ilon.div_euclid(self.cell_size);
        let cell_y = ilat.div_euclid(self.cell_size);
        if (cell_x + cell_y).rem_euclid(2) == 0 {
            1
        } else {
            2
        }
    }

    fn country_codes(&self) -> HashMap<u32, String> {
        HashMap::from([(1, "A1".to_string()), (2, "A2".to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_cells_alternate() {
        let oracle = CheckerboardOracle::new(0, 10);
        let a = oracle.lookup(0, 0);
        let b = oracle.lookup(0, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn degenerate_cell_size_is_uniform() {
        let oracle = CheckerboardOracle::new(0, 100);
        assert_eq!(oracle.lookup(5, 5), 1);
        assert_eq!(oracle.lookup(-5, -5), 1);
    }
}
