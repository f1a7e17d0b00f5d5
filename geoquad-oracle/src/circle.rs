// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use geoquad_quantize::scale;

use crate::{Oracle, OCEAN_ID};

struct Circle {
    center_ilon: i64,
    center_ilat: i64,
    radius: i64,
    country_id: u32,
}

/// Five circular "countries" scattered across the grid, everything else
/// ocean. Exercises curved-border refinement — no axis-aligned border ever
/// lands exactly on a quadtree split line.
pub struct CircleOracle {
    circles: Vec<Circle>,
}

impl CircleOracle {
    /// Build the oracle for a given quantization precision.
    #[must_use]
    pub fn new(precision: u32) -> Self {
        let q = scale(precision);
        let circles = vec![
            Circle { center_ilon: 150 * q, center_ilat: 120 * q, radius: 20 * q, country_id: 1 },
            Circle { center_ilon: 190 * q, center_ilat: 135 * q, radius: 15 * q, country_id: 2 },
            Circle { center_ilon: 280 * q, center_ilat: 125 * q, radius: 25 * q, country_id: 3 },
            Circle { center_ilon: 130 * q, center_ilat: 60 * q, radius: 18 * q, country_id: 4 },
            Circle { center_ilon: 310 * q, center_ilat: 55 * q, radius: 12 * q, country_id: 5 },
        ];
        Self { circles }
    }
}

impl Oracle for CircleOracle {
    fn lookup(&self, ilat: i64, ilon: i64) -> u32 {
        for circle in &self.circles {
            let dx = ilon - circle.center_ilon;
            let dy = ilat - circle.center_ilat;
            if dx * dx + dy * dy <= circle.radius * circle.radius {
                return circle.country_id;
            }
        }
        OCEAN_ID
    }

    fn country_codes(&self) -> HashMap<u32, String> {
        HashMap::from([
            (OCEAN_ID, "OC".to_string()),
            (1, "C1".to_string()),
            (2, "C2".to_string()),
            (3, "C3".to_string()),
            (4, "C4".to_string()),
            (5, "C5".to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_circle_one_is_country_one() {
        let oracle = CircleOracle::new(2);
        let q = scale(2);
        assert_eq!(oracle.lookup(120 * q, 150 * q), 1);
    }

    #[test]
    fn far_from_every_circle_is_ocean() {
        let oracle = CircleOracle::new(2);
        assert_eq!(oracle.lookup(0, 0), OCEAN_ID);
    }

    #[test]
    fn exactly_on_the_boundary_is_inside() {
        let oracle = CircleOracle::new(0);
        let q = scale(0);
        assert_eq!(oracle.lookup(55, 310 * q + 12 * q), 5);
    }
}
