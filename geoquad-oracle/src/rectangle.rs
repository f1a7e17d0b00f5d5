// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use geoquad_quantize::scale;

use crate::{Oracle, OCEAN_ID};

struct Country {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    country_id: u32,
}

/// Five axis-aligned rectangular "countries", everything else ocean.
///
/// Every border coincides with a possible quadtree split line, so a
/// builder that handles this oracle correctly can still need deep splits
/// near corners where two rectangles nearly touch.
pub struct RectangleOracle {
    countries: Vec<Country>,
}

impl RectangleOracle {
    /// Build the oracle for a given quantization precision.
    #[must_use]
    pub fn new(precision: u32) -> Self {
        let q = scale(precision);
        let countries = vec![
            Country { x0: 60 * q, y0: 100 * q, x1: 120 * q, y1: 140 * q, country_id: 1 },
            Country { x0: 110 * q, y0: 50 * q, x1: 150 * q, y1: 90 * q, country_id: 2 },
            Country { x0: 170 * q, y0: 115 * q, x1: 210 * q, y1: 160 * q, country_id: 3 },
            Country { x0: 255 * q, y0: 100 * q, x1: 300 * q, y1: 140 * q, country_id: 4 },
            Country { x0: 290 * q, y0: 40 * q, x1: 330 * q, y1: 75 * q, country_id: 5 },
        ];
        Self { countries }
    }
}

impl Oracle for RectangleOracle {
    fn lookup(&self, ilat: i64, ilon: i64) -> u32 {
        for country in &self.countries {
            if country.x0 <= ilon && ilon <= country.x1 && country.y0 <= ilat && ilat <= country.y1
            {
                return country.country_id;
            }
        }
        OCEAN_ID
    }

    fn country_codes(&self) -> HashMap<u32, String> {
        HashMap::from([
            (OCEAN_ID, "OC".to_string()),
            (1, "US".to_string()),
            (2, "BR".to_string()),
            (3, "EU".to_string()),
            (4, "CN".to_string()),
            (5, "AU".to_string()),
        ])
    }
}
