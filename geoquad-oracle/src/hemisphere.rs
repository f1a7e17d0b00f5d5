// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use geoquad_quantize::scale;

use crate::{Oracle, OCEAN_ID};

/// A coarse north/south split with an ocean band straddling the equator.
///
/// The simplest possible non-uniform oracle: useful for exercising the
/// builder's split logic without the cost of a denser mock.
pub struct HemisphereOracle {
    mid_lat: i64,
    ocean_band: i64,
}

impl HemisphereOracle {
    /// Build the oracle for a given quantization precision.
    #[must_use]
    pub fn new(precision: u32) -> Self {
        let q = scale(precision);
        Self {
            mid_lat: 90 * q,
            ocean_band: 5 * q,
        }
    }
}

impl Oracle for HemisphereOracle {
    fn lookup(&self, ilat: i64, _ilon: i64) -> u32 {
        if (ilat - self.mid_lat).abs() < self.ocean_band {
            return OCEAN_ID;
        }
        if ilat > self.mid_lat {
            1
        } else {
            2
        }
    }

    fn country_codes(&self) -> HashMap<u32, String> {
        HashMap::from([
            (OCEAN_ID, "OC".to_string()),
            (1, "NO".to_string()),
            (2, "SO".to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_of_band_is_country_one() {
        let oracle = HemisphereOracle::new(2);
        assert_eq!(oracle.lookup(180 * 100, 0), 1);
    }

    #[test]
    fn south_of_band_is_country_two() {
        let oracle = HemisphereOracle::new(2);
        assert_eq!(oracle.lookup(0, 0), 2);
    }

    #[test]
    fn equator_band_is_ocean() {
        let oracle = HemisphereOracle::new(2);
        assert_eq!(oracle.lookup(90 * 100, 0), OCEAN_ID);
    }

    #[test]
    fn country_codes_cover_all_three_ids() {
        let oracle = HemisphereOracle::new(2);
        let codes = oracle.country_codes();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes[&OCEAN_ID], "OC");
    }
}
