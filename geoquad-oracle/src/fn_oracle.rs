// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use crate::Oracle;

/// Wraps a plain closure as an [`Oracle`], for quick ad hoc tests that
/// don't need a dedicated mock type.
pub struct FnOracle<F> {
    func: F,
    codes: HashMap<u32, String>,
}

impl<F> FnOracle<F>
where
    F: Fn(i64, i64) -> u32,
{
    /// Wrap `func` with no country codes.
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            func,
            codes: HashMap::new(),
        }
    }

    /// Wrap `func` with the given country code table.
    #[must_use]
    pub fn with_codes(func: F, codes: HashMap<u32, String>) -> Self {
        Self { func, codes }
    }
}

impl<F> Oracle for FnOracle<F>
where
    F: Fn(i64, i64) -> u32,
{
    fn lookup(&self, ilat: i64, ilon: i64) -> u32 {
        (self.func)(ilat, ilon)
    }

    fn country_codes(&self) -> HashMap<u32, String> {
        self.codes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_a_closure() {
        let oracle = FnOracle::new(|ilat, _ilon| if ilat > 0 { 1 } else { 2 });
        assert_eq!(oracle.lookup(5, 0), 1);
        assert_eq!(oracle.lookup(-5, 0), 2);
    }

    #[test]
    fn carries_explicit_country_codes() {
        let codes = HashMap::from([(1, "A1".to_string())]);
        let oracle = FnOracle::with_codes(|_, _| 1, codes.clone());
        assert_eq!(oracle.country_codes(), codes);
    }
}
