// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::{Error, Result};

/// Tuning knobs for [`crate::QuadTreeBuilder`].
///
/// Construct with [`BuilderConfig::new`], which validates every field;
/// there is no way to obtain an invalid `BuilderConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    precision: u32,
    sample_k: usize,
    brute_force_threshold: i64,
    max_depth: u32,
    seed: u64,
    batch_size: usize,
}

impl BuilderConfig {
    /// Number of sample points checked per rectangle before falling back
    /// to brute-force verification or splitting. Matches the reference
    /// default.
    pub const DEFAULT_SAMPLE_K: usize = 16;
    /// Largest rectangle (by point count) the builder will brute-force
    /// verify rather than conservatively split.
    pub const DEFAULT_BRUTE_FORCE_THRESHOLD: i64 = 16_384;
    /// Safety limit on recursion depth.
    pub const DEFAULT_MAX_DEPTH: u32 = 64;
    /// Default global seed for deterministic sampling.
    pub const DEFAULT_SEED: u64 = 42;
    /// Default oracle batch size.
    pub const DEFAULT_BATCH_SIZE: usize = 10_000;

    /// Build a config at the given precision with every other field at
    /// its reference default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if any field is out of range —
    /// unreachable with the defaults, but kept as the single validating
    /// constructor so every other `with_*` builder method can go through
    /// it.
    pub fn new(precision: u32) -> Result<Self> {
        Self {
            precision,
            sample_k: Self::DEFAULT_SAMPLE_K,
            brute_force_threshold: Self::DEFAULT_BRUTE_FORCE_THRESHOLD,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            seed: Self::DEFAULT_SEED,
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
        .validate()
    }

    fn validate(self) -> Result<Self> {
        if self.sample_k < 1 {
            return Err(Error::Configuration(
                "sample_k must be at least 1".to_string(),
            ));
        }
        if self.brute_force_threshold < 1 {
            return Err(Error::Configuration(
                "brute_force_threshold must be at least 1".to_string(),
            ));
        }
        if self.max_depth < 1 {
            return Err(Error::Configuration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.batch_size < 1 {
            return Err(Error::Configuration(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// Set the number of sample points checked per rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `sample_k` is 0.
    pub fn with_sample_k(mut self, sample_k: usize) -> Result<Self> {
        self.sample_k = sample_k;
        self.validate()
    }

    /// Set the largest rectangle (by point count) to brute-force verify.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `threshold` is 0.
    pub fn with_brute_force_threshold(mut self, threshold: i64) -> Result<Self> {
        self.brute_force_threshold = threshold;
        self.validate()
    }

    /// Set the recursion depth safety limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `max_depth` is 0.
    pub fn with_max_depth(mut self, max_depth: u32) -> Result<Self> {
        self.max_depth = max_depth;
        self.validate()
    }

    /// Set the global seed used to derive per-rectangle sampling seeds.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the oracle batch size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `batch_size` is 0.
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        self.batch_size = batch_size;
        self.validate()
    }

    /// Quantization precision the tree is built at.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of sample points checked per rectangle.
    #[must_use]
    pub const fn sample_k(&self) -> usize {
        self.sample_k
    }

    /// Largest rectangle (by point count) the builder brute-force
    /// verifies.
    #[must_use]
    pub const fn brute_force_threshold(&self) -> i64 {
        self.brute_force_threshold
    }

    /// Recursion depth safety limit.
    #[must_use]
    pub const fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Global seed for deterministic sampling.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Oracle batch size.
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_reference_defaults() {
        let config = BuilderConfig::new(2).unwrap();
        assert_eq!(config.precision(), 2);
        assert_eq!(config.sample_k(), BuilderConfig::DEFAULT_SAMPLE_K);
        assert_eq!(config.seed(), BuilderConfig::DEFAULT_SEED);
    }

    #[test]
    fn rejects_zero_sample_k() {
        assert!(matches!(
            BuilderConfig::new(0).unwrap().with_sample_k(0),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn rejects_zero_brute_force_threshold() {
        assert!(matches!(
            BuilderConfig::new(0)
                .unwrap()
                .with_brute_force_threshold(0),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn rejects_zero_max_depth() {
        assert!(matches!(
            BuilderConfig::new(0).unwrap().with_max_depth(0),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn rejects_zero_batch_size() {
        assert!(matches!(
            BuilderConfig::new(0).unwrap().with_batch_size(0),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn builder_methods_compose() {
        let config = BuilderConfig::new(1)
            .unwrap()
            .with_sample_k(8)
            .unwrap()
            .with_seed(7)
            .with_max_depth(10)
            .unwrap();
        assert_eq!(config.sample_k(), 8);
        assert_eq!(config.seed(), 7);
        assert_eq!(config.max_depth(), 10);
    }
}
