// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashSet;

use md5::{Digest, Md5};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rectangle::Rectangle;

/// Derive a deterministic sampling seed for a rectangle from a global seed.
///
/// Hashes the global seed together with the rectangle's bounds, so that two
/// builder runs with the same global seed sample the same points for the
/// same rectangle regardless of traversal order, while sibling rectangles
/// get independent-looking seeds.
#[must_use]
pub fn rectangle_seed(global_seed: u64, rect: &Rectangle) -> u32 {
    let mut hasher = Md5::new();
    hasher.update(global_seed.to_be_bytes());
    hasher.update(rect.x0.to_be_bytes());
    hasher.update(rect.x1.to_be_bytes());
    hasher.update(rect.y0.to_be_bytes());
    hasher.update(rect.y1.to_be_bytes());
    let digest = hasher.finalize();
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

impl Rectangle {
    /// A small deterministic sample of up to `k` distinct points in this
    /// rectangle, used by the builder's quick mixed-region check before it
    /// pays for a full scan.
    ///
    /// The sample always includes the four corners and the center, then
    /// adds two points at the rectangle's horizontal thirds (on the `ym`
    /// row) when it's wide enough, and two more at its vertical thirds (on
    /// the `xm` column) when it's tall enough — each independently of the
    /// other dimension — then fills any remaining budget with points drawn
    /// from a PRNG seeded by `seed`. The same `(rect, seed)` pair always
    /// yields the same sample.
    #[must_use]
    pub fn sample_points(&self, k: usize, seed: u32) -> Vec<(i64, i64)> {
        let mut points = Vec::with_capacity(k);
        let mut seen = HashSet::with_capacity(k);
        let mut push = |p: (i64, i64), points: &mut Vec<(i64, i64)>| {
            if seen.insert(p) {
                points.push(p);
            }
        };

        push((self.x0, self.y0), &mut points);
        push((self.x1, self.y0), &mut points);
        push((self.x0, self.y1), &mut points);
        push((self.x1, self.y1), &mut points);

        let (xm, ym) = self.midpoints();
        push((xm, ym), &mut points);

        if self.width() > 2 {
            push((self.x0 + self.width() / 3, ym), &mut points);
            push((self.x0 + 2 * self.width() / 3, ym), &mut points);
        }
        if self.height() > 2 {
            push((xm, self.y0 + self.height() / 3), &mut points);
            push((xm, self.y0 + 2 * self.height() / 3), &mut points);
        }

        if points.len() < k {
            let mut rng = StdRng::seed_from_u64(u64::from(seed));
            let total_points = self.point_count();
            // Bounded retry budget: a rectangle smaller than k points would
            // otherwise spin forever looking for fresh draws.
            let max_attempts = k.saturating_mul(20).max(100) as i64;
            let mut attempts = 0i64;
            while (points.len() as i64) < total_points
                && points.len() < k
                && attempts < max_attempts
            {
                let x = rng.gen_range(self.x0..=self.x1);
                let y = rng.gen_range(self.y0..=self.y1);
                push((x, y), &mut points);
                attempts += 1;
            }
        }

        points.truncate(k);
        points
    }
}
