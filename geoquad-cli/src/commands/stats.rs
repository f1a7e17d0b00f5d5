// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use geoquad_quantize::{grid_dimensions, scale};

use crate::cli::StatsArgs;
use crate::error::Result;

/// Print grid statistics for a precision without building anything.
pub fn run(args: &StatsArgs) -> Result<()> {
    let q = scale(args.precision);
    let (max_ilon, max_ilat) = grid_dimensions(args.precision);
    let total_points = (max_ilon + 1) as u64 * (max_ilat + 1) as u64;

    println!("Grid statistics for precision {}:", args.precision);
    println!("  Q = 10^{} = {q}", args.precision);
    println!("  Max longitude index: {max_ilon}");
    println!("  Max latitude index: {max_ilat}");
    println!("  Total grid points: {total_points}");
    println!("  Grid cell size: {} degrees", 1.0 / q as f64);

    Ok(())
}
