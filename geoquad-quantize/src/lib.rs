// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WGS84 coordinate quantization.
//!
//! Converts between continuous `(lat, lon)` degrees and the integer grid
//! indices `(ilat, ilon)` that the rest of `geoquad` operates on.
//!
//! Precision `p` is a count of decimal places; `Q = 10^p` is the number of
//! grid cells per degree. `ilon` ranges over `[0, 360*Q]` and `ilat` over
//! `[0, 180*Q]`, both inclusive.
//!
//! Rounding uses round-half-away-from-zero ([`rhaz`]), matching the
//! semantics of C's `round()`. This is normative: a downstream decoder that
//! rounds differently would query lattice points the builder never proved
//! uniform.

/// Grid cell count per degree at precision `p`, i.e. `10^p`.
#[inline]
#[must_use]
pub fn scale(precision: u32) -> i64 {
    10i64.pow(precision)
}

/// Maximum valid `(ilon, ilat)` indices at a given precision.
#[inline]
#[must_use]
pub fn grid_dimensions(precision: u32) -> (i64, i64) {
    let q = scale(precision);
    (360 * q, 180 * q)
}

/// Round half away from zero, matching C's `round()`.
///
/// ```
/// use geoquad_quantize::rhaz;
/// assert_eq!(rhaz(0.5), 1);
/// assert_eq!(rhaz(-0.5), -1);
/// assert_eq!(rhaz(2.4), 2);
/// ```
#[inline]
#[must_use]
pub fn rhaz(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5).floor() as i64
    } else {
        (x - 0.5).ceil() as i64
    }
}

/// Clamp `(lat, lon)` into the closed WGS84 ranges `[-90, 90] x [-180, 180]`.
#[inline]
#[must_use]
pub fn clamp(lat: f64, lon: f64) -> (f64, f64) {
    (lat.clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0))
}

/// Quantize WGS84 `(lat, lon)` to integer grid indices `(ilat, ilon)`.
///
/// Out-of-range inputs are clamped, never rejected; the final saturating
/// clamp on the indices absorbs floating-point rounding at the poles and
/// the dateline.
#[must_use]
pub fn quantize(lat: f64, lon: f64, precision: u32) -> (i64, i64) {
    let (lat, lon) = clamp(lat, lon);
    let q = scale(precision);
    let (max_ilon, max_ilat) = grid_dimensions(precision);

    let ilon = rhaz((lon + 180.0) * q as f64).clamp(0, max_ilon);
    let ilat = rhaz((lat + 90.0) * q as f64).clamp(0, max_ilat);
    (ilat, ilon)
}

/// Recover the lattice point `(lat, lon)` a pair of grid indices represents.
///
/// This is the lattice point itself, not the center of its cell.
#[must_use]
pub fn dequantize(ilat: i64, ilon: i64, precision: u32) -> (f64, f64) {
    let q = scale(precision) as f64;
    (ilat as f64 / q - 90.0, ilon as f64 / q - 180.0)
}

/// Quantize and immediately dequantize, for call sites that want both the
/// indices and the lattice point without a second call.
#[must_use]
pub fn quantize_to_cell(lat: f64, lon: f64, precision: u32) -> ((i64, i64), (f64, f64)) {
    let (ilat, ilon) = quantize(lat, lon, precision);
    let cell = dequantize(ilat, ilon, precision);
    ((ilat, ilon), cell)
}
