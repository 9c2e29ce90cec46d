//! Apparent geocentric solar longitude.
//!
//! Low-accuracy solar theory (Meeus, *Astronomical Algorithms* 2nd ed.,
//! Chapter 25): mean longitude plus the equation of center, corrected for
//! nutation and aberration. Accurate to about 0.01° across the supported
//! ephemeris span, in line with the other analytic theories in this module
//! tree.

use crate::astro::frames::normalize_deg;

/// Geometric mean longitude of the Sun, degrees.
pub fn mean_longitude_deg(t: f64) -> f64 {
    normalize_deg(280.46646 + 36_000.76983 * t + 0.0003032 * t * t)
}

/// Mean anomaly of the Sun, degrees.
pub fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_deg(357.52911 + 35_999.05029 * t - 0.0001537 * t * t)
}

/// Equation of center, degrees.
fn equation_of_center_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0. Includes the constant
/// aberration term and the Ω-dependent nutation correction of the
/// low-accuracy theory.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let true_longitude = mean_longitude_deg(t) + equation_of_center_deg(t);
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_deg(true_longitude - 0.00569 - 0.00478 * omega.sin())
}
