//! Reference-frame quantities: fundamental arguments, obliquity, nutation.
//!
//! Polynomials from IERS Conventions 2010 (Delaunay arguments, Table 5.2e)
//! and the IAU 2006 mean obliquity series. Nutation in longitude uses the
//! four dominant lunisolar terms, sufficient for the arcsecond-level needs
//! of apparent longitudes here.

use std::f64::consts::{PI, TAU};

/// Arcseconds to radians: 1″ = π / (180 × 3600).
pub const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Compute the five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[l, l', F, D, Ω]`:
/// - `l`  mean anomaly of the Moon
/// - `l'` mean anomaly of the Sun
/// - `F`  mean argument of latitude of the Moon
/// - `D`  mean elongation of the Moon from the Sun
/// - `Ω`  mean longitude of the Moon's ascending node
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485_868.249036 + 1_717_915_923.2178 * t + 31.8792 * t2 + 0.051635 * t3
        - 0.00024470 * t4)
        * ARCSEC_TO_RAD;

    let lp = (1_287_104.79305 + 129_596_581.0481 * t - 0.5532 * t2 + 0.000136 * t3
        - 0.00001149 * t4)
        * ARCSEC_TO_RAD;

    let f = (335_779.526232 + 1_739_527_262.8478 * t - 12.7512 * t2 - 0.001037 * t3
        + 0.00000417 * t4)
        * ARCSEC_TO_RAD;

    let d = (1_072_260.70369 + 1_602_961_601.2090 * t - 6.3706 * t2 + 0.006593 * t3
        - 0.00003169 * t4)
        * ARCSEC_TO_RAD;

    let om = (450_160.398036 - 6_962_890.5431 * t + 7.4722 * t2 + 0.007702 * t3
        - 0.00005939 * t4)
        * ARCSEC_TO_RAD;

    [l, lp, f, d, om]
}

/// Mean obliquity of the ecliptic in radians (IAU 2006 series).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    let eps_arcsec = 84_381.406 - 46.836769 * t - 0.0001831 * t * t
        + 0.00200340 * t.powi(3)
        - 0.000000576 * t.powi(4)
        - 0.0000000434 * t.powi(5);
    eps_arcsec * ARCSEC_TO_RAD
}

/// Nutation in longitude Δψ in degrees, dominant-term form.
///
/// The four largest lunisolar terms (Ω, 2L☉, 2L☽, 2Ω) reproduce the full
/// series to better than 0.5″, which is below the output quantum of the
/// chart (4 decimal degrees ≈ 0.36″ but errors enter rounded quantities,
/// not raw angles accumulated further).
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    let [_, _, _, _, om] = delaunay_arguments(t);
    // Mean longitudes of the Sun and the Moon, degrees.
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_arcsec = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    dpsi_arcsec / 3600.0
}

/// Accumulated general precession in ecliptic longitude since J2000.0,
/// degrees (IAU 2006 rate). Converts a J2000-referred longitude to the mean
/// equinox of date; negative for epochs before J2000.
pub fn accumulated_precession_deg(t: f64) -> f64 {
    (5_029.0966 * t + 1.11113 * t * t - 0.000006 * t.powi(3)) / 3600.0
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle in radians to [0, 2π).
pub fn normalize_rad(rad: f64) -> f64 {
    rad.rem_euclid(TAU)
}

/// Round a longitude to the 4 decimal places of the chart contract,
/// wrapping a rounded-up 360.0000 back to 0 so the [0, 360) invariant
/// survives rounding.
pub fn round_longitude_deg(deg: f64) -> f64 {
    let rounded = (deg * 10_000.0).round() / 10_000.0;
    if rounded >= 360.0 {
        rounded - 360.0
    } else {
        rounded
    }
}
