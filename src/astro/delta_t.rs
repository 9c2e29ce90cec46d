//! ΔT = TT − UT correction.
//!
//! The planetary and lunar theories are functions of Terrestrial Time, while
//! callers supply civil (UTC ≈ UT) instants. ΔT bridges the two. This is the
//! piecewise polynomial model of Espenak & Meeus, which stays within a few
//! seconds of the observed values over the 1800–2050 span the ephemeris
//! covers; a one-second ΔT error moves the Moon by well under 0.0001°.

use crate::models::time::J2000_JD;

/// Decimal year for a UT Julian Day, good enough for ΔT segment selection.
fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - J2000_JD) / 365.25
}

/// ΔT in seconds at the given decimal year.
///
/// Piecewise polynomials fitted to the historical record (1800–2005) and the
/// long-term projection (2005–2050). Outside that span the nearest segment
/// is extrapolated; the ephemeris range check upstream keeps inputs inside.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1860.0 {
        let t = year - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if year < 1900.0 {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2) + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    }
}

/// Convert a UT Julian Day to a TT Julian Day.
pub fn jd_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / 86_400.0
}
