//! Earth Rotation Angle, Greenwich Mean Sidereal Time, Local Sidereal Time.
//!
//! Functions take UT Julian Dates. |UT1 − UTC| is kept under 0.9 s by leap
//! seconds, which corresponds to less than 0.004″ of sidereal rotation, so
//! JD(UTC) is used directly without an Earth-orientation table.
//!
//! ERA: IERS Conventions 2010, Eq. 5.15.
//! GMST polynomial: Capitaine et al. 2003.

use std::f64::consts::TAU;

use crate::astro::frames::ARCSEC_TO_RAD;
use crate::models::time::J2000_JD;

/// Earth Rotation Angle at a given UT Julian Date, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × (JD − J2000))
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_5 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT Julian Date, radians in [0, 2π).
///
/// GMST = ERA + polynomial(T), T in Julian centuries from J2000.0.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / 36_525.0;

    let poly_arcsec = 0.014506
        + 4_612.156534 * t
        + 1.3915817 * t.powi(2)
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn era_at_j2000_noon() {
        // ERA at JD 2451545.0 is about 280.46°.
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((theta_deg - 280.46).abs() < 0.1, "ERA = {theta_deg}°");
    }

    #[test]
    fn gmst_at_j2000_midnight() {
        // 2000-01-01 0h UT: GMST ≈ 6h 39m 52s ≈ 99.97°.
        let gmst_deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((gmst_deg - 99.97).abs() < 0.1, "GMST = {gmst_deg}°");
    }

    #[test]
    fn sidereal_day_gains_on_solar_day() {
        // GMST advances ~0.9856° more than 360° per civil day.
        let g1 = gmst_rad(2_451_545.0);
        let g2 = gmst_rad(2_451_546.0);
        let advance = (g2 - g1).rem_euclid(TAU).to_degrees();
        assert!((advance - 0.9856).abs() < 0.01, "daily gain = {advance}°");
    }

    #[test]
    fn lst_applies_east_longitude() {
        let gmst = 1.0;
        let lst = local_sidereal_time_rad(gmst, PI / 2.0);
        assert!((lst - (gmst + PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn angles_stay_in_range() {
        for &jd in &[2_378_496.5, 2_451_545.0, 2_460_000.5, 2_469_807.5] {
            let era = earth_rotation_angle_rad(jd);
            let gmst = gmst_rad(jd);
            assert!((0.0..TAU).contains(&era));
            assert!((0.0..TAU).contains(&gmst));
        }
    }
}
