//! Ascendant, Midheaven and Placidus house cusps.
//!
//! The ascendant and MC follow the standard spherical-astronomy formulas
//! (Meeus Ch. 13) from Local Sidereal Time and the obliquity of date. The
//! intermediate cusps use the Placidus time-based semi-arc trisection,
//! solved by fixed-point iteration.
//!
//! Placidus division is undefined inside the polar circles, where ecliptic
//! degrees exist that never rise or set; that case and any failed cusp
//! iteration surface as [`AstroError::HouseComputation`], never as a
//! defaulted value.

use std::f64::consts::PI;

use crate::astro::delta_t;
use crate::astro::error::AstroError;
use crate::astro::frames::{mean_obliquity_rad, normalize_rad, round_longitude_deg};
use crate::astro::sidereal::{gmst_rad, local_sidereal_time_rad};
use crate::models::JulianDay;

/// Geographic observer location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Full Placidus house frame: angles plus the twelve cusps,
/// all in degrees [0, 360), rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousePositions {
    pub ascendant: f64,
    pub mc: f64,
    pub cusps: [f64; 12],
}

/// Beyond this latitude some ecliptic degrees are circumpolar and the
/// Placidus semi-arc construction breaks down.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

const CUSP_MAX_ITERATIONS: usize = 50;
const CUSP_TOLERANCE_RAD: f64 = 1e-10;

/// Ascendant and MC in radians from a precomputed LST.
///
/// `Asc = atan2(-cos(LST), sin(LST)·cos(ε) + tan(φ)·sin(ε))`
/// `MC  = atan2(sin(LST), cos(LST)·cos(ε))`
pub(crate) fn angles_from_lst(lst: f64, latitude_rad: f64, eps: f64) -> (f64, f64) {
    let asc = f64::atan2(
        -lst.cos(),
        lst.sin() * eps.cos() + latitude_rad.tan() * eps.sin(),
    );
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    (normalize_rad(asc), normalize_rad(mc))
}

/// Diurnal or nocturnal semi-arc in radians.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal {
        ha
    } else {
        PI - ha
    }
}

/// Project a right ascension on the Placidus construction circle to
/// ecliptic longitude, radians in [0, 2π).
fn equator_to_ecliptic_rad(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    normalize_rad(f64::atan2(sin_lon, ra.cos()))
}

/// One Placidus cusp by iterative semi-arc trisection.
///
/// `fraction` is 1/3 or 2/3 of the semi-arc; `above_horizon` selects the
/// diurnal (MC→Asc) or nocturnal (Asc→IC) family. Non-convergence within
/// the iteration budget is an error, not a best-effort value.
fn placidus_cusp_deg(
    ramc: f64,
    lat: f64,
    eps: f64,
    fraction: f64,
    above_horizon: bool,
) -> Result<f64, AstroError> {
    let base = if above_horizon { ramc } else { ramc + PI };
    let mut ra = base + fraction * PI / 2.0;

    for _ in 0..CUSP_MAX_ITERATIONS {
        let dec = (eps.sin() * ra.sin()).asin();
        let semi_arc = semi_arc_rad(dec, lat, above_horizon);
        let new_ra = base + fraction * semi_arc;

        if (new_ra - ra).abs() < CUSP_TOLERANCE_RAD {
            return Ok(equator_to_ecliptic_rad(new_ra, eps).to_degrees());
        }
        ra = new_ra;
    }

    Err(AstroError::HouseComputation(format!(
        "Placidus cusp iteration did not converge at latitude {:.4}°",
        lat.to_degrees()
    )))
}

/// Compute the Placidus house frame for an instant and location.
///
/// `julian_day` is in UT; LST comes from the ERA/GMST chain and the
/// obliquity of date from TT.
pub fn placidus_houses(
    julian_day: JulianDay,
    location: &GeoLocation,
) -> Result<HousePositions, AstroError> {
    if !location.latitude_deg.is_finite() || !location.longitude_deg.is_finite() {
        return Err(AstroError::HouseComputation(
            "non-finite observer coordinates".into(),
        ));
    }
    if location.latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
        return Err(AstroError::HouseComputation(format!(
            "latitude {:.4}° exceeds the {MAX_PLACIDUS_LATITUDE_DEG}° Placidus limit",
            location.latitude_deg
        )));
    }

    let jd = julian_day.value();
    let lst = local_sidereal_time_rad(gmst_rad(jd), location.longitude_rad());
    let t_tt = JulianDay::new(delta_t::jd_tt(jd)).centuries_since_j2000();
    let eps = mean_obliquity_rad(t_tt);
    let lat = location.latitude_rad();

    let (asc_rad, mc_rad) = angles_from_lst(lst, lat, eps);
    let asc_deg = asc_rad.to_degrees();
    let mc_deg = mc_rad.to_degrees();
    // RAMC equals LST by definition.
    let ramc = lst;

    let mut cusps = [0.0_f64; 12];
    cusps[0] = asc_deg;
    cusps[3] = (mc_deg + 180.0).rem_euclid(360.0);
    cusps[6] = (asc_deg + 180.0).rem_euclid(360.0);
    cusps[9] = mc_deg;

    // Houses 11, 12: diurnal semi-arc trisection (MC → Asc).
    cusps[10] = placidus_cusp_deg(ramc, lat, eps, 1.0 / 3.0, true)?;
    cusps[11] = placidus_cusp_deg(ramc, lat, eps, 2.0 / 3.0, true)?;

    // Houses 2, 3: nocturnal semi-arc trisection (Asc → IC).
    cusps[1] = placidus_cusp_deg(ramc, lat, eps, 1.0 / 3.0, false)?;
    cusps[2] = placidus_cusp_deg(ramc, lat, eps, 2.0 / 3.0, false)?;

    // Remaining cusps oppose their computed partners.
    cusps[4] = (cusps[10] + 180.0).rem_euclid(360.0);
    cusps[5] = (cusps[11] + 180.0).rem_euclid(360.0);
    cusps[7] = (cusps[1] + 180.0).rem_euclid(360.0);
    cusps[8] = (cusps[2] + 180.0).rem_euclid(360.0);

    let mut rounded = [0.0_f64; 12];
    for (slot, cusp) in rounded.iter_mut().zip(cusps.iter()) {
        *slot = round_longitude_deg(*cusp);
    }

    Ok(HousePositions {
        ascendant: round_longitude_deg(asc_deg),
        mc: round_longitude_deg(mc_deg),
        cusps: rounded,
    })
}

/// Ascendant longitude in degrees [0, 360), 4 decimals.
pub fn ascendant(
    julian_day: JulianDay,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, AstroError> {
    let houses = placidus_houses(julian_day, &GeoLocation::new(latitude_deg, longitude_deg))?;
    Ok(houses.ascendant)
}
