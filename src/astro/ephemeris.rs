//! Nine-body ephemeris facade.
//!
//! Dispatches each tracked body to its analytic theory and merges the
//! results into one mapping. The call is all-or-nothing: either every body
//! evaluates to a finite longitude or the whole query fails, and no partial
//! chart is ever exposed.

use std::collections::BTreeMap;

use crate::astro::delta_t;
use crate::astro::error::AstroError;
use crate::astro::frames::round_longitude_deg;
use crate::astro::{lunar, planets, solar};
use crate::models::{JulianDay, Planet};

/// First covered instant: 1800-01-01 00:00.
pub const EPHEMERIS_MIN_JD: f64 = 2_378_496.5;
/// First instant past the covered span: 2050-01-01 00:00.
pub const EPHEMERIS_MAX_JD: f64 = 2_469_807.5;

/// Ecliptic longitude of one body at `t` centuries TT since J2000.0.
fn body_longitude_deg(planet: Planet, t: f64) -> Result<f64, String> {
    match planet {
        Planet::Sun => Ok(solar::apparent_longitude_deg(t)),
        Planet::Moon => Ok(lunar::apparent_longitude_deg(t)),
        // The node pair intentionally mixes models: Rahu tracks the mean
        // node, Ketu the true node. Not an offset pair.
        Planet::Rahu => Ok(lunar::mean_node_deg(t)),
        Planet::Ketu => Ok(lunar::true_node_deg(t)),
        Planet::Mercury
        | Planet::Venus
        | Planet::Mars
        | Planet::Jupiter
        | Planet::Saturn => planets::apparent_longitude_deg(planet, t),
    }
}

/// Compute ecliptic longitudes for all nine tracked bodies.
///
/// `julian_day` is in UT. Fails with [`AstroError::EphemerisUnavailable`]
/// outside the fitted 1800–2050 span (the mean-element theory degrades
/// rather than erroring, so the range is enforced here instead of
/// extrapolating) and with [`AstroError::EphemerisComputation`] on any
/// internal numerical failure.
pub fn planet_positions(julian_day: JulianDay) -> Result<BTreeMap<Planet, f64>, AstroError> {
    let jd = julian_day.value();
    if !jd.is_finite() || !(EPHEMERIS_MIN_JD..EPHEMERIS_MAX_JD).contains(&jd) {
        return Err(AstroError::EphemerisUnavailable {
            jd,
            min: EPHEMERIS_MIN_JD,
            max: EPHEMERIS_MAX_JD,
        });
    }

    let t = JulianDay::new(delta_t::jd_tt(jd)).centuries_since_j2000();

    let mut positions = BTreeMap::new();
    for planet in Planet::ALL {
        let longitude = body_longitude_deg(planet, t).map_err(|message| {
            AstroError::EphemerisComputation {
                body: planet.name(),
                message,
            }
        })?;
        if !longitude.is_finite() {
            return Err(AstroError::EphemerisComputation {
                body: planet.name(),
                message: format!("non-finite longitude {longitude}"),
            });
        }
        positions.insert(planet, round_longitude_deg(longitude));
    }
    Ok(positions)
}
