//! Chart orchestration.
//!
//! This is the boundary where failures stop being control flow and become
//! data: whatever goes wrong inside validation, normalization, ephemeris or
//! house computation, the caller receives a `ChartResult` with an error
//! status and a message, never an `Err` and never a partial chart.

use chrono::SecondsFormat;
use log::warn;

use crate::astro::houses::GeoLocation;
use crate::astro::{ephemeris, houses, normalize, AstroError};
use crate::models::{BirthDescriptor, ChartResult};

/// Compute a natal chart from a raw birth descriptor.
///
/// Validation runs first and short-circuits: an incomplete descriptor is
/// reported with every missing field named, and no ephemeris or house work
/// happens. The ephemeris query and the house computation share the Julian
/// Day but not data; they run back to back (both are sub-millisecond pure
/// computations, so there is nothing to gain from spawning tasks).
pub fn calc_astro_chart(birth: &BirthDescriptor) -> ChartResult {
    match compute_chart(birth) {
        Ok(chart) => chart,
        Err(err) => {
            warn!("chart computation failed: {err}");
            ChartResult::error(err.to_string())
        }
    }
}

fn compute_chart(birth: &BirthDescriptor) -> Result<ChartResult, AstroError> {
    let birth = birth.validated()?;
    let instant = normalize::normalize(&birth.date, &birth.time, &birth.zone)?;

    let planets = ephemeris::planet_positions(instant.julian_day)?;
    let frame = houses::placidus_houses(
        instant.julian_day,
        &GeoLocation::new(birth.lat, birth.lng),
    )?;

    Ok(ChartResult::Ok {
        utc: instant.utc.to_rfc3339_opts(SecondsFormat::Secs, true),
        julian_day: instant.julian_day.value(),
        planets,
        ascendant: frame.ascendant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Planet;

    fn bangkok_birth() -> BirthDescriptor {
        BirthDescriptor {
            date: Some("1990-05-15".into()),
            time: Some("08:30".into()),
            lat: Some(13.7563),
            lng: Some(100.5018),
            zone: Some("Asia/Bangkok".into()),
        }
    }

    #[test]
    fn valid_birth_produces_full_chart() {
        let chart = calc_astro_chart(&bangkok_birth());
        let ChartResult::Ok {
            utc,
            julian_day,
            planets,
            ascendant,
        } = chart
        else {
            panic!("expected ok chart");
        };
        assert_eq!(utc, "1990-05-15T01:30:00Z");
        assert!(julian_day > 2_448_000.0 && julian_day < 2_448_100.0);
        assert_eq!(planets.len(), 9);
        for planet in Planet::ALL {
            let lon = planets[&planet];
            assert!(lon.is_finite() && (0.0..360.0).contains(&lon));
        }
        assert!((0.0..360.0).contains(&ascendant));
    }

    #[test]
    fn missing_fields_short_circuit() {
        // The date lies far outside the ephemeris span, but the missing
        // fields must be reported before any ephemeris range check runs.
        let birth = BirthDescriptor {
            date: Some("1500-01-01".into()),
            ..Default::default()
        };
        let ChartResult::Error { message } = calc_astro_chart(&birth) else {
            panic!("expected error");
        };
        assert!(message.contains("missing required fields"), "{message}");
        for field in ["time", "lat", "lng", "zone"] {
            assert!(message.contains(field), "{message}");
        }
        assert!(!message.contains("ephemeris"), "{message}");
    }

    #[test]
    fn bad_zone_becomes_error_status() {
        let mut birth = bangkok_birth();
        birth.zone = Some("Not/AZone".into());
        let ChartResult::Error { message } = calc_astro_chart(&birth) else {
            panic!("expected error");
        };
        assert!(message.contains("time zone"), "{message}");
    }

    #[test]
    fn out_of_range_date_becomes_error_status() {
        let mut birth = bangkok_birth();
        birth.date = Some("1750-06-01".into());
        let ChartResult::Error { message } = calc_astro_chart(&birth) else {
            panic!("expected error");
        };
        assert!(message.contains("ephemeris"), "{message}");
    }

    #[test]
    fn polar_birth_becomes_error_status() {
        let mut birth = bangkok_birth();
        birth.lat = Some(78.22);
        birth.lng = Some(15.65);
        let ChartResult::Error { message } = calc_astro_chart(&birth) else {
            panic!("expected error");
        };
        assert!(message.contains("house computation"), "{message}");
    }

    #[test]
    fn identical_inputs_yield_identical_charts() {
        let first = serde_json::to_string(&calc_astro_chart(&bangkok_birth())).unwrap();
        let second = serde_json::to_string(&calc_astro_chart(&bangkok_birth())).unwrap();
        assert_eq!(first, second);
    }
}
