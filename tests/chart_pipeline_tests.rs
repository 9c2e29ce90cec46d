//! End-to-end properties of the chart computation pipeline.

use astrowise_rust::astro::{ephemeris, normalize, AstroError};
use astrowise_rust::models::{BirthDescriptor, ChartResult, JulianDay, Planet};
use astrowise_rust::services::calc_astro_chart;

fn birth(date: &str, time: &str, zone: &str, lat: f64, lng: f64) -> BirthDescriptor {
    BirthDescriptor {
        date: Some(date.to_string()),
        time: Some(time.to_string()),
        lat: Some(lat),
        lng: Some(lng),
        zone: Some(zone.to_string()),
    }
}

#[test]
fn valid_birth_yields_nine_finite_longitudes_and_an_ascendant() {
    let chart = calc_astro_chart(&birth(
        "1990-05-15",
        "08:30",
        "Asia/Bangkok",
        13.7563,
        100.5018,
    ));
    let ChartResult::Ok {
        planets, ascendant, ..
    } = chart
    else {
        panic!("expected ok chart");
    };

    assert_eq!(planets.len(), 9);
    for planet in Planet::ALL {
        let lon = planets[&planet];
        assert!(
            lon.is_finite() && (0.0..360.0).contains(&lon),
            "{planet:?} = {lon}"
        );
    }
    assert!(ascendant.is_finite() && (0.0..360.0).contains(&ascendant));
}

#[test]
fn julian_day_roundtrip_recovers_the_instant() {
    let instant = normalize::normalize("1984-09-01", "17:45:30", "UTC").unwrap();
    let recovered = instant.julian_day.to_datetime();
    let drift_ms = (recovered - instant.utc).num_milliseconds().abs();
    assert!(drift_ms < 1000, "drifted {drift_ms} ms");
}

#[test]
fn fixed_offset_zones_shift_julian_day_by_the_offset() {
    // Asia/Bangkok has been a fixed UTC+7 for the whole supported span of
    // dates used here; no DST transitions interfere.
    let utc = normalize::normalize("1995-03-10", "06:00", "UTC").unwrap();
    let bangkok = normalize::normalize("1995-03-10", "06:00", "Asia/Bangkok").unwrap();
    let diff = utc.julian_day.value() - bangkok.julian_day.value();
    assert!((diff - 7.0 / 24.0).abs() < 1e-9, "ΔJD = {diff}");
}

#[test]
fn identical_input_yields_bit_identical_output() {
    let descriptor = birth("2001-02-03", "04:05:06", "Europe/Madrid", 40.4168, -3.7038);
    let first = serde_json::to_string(&calc_astro_chart(&descriptor)).unwrap();
    let second = serde_json::to_string(&calc_astro_chart(&descriptor)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_fields_fail_fast_with_an_aggregated_error() {
    let incomplete = BirthDescriptor {
        date: Some("2000-01-01".to_string()),
        ..Default::default()
    };
    let ChartResult::Error { message } = calc_astro_chart(&incomplete) else {
        panic!("expected error");
    };
    assert!(message.contains("missing required fields"), "{message}");
    for field in ["time", "lat", "lng", "zone"] {
        assert!(message.contains(field), "{message} should name {field}");
    }
    // Validation short-circuits: nothing about ephemerides or houses leaks
    // into a missing-field failure.
    assert!(!message.contains("ephemeris"), "{message}");
    assert!(!message.contains("house"), "{message}");
}

#[test]
fn out_of_range_julian_day_is_unavailable_not_wrong() {
    let err = ephemeris::planet_positions(JulianDay::new(2_600_000.0)).unwrap_err();
    assert!(
        matches!(err, AstroError::EphemerisUnavailable { .. }),
        "{err}"
    );

    let ChartResult::Error { message } = calc_astro_chart(&birth(
        "1700-01-01",
        "12:00",
        "UTC",
        0.0,
        0.0,
    )) else {
        panic!("expected error");
    };
    assert!(message.contains("ephemeris"), "{message}");
}

#[test]
fn wire_shape_matches_the_api_contract() {
    let chart = calc_astro_chart(&birth(
        "1971-11-17",
        "06:10",
        "Asia/Bangkok",
        18.7883,
        98.9853,
    ));
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["utc"].as_str().unwrap().starts_with("1971-11-1"));
    assert!(json["julianDay"].as_f64().unwrap() > 2_441_000.0);
    let planets = json["planets"].as_object().unwrap();
    for key in [
        "SUN", "MOON", "MERCURY", "VENUS", "MARS", "JUPITER", "SATURN", "RAHU", "KETU",
    ] {
        assert!(planets.contains_key(key), "planets missing {key}");
    }
    assert!(json["ascendant"].is_f64());
}

#[test]
fn node_pair_keeps_its_model_asymmetry() {
    let ChartResult::Ok { planets, .. } = calc_astro_chart(&birth(
        "1990-05-15",
        "08:30",
        "Asia/Bangkok",
        13.7563,
        100.5018,
    )) else {
        panic!("expected ok chart");
    };
    let rahu = planets[&Planet::Rahu];
    let ketu = planets[&Planet::Ketu];
    let separation = {
        let d = (rahu - ketu).abs();
        d.min(360.0 - d)
    };
    // Mean node vs true node: close together, never a 180° mirror.
    assert!(separation < 3.0, "Rahu {rahu}, Ketu {ketu}");
}

#[test]
fn dst_gap_surfaces_as_error_status() {
    let ChartResult::Error { message } = calc_astro_chart(&birth(
        "2021-03-14",
        "02:30",
        "America/New_York",
        40.7128,
        -74.0060,
    )) else {
        panic!("expected error");
    };
    assert!(message.contains("gap"), "{message}");
}
