//! Birth descriptor: the input to the chart pipeline.

use serde::{Deserialize, Serialize};

use crate::astro::AstroError;

/// Raw birth descriptor as received from a caller.
///
/// All fields are optional at this level so that an incomplete request can
/// be reported with a single aggregated error naming every absent field,
/// rather than failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BirthDescriptor {
    /// Calendar date, Gregorian `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Local clock time `HH:MM[:SS]`, interpreted in `zone`.
    pub time: Option<String>,
    /// Latitude in decimal degrees.
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    pub lng: Option<f64>,
    /// IANA time zone identifier, e.g. `Asia/Bangkok`.
    pub zone: Option<String>,
}

/// A birth descriptor with all five fields present and coordinates in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBirth {
    pub date: String,
    pub time: String,
    pub zone: String,
    pub lat: f64,
    pub lng: f64,
}

impl BirthDescriptor {
    /// Validate presence and coordinate ranges.
    ///
    /// Empty strings count as missing, matching the API contract where a
    /// blank query parameter is no parameter at all. No computation happens
    /// until this passes.
    pub fn validated(&self) -> Result<ValidatedBirth, AstroError> {
        let mut missing: Vec<&'static str> = Vec::new();
        if is_blank(&self.date) {
            missing.push("date");
        }
        if is_blank(&self.time) {
            missing.push("time");
        }
        if self.lat.is_none() {
            missing.push("lat");
        }
        if self.lng.is_none() {
            missing.push("lng");
        }
        if is_blank(&self.zone) {
            missing.push("zone");
        }

        match (
            missing.is_empty(),
            &self.date,
            &self.time,
            &self.zone,
            self.lat,
            self.lng,
        ) {
            (true, Some(date), Some(time), Some(zone), Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(AstroError::InvalidCoordinates(format!(
                        "latitude {lat} outside [-90, 90]"
                    )));
                }
                if !(-180.0..=180.0).contains(&lng) {
                    return Err(AstroError::InvalidCoordinates(format!(
                        "longitude {lng} outside [-180, 180]"
                    )));
                }
                Ok(ValidatedBirth {
                    date: date.trim().to_string(),
                    time: time.trim().to_string(),
                    zone: zone.trim().to_string(),
                    lat,
                    lng,
                })
            }
            _ => Err(AstroError::MissingFields {
                fields: missing.into_iter().map(String::from).collect(),
            }),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> BirthDescriptor {
        BirthDescriptor {
            date: Some("1990-05-15".into()),
            time: Some("08:30".into()),
            lat: Some(13.7563),
            lng: Some(100.5018),
            zone: Some("Asia/Bangkok".into()),
        }
    }

    #[test]
    fn complete_descriptor_validates() {
        let birth = full().validated().unwrap();
        assert_eq!(birth.date, "1990-05-15");
        assert_eq!(birth.zone, "Asia/Bangkok");
    }

    #[test]
    fn missing_fields_are_aggregated() {
        let birth = BirthDescriptor {
            date: Some("2000-01-01".into()),
            ..Default::default()
        };
        let err = birth.validated().unwrap_err();
        let msg = err.to_string();
        for field in ["time", "lat", "lng", "zone"] {
            assert!(msg.contains(field), "{msg:?} should name {field}");
        }
        assert!(!msg.contains("date"), "{msg:?} should not name date");
    }

    #[test]
    fn blank_string_counts_as_missing() {
        let mut birth = full();
        birth.time = Some("  ".into());
        let err = birth.validated().unwrap_err();
        assert!(err.to_string().contains("time"));
    }

    #[test]
    fn out_of_range_latitude_rejected() {
        let mut birth = full();
        birth.lat = Some(90.5);
        let err = birth.validated().unwrap_err();
        assert!(matches!(err, AstroError::InvalidCoordinates(_)));
    }

    #[test]
    fn out_of_range_longitude_rejected() {
        let mut birth = full();
        birth.lng = Some(-181.0);
        assert!(birth.validated().is_err());
    }
}
