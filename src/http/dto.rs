//! Data Transfer Objects for the HTTP API.
//!
//! The chart request tolerates coordinates arriving as JSON numbers or as
//! strings (query-string callers and spreadsheet-driven clients send
//! strings), normalizing both into floats before validation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::BirthDescriptor;

/// Request body / query parameters for the chart endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub zone: Option<String>,
}

impl From<ChartRequest> for BirthDescriptor {
    fn from(req: ChartRequest) -> Self {
        BirthDescriptor {
            date: req.date,
            time: req.time,
            lat: req.lat,
            lng: req.lng,
            zone: req.zone,
        }
    }
}

/// Accept a float, a numeric string, or null.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Query parameters / request body for the weekday endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekdayRequest {
    #[serde(default)]
    pub date: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Current server time, ISO-8601
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_accept_numbers() {
        let req: ChartRequest =
            serde_json::from_str(r#"{"date":"2000-01-01","lat":13.75,"lng":100.5}"#).unwrap();
        assert_eq!(req.lat, Some(13.75));
        assert_eq!(req.lng, Some(100.5));
    }

    #[test]
    fn coordinates_accept_strings() {
        let req: ChartRequest =
            serde_json::from_str(r#"{"lat":"13.75","lng":"-100.5"}"#).unwrap();
        assert_eq!(req.lat, Some(13.75));
        assert_eq!(req.lng, Some(-100.5));
    }

    #[test]
    fn blank_coordinate_string_is_missing() {
        let req: ChartRequest = serde_json::from_str(r#"{"lat":"  "}"#).unwrap();
        assert_eq!(req.lat, None);
    }

    #[test]
    fn non_numeric_coordinate_is_rejected() {
        let result = serde_json::from_str::<ChartRequest>(r#"{"lat":"north"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_default_to_none() {
        let req: ChartRequest = serde_json::from_str("{}").unwrap();
        let birth: BirthDescriptor = req.into();
        assert!(birth.validated().is_err());
    }
}
