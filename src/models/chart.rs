//! Chart and weekday result types.
//!
//! These are the wire shapes forwarded verbatim as JSON by the HTTP layer,
//! so field names follow the public API contract rather than Rust casing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The nine tracked celestial bodies.
///
/// Rahu and Ketu are the lunar nodes: Rahu is computed from the mean-node
/// model and Ketu from the true-node model. The pairing is intentionally
/// asymmetric and must not be collapsed into a mean node plus 180 degrees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl Planet {
    /// All tracked bodies, in chart order.
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    /// Upper-case wire name, matching the serialized map key.
    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "SUN",
            Planet::Moon => "MOON",
            Planet::Mercury => "MERCURY",
            Planet::Venus => "VENUS",
            Planet::Mars => "MARS",
            Planet::Jupiter => "JUPITER",
            Planet::Saturn => "SATURN",
            Planet::Rahu => "RAHU",
            Planet::Ketu => "KETU",
        }
    }
}

/// Result of a natal chart computation.
///
/// Failures are data, not control flow: every error raised inside the
/// pipeline is normalized into the `Error` variant at the orchestration
/// boundary, and the success variant never carries partial planetary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChartResult {
    Ok {
        /// Birth moment in UTC, ISO-8601.
        utc: String,
        #[serde(rename = "julianDay")]
        julian_day: f64,
        /// Ecliptic longitude per body, degrees in [0, 360), 4 decimals.
        planets: BTreeMap<Planet, f64>,
        /// Ascendant longitude, degrees in [0, 360), 4 decimals.
        ascendant: f64,
    },
    Error { message: String },
}

impl ChartResult {
    pub fn error(message: impl Into<String>) -> Self {
        ChartResult::Error {
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ChartResult::Ok { .. })
    }
}

/// Result of the deterministic weekday calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WeekdayResult {
    Ok {
        /// Normalized Gregorian date, `YYYY-MM-DD`.
        date: String,
        #[serde(rename = "weekdayTh")]
        weekday_th: String,
        #[serde(rename = "weekdayEn")]
        weekday_en: String,
    },
    Error { message: String },
}

impl WeekdayResult {
    pub fn error(message: impl Into<String>) -> Self {
        WeekdayResult::Error {
            message: message.into(),
        }
    }
}
