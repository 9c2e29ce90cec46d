//! Error taxonomy for the chart computation core.

use thiserror::Error;

/// Errors raised anywhere in the chart pipeline or the weekday utility.
///
/// All variants are caught at the orchestration boundary and converted into
/// a structured error result; none of them escapes to an HTTP caller as a
/// panic or a bare 500.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstroError {
    /// One or more required birth fields are absent.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// Date/time/zone combination cannot be resolved to a UTC instant.
    #[error("invalid date/time input: {0}")]
    InvalidTimeInput(String),

    /// Latitude or longitude outside its legal range.
    #[error("coordinates out of range: {0}")]
    InvalidCoordinates(String),

    /// Requested instant is outside the span covered by the ephemeris.
    #[error(
        "ephemeris does not cover Julian Day {jd:.5} (supported range {min:.1} to {max:.1})"
    )]
    EphemerisUnavailable { jd: f64, min: f64, max: f64 },

    /// Internal numerical failure while evaluating a body position.
    #[error("ephemeris computation failed for {body}: {message}")]
    EphemerisComputation { body: &'static str, message: String },

    /// Ascendant/house computation is undefined or did not converge.
    #[error("house computation failed: {0}")]
    HouseComputation(String),

    /// Weekday utility input matched none of the supported date shapes.
    #[error("unsupported date format: {0:?}")]
    UnparsableDate(String),
}
