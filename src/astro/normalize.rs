//! Time normalization: local birth moment → UTC instant + Julian Day.
//!
//! The zone is resolved through the IANA database, so historical offset and
//! DST rules apply for the specific date rather than a fixed offset.
//!
//! Gap policy: a local time that falls inside a spring-forward gap does not
//! exist in that zone and is rejected with `InvalidTimeInput`. An ambiguous
//! fall-back time resolves to the earlier of the two instants, keeping the
//! mapping from valid input to instant single-valued.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::astro::error::AstroError;
use crate::models::JulianDay;

/// An unambiguous birth moment: UTC instant plus Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInstant {
    pub utc: DateTime<Utc>,
    pub julian_day: JulianDay,
}

/// Resolve a `(date, time, zone)` triple into a [`NormalizedInstant`].
///
/// `date` is Gregorian `YYYY-MM-DD`; `time` is `HH:MM` or `HH:MM:SS`,
/// interpreted by `zone`'s rules for that date.
pub fn normalize(date: &str, time: &str, zone: &str) -> Result<NormalizedInstant, AstroError> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| AstroError::InvalidTimeInput(format!("unknown time zone {zone:?}")))?;

    let naive_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AstroError::InvalidTimeInput(format!("invalid date {date:?}")))?;

    let naive_time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| AstroError::InvalidTimeInput(format!("invalid time {time:?}")))?;

    let local = match tz.from_local_datetime(&naive_date.and_time(naive_time)) {
        LocalResult::Single(dt) => dt,
        // Fall-back repeat: take the earlier offset.
        LocalResult::Ambiguous(earlier, _later) => earlier,
        LocalResult::None => {
            return Err(AstroError::InvalidTimeInput(format!(
                "{date} {time} does not exist in {zone} (DST gap)"
            )));
        }
    };

    let utc = local.with_timezone(&Utc);
    Ok(NormalizedInstant {
        utc,
        julian_day: JulianDay::from_datetime(utc),
    })
}
