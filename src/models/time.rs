use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Julian Day representation.
/// JD 0 = 4713 BC January 1, 12:00 UT (proleptic Julian calendar);
/// the fractional part carries time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

/// JD of the Unix epoch, 1970-01-01 00:00:00 UTC.
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// JD of the J2000.0 epoch, 2000-01-01 12:00:00 TT.
pub const J2000_JD: f64 = 2_451_545.0;

impl JulianDay {
    /// Create a new JD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.0 - J2000_JD) / 36_525.0
    }

    /// Compute the JD of a proleptic-Gregorian calendar moment.
    ///
    /// `day_fraction` is the elapsed fraction of the civil day in [0, 1):
    /// `(h + m/60 + s/3600) / 24`. The date part uses the closed-form
    /// Gregorian Julian Day Number (valid for any year >= -4713 in this
    /// convention; the domain here never leaves positive years).
    pub fn from_calendar(year: i32, month: u32, day: u32, day_fraction: f64) -> Self {
        let a = (14 - month as i64) / 12;
        let y = year as i64 + 4800 - a;
        let m = month as i64 + 12 * a - 3;
        let jdn = day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
        // jdn is anchored to noon; shift back half a day for midnight.
        Self(jdn as f64 - 0.5 + day_fraction)
    }

    /// Create from a chrono UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        use chrono::Datelike;
        let seconds = dt.second() as f64 + dt.nanosecond() as f64 / 1e9;
        let day_fraction =
            (dt.hour() as f64 + dt.minute() as f64 / 60.0 + seconds / 3600.0) / 24.0;
        Self::from_calendar(dt.year(), dt.month(), dt.day(), day_fraction)
    }

    /// Convert back to a chrono UTC datetime.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        let secs = (self.0 - JD_UNIX_EPOCH) * 86_400.0;
        let secs_i64 = secs.floor() as i64;
        // Rounding may land exactly on the next second; clamp rather than
        // hand chrono an out-of-range nanosecond count.
        let nanos = (((secs - secs.floor()) * 1e9).round() as u32).min(999_999_999);
        DateTime::from_timestamp(secs_i64, nanos).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

#[cfg(test)]
mod tests {
    use super::JulianDay;
    use chrono::{TimeZone, Utc};

    #[test]
    fn jd_at_j2000_noon() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = JulianDay::from_datetime(dt);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_known_epochs() {
        // 1999-01-01 00:00 UTC -> 2451179.5
        let jd = JulianDay::from_calendar(1999, 1, 1, 0.0);
        assert!((jd.value() - 2_451_179.5).abs() < 1e-9);

        // 1987-01-27 00:00 UTC -> 2446822.5
        let jd = JulianDay::from_calendar(1987, 1, 27, 0.0);
        assert!((jd.value() - 2_446_822.5).abs() < 1e-9);

        // Unix epoch -> 2440587.5
        let jd = JulianDay::from_calendar(1970, 1, 1, 0.0);
        assert!((jd.value() - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn calendar_and_timestamp_paths_agree() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 8, 45, 30).unwrap();
        let from_cal = JulianDay::from_datetime(dt);
        let from_ts = JulianDay::new(dt.timestamp() as f64 / 86_400.0 + 2_440_587.5);
        assert!((from_cal.value() - from_ts.value()).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_within_one_second() {
        let dt = Utc.with_ymd_and_hms(1971, 11, 17, 23, 59, 59).unwrap();
        let jd = JulianDay::from_datetime(dt);
        let back = jd.to_datetime();
        let diff = (back - dt).num_milliseconds().abs();
        assert!(diff < 1000, "round-trip drifted {diff} ms");
    }

    #[test]
    fn centuries_at_epoch() {
        let t = JulianDay::new(2_451_545.0).centuries_since_j2000();
        assert_eq!(t, 0.0);
        let t = JulianDay::new(2_451_545.0 + 36_525.0).centuries_since_j2000();
        assert!((t - 1.0).abs() < 1e-12);
    }
}
