//! Deterministic weekday calculator.
//!
//! Resolves loosely formatted Thai/Gregorian date strings to a normalized
//! ISO date and weekday name using closed-form integer arithmetic only: no
//! system clock, no calendar library, no time zone. Buddhist-era years are
//! recognized by magnitude (BE 2400+ = CE 1857+), so the conversion never
//! depends on "today".

use lazy_static::lazy_static;
use regex::Regex;

use crate::astro::AstroError;
use crate::models::WeekdayResult;

const WEEKDAYS_TH: [&str; 7] = [
    "อาทิตย์",
    "จันทร์",
    "อังคาร",
    "พุธ",
    "พฤหัสบดี",
    "ศุกร์",
    "เสาร์",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Thai month names and abbreviations.
const THAI_MONTHS: [(&str, u32); 24] = [
    ("มกราคม", 1),
    ("ม.ค.", 1),
    ("กุมภาพันธ์", 2),
    ("ก.พ.", 2),
    ("มีนาคม", 3),
    ("มี.ค.", 3),
    ("เมษายน", 4),
    ("เม.ย.", 4),
    ("พฤษภาคม", 5),
    ("พ.ค.", 5),
    ("มิถุนายน", 6),
    ("มิ.ย.", 6),
    ("กรกฎาคม", 7),
    ("ก.ค.", 7),
    ("สิงหาคม", 8),
    ("ส.ค.", 8),
    ("กันยายน", 9),
    ("ก.ย.", 9),
    ("ตุลาคม", 10),
    ("ต.ค.", 10),
    ("พฤศจิกายน", 11),
    ("พ.ย.", 11),
    ("ธันวาคม", 12),
    ("ธ.ค.", 12),
];

lazy_static! {
    /// `D/M/Y` or `D-M-Y`, 1–2 digit day/month, 2 or 4 digit year.
    static ref DAY_FIRST: Regex =
        Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$").expect("valid regex");
    /// `Y/M/D` or `Y-M-D`, 4-digit year first.
    static ref YEAR_FIRST: Regex =
        Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$").expect("valid regex");
    /// `D <month-name> Y` with a named month.
    static ref NAMED_MONTH: Regex =
        Regex::new(r"^(\d{1,2})\s+(\S+)\s+(\d{2,4})$").expect("valid regex");
}

/// Resolve a free-form date string to its ISO date and weekday names.
///
/// Parse failures are returned as an error-status result; this function
/// never fails outward.
pub fn resolve_weekday(input: &str) -> WeekdayResult {
    match compute_weekday(input) {
        Ok(result) => result,
        Err(err) => WeekdayResult::error(err.to_string()),
    }
}

fn compute_weekday(input: &str) -> Result<WeekdayResult, AstroError> {
    let (year, month, day) = parse_date(input)?;
    let index = weekday_index(year, month, day);
    Ok(WeekdayResult::Ok {
        date: format!("{year:04}-{month:02}-{day:02}"),
        weekday_th: WEEKDAYS_TH[index].to_string(),
        weekday_en: WEEKDAYS_EN[index].to_string(),
    })
}

/// Try the three supported shapes in order; first match wins.
fn parse_date(input: &str) -> Result<(i64, u32, u32), AstroError> {
    // Commas become whitespace, runs of whitespace collapse to one space.
    let cleaned = input
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let unsupported = || AstroError::UnparsableDate(input.trim().to_string());

    let (day, month, year) = if let Some(caps) = DAY_FIRST.captures(&cleaned) {
        (
            parse_number(&caps[1])?,
            parse_number(&caps[2])? as u32,
            normalize_year(parse_number(&caps[3])?),
        )
    } else if let Some(caps) = YEAR_FIRST.captures(&cleaned) {
        (
            parse_number(&caps[3])?,
            parse_number(&caps[2])? as u32,
            normalize_year(parse_number(&caps[1])?),
        )
    } else if let Some(caps) = NAMED_MONTH.captures(&cleaned) {
        (
            parse_number(&caps[1])?,
            month_from_name(&caps[2]).ok_or_else(unsupported)?,
            normalize_year(parse_number(&caps[3])?),
        )
    } else {
        return Err(unsupported());
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(unsupported());
    }
    Ok((year, month, day as u32))
}

fn parse_number(digits: &str) -> Result<i64, AstroError> {
    digits
        .parse::<i64>()
        .map_err(|_| AstroError::UnparsableDate(digits.to_string()))
}

/// Buddhist-era and two-digit year normalization.
///
/// Years above 2400 are BE and shift back by 543; two-digit years anchor to
/// the BE 2500s (e.g. 68 → BE 2568 → CE 2025). This is a fixed rule, not a
/// pivot relative to the current date.
fn normalize_year(raw: i64) -> i64 {
    if raw > 2400 {
        raw - 543
    } else if raw < 100 {
        (2500 + raw) - 543
    } else {
        raw
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let needle = name.trim().to_lowercase();
    if needle.chars().all(|c| c.is_ascii_digit()) {
        return needle.parse::<u32>().ok();
    }
    THAI_MONTHS
        .iter()
        .find(|(label, _)| *label == needle)
        .map(|&(_, month)| month)
}

/// Sakamoto's congruence: zero-indexed weekday, 0 = Sunday.
///
/// Pure integer arithmetic over the proleptic Gregorian calendar; Euclidean
/// division keeps it correct for any year, sign included.
fn weekday_index(year: i64, month: u32, day: u32) -> usize {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let mut y = year;
    if month < 3 {
        y -= 1;
    }
    let sum = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + OFFSETS[(month - 1) as usize]
        + day as i64;
    sum.rem_euclid(7) as usize
}
