//! Deterministic weekday calculator: public-surface tests.

use astrowise_rust::models::WeekdayResult;
use astrowise_rust::services::resolve_weekday;

fn expect_ok(input: &str) -> serde_json::Value {
    let result = resolve_weekday(input);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "ok", "{input:?} -> {json}");
    json
}

#[test]
fn known_historical_date() {
    let json = expect_ok("17/11/1971");
    assert_eq!(json["date"], "1971-11-17");
    assert_eq!(json["weekdayEn"], "Wednesday");
    assert_eq!(json["weekdayTh"], "พุธ");
}

#[test]
fn iso_shape() {
    let json = expect_ok("2025-03-05");
    assert_eq!(json["date"], "2025-03-05");
    assert_eq!(json["weekdayEn"], "Wednesday");
}

#[test]
fn buddhist_era_with_thai_month_name() {
    let json = expect_ok("1 มกราคม 2568");
    assert_eq!(json["date"], "2025-01-01");
    assert_eq!(json["weekdayEn"], "Wednesday");
}

#[test]
fn buddhist_era_numeric() {
    let json = expect_ok("17/11/2514");
    assert_eq!(json["date"], "1971-11-17");
    assert_eq!(json["weekdayEn"], "Wednesday");
}

#[test]
fn slash_and_dash_are_interchangeable() {
    assert_eq!(
        resolve_weekday("17/11/1971"),
        resolve_weekday("17-11-1971")
    );
}

#[test]
fn error_shape_on_unparsable_input() {
    let json = serde_json::to_value(resolve_weekday("once upon a time")).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("unsupported"));
}

#[test]
fn deterministic_without_a_clock() {
    // Far past and far future dates resolve identically on every call.
    for input in ["1/1/1600", "31/12/2400", "29/2/2000"] {
        let first = resolve_weekday(input);
        let second = resolve_weekday(input);
        assert_eq!(first, second);
        assert!(matches!(first, WeekdayResult::Ok { .. }), "{input:?}");
    }
}

#[test]
fn leap_day_weekday() {
    // 2000-02-29 was a Tuesday.
    let json = expect_ok("29/2/2000");
    assert_eq!(json["weekdayEn"], "Tuesday");
}
