//! Tests for clock-time parsing and formatting.

use timetable_engine::{format_clock, parse_clock, split_decimal};

fn assert_close(actual: Option<f64>, expected: f64) {
    let value = actual.expect("should parse");
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        value
    );
}

#[test]
fn afternoon_time_parses_to_decimal() {
    // 1:55 PM = 13 + 55/60
    assert_close(parse_clock("1:55 PM"), 13.0 + 55.0 / 60.0);
}

#[test]
fn midnight_is_zero() {
    assert_close(parse_clock("12:00 AM"), 0.0);
}

#[test]
fn noon_stays_twelve() {
    assert_close(parse_clock("12:30 PM"), 12.5);
}

#[test]
fn morning_hour_unchanged() {
    assert_close(parse_clock("9:05 AM"), 9.0 + 5.0 / 60.0);
}

#[test]
fn case_insensitive_period() {
    assert_close(parse_clock("9:05 am"), 9.0 + 5.0 / 60.0);
    assert_close(parse_clock("1:55 pm"), 13.0 + 55.0 / 60.0);
}

#[test]
fn no_space_before_period() {
    assert_close(parse_clock("1:55PM"), 13.0 + 55.0 / 60.0);
}

#[test]
fn missing_period_reads_as_24_hour() {
    assert_close(parse_clock("13:30"), 13.5);
    assert_close(parse_clock("0:15"), 0.25);
}

#[test]
fn pattern_found_inside_longer_text() {
    assert_close(parse_clock("Period 3 (9:35 AM)"), 9.0 + 35.0 / 60.0);
}

#[test]
fn unparsable_text_is_none_not_a_default() {
    assert_eq!(parse_clock("TBA"), None);
    assert_eq!(parse_clock(""), None);
    assert_eq!(parse_clock("noon"), None);
}

#[test]
fn out_of_range_minutes_rejected() {
    assert_eq!(parse_clock("9:99"), None);
}

#[test]
fn out_of_range_hours_rejected() {
    assert_eq!(parse_clock("25:00"), None);
    // A period-qualified hour above 12 would land outside [0,24).
    assert_eq!(parse_clock("13:00 PM"), None);
    assert_eq!(parse_clock("0:30 AM"), None);
}

#[test]
fn split_decimal_rounds_minutes() {
    // 10.67 ≈ 10:40
    let (h, m) = split_decimal(10.67);
    assert_eq!((h, m), (10, 40));
}

#[test]
fn split_decimal_carries_a_full_hour() {
    let (h, m) = split_decimal(10.99999);
    assert_eq!((h, m), (11, 0));
}

#[test]
fn format_clock_whole_hours() {
    assert_eq!(format_clock(9.0), "9 AM");
    assert_eq!(format_clock(0.0), "12 AM");
    assert_eq!(format_clock(12.0), "12 PM");
    assert_eq!(format_clock(15.0), "3 PM");
}

#[test]
fn format_clock_fractional_hours() {
    assert_eq!(format_clock(13.0 + 55.0 / 60.0), "1:55 PM");
    assert_eq!(format_clock(9.5), "9:30 AM");
}
