use super::date::{default_date, format_date, format_date_or_default};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_default_rendering() {
    assert_eq!(default_date(&at(2024, 3, 7, 0, 0, 0)), "2024-03-07");
    assert_eq!(default_date(&at(2024, 3, 7, 14, 5, 9)), "2024-03-07 14:05:09");
    assert_eq!(format_date_or_default(&at(2024, 3, 7, 0, 0, 0), None), "2024-03-07");
    assert_eq!(format_date_or_default(&at(2024, 3, 7, 0, 0, 0), Some("")), "2024-03-07");
}

#[test]
fn test_custom_patterns() {
    let dt = at(2024, 3, 7, 14, 5, 9);
    let cases = [
        ("yyyy-MM-dd", "2024-03-07"),
        ("yyyyMMdd", "20240307"),
        ("yy.M.d", "24.3.7"),
        ("HH:mm:ss", "14:05:09"),
        ("H:m:s", "14:5:9"),
        ("hh:mm tt", "02:05 PM"),
        ("h t", "2 P"),
        ("MMM dd", "Mar 07"),
        ("MMMM", "March"),
        ("ddd", "Thu"),
        ("dddd", "Thursday"),
        ("yyyy_MM_dd-HHmmss", "2024_03_07-140509"),
        ("fff", "000"),
        ("FFF", ""),
    ];
    for (pattern, expected) in cases {
        assert_eq!(format_date(&dt, pattern).as_deref(), Some(expected), "{pattern}");
    }
}

#[test]
fn test_literals_and_escapes() {
    let dt = at(2024, 3, 7, 14, 5, 9);
    assert_eq!(format_date(&dt, "'Day' d").as_deref(), Some("Day 7"));
    assert_eq!(format_date(&dt, "\"at\" HH").as_deref(), Some("at 14"));
    assert_eq!(format_date(&dt, "\\y yyyy").as_deref(), Some("y 2024"));
    assert_eq!(format_date(&dt, "%d").as_deref(), Some("7"));
    assert_eq!(format_date(&dt, "yyyy年MM月dd日").as_deref(), Some("2024年03月07日"));
}

#[test]
fn test_standard_formats() {
    let dt = at(2024, 3, 7, 14, 5, 9);
    assert_eq!(format_date(&dt, "d").as_deref(), Some("03/07/2024"));
    assert_eq!(format_date(&dt, "D").as_deref(), Some("Thursday, 07 March 2024"));
    assert_eq!(format_date(&dt, "s").as_deref(), Some("2024-03-07T14:05:09"));
    assert_eq!(format_date(&dt, "t").as_deref(), Some("14:05"));
    assert_eq!(format_date(&dt, "T").as_deref(), Some("14:05:09"));
    assert_eq!(format_date(&dt, "u").as_deref(), Some("2024-03-07 14:05:09Z"));
    assert_eq!(format_date(&dt, "M").as_deref(), Some("March 07"));
    assert_eq!(format_date(&dt, "y").as_deref(), Some("2024 March"));
}

#[test]
fn test_invalid_patterns() {
    let dt = at(2024, 3, 7, 14, 5, 9);
    assert_eq!(format_date(&dt, "'unterminated"), None);
    assert_eq!(format_date(&dt, "yyyy\\"), None);
    assert_eq!(format_date(&dt, "q"), None);
    assert_eq!(format_date(&dt, "ffffffff"), None);
    assert_eq!(format_date(&dt, "%"), None);
    assert_eq!(format_date_or_default(&dt, Some("'oops")), "2024-03-07 14:05:09");
    assert_eq!(format_date_or_default(&at(2024, 1, 2, 0, 0, 0), Some("q")), "2024-01-02");
}
