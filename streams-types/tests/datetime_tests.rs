use chrono::{Datelike, TimeZone, Timelike, Utc};
use streams_types::{DateTime, Error};

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_rfc3339_utc() {
    let dt = DateTime::parse("2014-12-12T12:12:12Z").unwrap();
    let inner = dt.inner();
    assert_eq!(inner.year(), 2014);
    assert_eq!(inner.hour(), 12);
    assert_eq!(inner.second(), 12);
}

#[test]
fn parse_rfc3339_with_offset() {
    let dt = DateTime::parse("2015-01-25T12:34:56-08:00").unwrap();
    assert_eq!(dt.inner().offset().local_minus_utc(), -8 * 3600);
}

#[test]
fn parse_minute_precision() {
    let dt = DateTime::parse("2015-01-25T12:34Z").unwrap();
    assert_eq!(dt.inner().minute(), 34);
    assert_eq!(dt.inner().second(), 0);
}

#[test]
fn parse_minute_precision_with_offset() {
    let dt = DateTime::parse("2015-01-25T12:34+02:00").unwrap();
    assert_eq!(dt.inner().offset().local_minus_utc(), 2 * 3600);
}

#[test]
fn parse_rejects_date_only() {
    let err = DateTime::parse("2015-01-25").unwrap_err();
    assert!(matches!(err, Error::InvalidDateTime(_)));
}

#[test]
fn parse_rejects_garbage() {
    assert!(DateTime::parse("yesterday").is_err());
}

// ── Formatting ───────────────────────────────────────────────────

#[test]
fn utc_formats_with_z() {
    let dt = DateTime::from(Utc.with_ymd_and_hms(2020, 5, 17, 8, 0, 0).unwrap());
    assert_eq!(dt.to_rfc3339(), "2020-05-17T08:00:00Z");
}

#[test]
fn offset_is_preserved() {
    let dt = DateTime::parse("2015-01-25T12:34:56-08:00").unwrap();
    assert_eq!(dt.to_string(), "2015-01-25T12:34:56-08:00");
}

#[test]
fn fractional_seconds_are_kept() {
    let dt = DateTime::parse("2015-01-25T12:34:56.250Z").unwrap();
    assert_eq!(dt.to_rfc3339(), "2015-01-25T12:34:56.250Z");
}

#[test]
fn display_parse_roundtrip() {
    let dt = DateTime::parse("2016-05-10T00:00:00Z").unwrap();
    let again = DateTime::parse(&dt.to_string()).unwrap();
    assert_eq!(dt, again);
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_is_chronological() {
    let a = DateTime::parse("2014-12-12T12:12:12Z").unwrap();
    let b = DateTime::parse("2014-12-12T13:12:12+00:30").unwrap();
    assert!(a < b);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serde_roundtrip() {
    let dt = DateTime::parse("2014-12-12T12:12:12Z").unwrap();
    let json = serde_json::to_string(&dt).unwrap();
    assert_eq!(json, r#""2014-12-12T12:12:12Z""#);
    let parsed: DateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, dt);
}
