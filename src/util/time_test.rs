#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn formats_rfc3339_in_utc() {
    assert_eq!(format_timestamp("2024-01-01T00:00:00Z"), "2024-01-01 00:00:00 UTC");
}

#[test]
fn converts_offsets_to_utc() {
    assert_eq!(
        format_timestamp("2024-03-05T14:30:15.123456+02:00"),
        "2024-03-05 12:30:15 UTC"
    );
}

#[test]
fn accepts_naive_and_date_only_values() {
    assert_eq!(format_timestamp("2024-01-01T08:09:10"), "2024-01-01 08:09:10 UTC");
    assert_eq!(format_timestamp("2024-01-01"), "2024-01-01 00:00:00 UTC");
}

#[test]
fn unparseable_input_is_invalid_date() {
    assert_eq!(format_timestamp("yesterday"), INVALID_DATE);
    assert_eq!(format_timestamp(""), INVALID_DATE);
}

#[test]
fn accepts_naive_fractional_seconds() {
    assert_eq!(format_timestamp("2024-01-01T08:09:10.123456"), "2024-01-01 08:09:10 UTC");
}

#[test]
fn accepts_space_separated_values() {
    assert_eq!(format_timestamp("2024-01-01 08:09:10"), "2024-01-01 08:09:10 UTC");
    assert_eq!(format_timestamp("2024-01-01 08:09:10.5"), "2024-01-01 08:09:10 UTC");
    assert_eq!(format_timestamp("2024-01-01 08:09:10+02:00"), "2024-01-01 06:09:10 UTC");
}
