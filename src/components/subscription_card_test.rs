use super::*;
use chrono::TimeZone;

#[test]
fn format_display_date_has_no_zero_padding() {
    let date = Utc.with_ymd_and_hms(2024, 3, 5, 18, 45, 0).unwrap();
    assert_eq!(format_display_date(date), "3/5/2024");
}

#[test]
fn format_display_date_two_digit_parts() {
    let date = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
    assert_eq!(format_display_date(date), "12/31/2025");
}

#[test]
fn badge_class_per_label() {
    assert_eq!(badge_class(StateLabel::Active), "status-badge status-badge--active");
    assert_eq!(badge_class(StateLabel::Expired), "status-badge status-badge--expired");
    assert_eq!(badge_class(StateLabel::NotSubscribed), "status-badge status-badge--none");
}
