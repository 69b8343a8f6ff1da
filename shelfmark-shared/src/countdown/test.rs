use time::{macros::datetime, Duration};

use super::*;

#[test]
fn zero_is_zero_seconds() {
    assert_eq!(format_time_left(0), "0s");
    assert_eq!(format_time_left(-5000), "0s");
    assert_eq!(format_time_left(999), "0s");
}

#[test]
fn only_largest_three_nonzero_units() {
    let ms = 86_400_000 + 3 * 3_600_000 + 15 * 60_000;
    assert_eq!(format_time_left(ms), "1d 3h 15m");
    // 1d 0h 1m 1s skips the zero hour
    assert_eq!(format_time_left(86_400_000 + 61_000), "1d 1m 1s");
    assert_eq!(format_time_left(90_061_000), "1d 1h 1m");
    // four non-zero units only show three
    assert_eq!(format_time_left(86_400_000 + 3_600_000 + 60_000 + 1000), "1d 1h 1m");
    assert_eq!(format_time_left(7_205_000), "2h 5s");
    assert_eq!(format_time_left(59_000), "59s");
}

#[test]
fn cooldown_pending_shortly_after_borrowing() {
    let now = datetime!(2025-06-21 12:00 UTC);
    let state = ReturnCooldown::compute(now - Duration::hours(23), now);
    assert_eq!(
        state,
        ReturnCooldown::Pending {
            remaining: Duration::hours(1)
        }
    );
    assert!(!state.is_available());
    assert_eq!(state.tooltip(), "Available to return in 1h");
}

#[test]
fn cooldown_available_after_a_day() {
    let now = datetime!(2025-06-21 12:00 UTC);
    let state = ReturnCooldown::compute(now - Duration::hours(25), now);
    assert!(state.is_available());
    assert!(state.is_terminal());
    assert_eq!(state.tooltip(), "Return this book");
    // exactly at the boundary the book is returnable
    assert!(ReturnCooldown::compute(now - Duration::hours(24), now).is_available());
}

#[test]
fn due_status_thresholds() {
    let now = datetime!(2025-06-21 12:00 UTC);
    let in_days = |days: f64| now + Duration::seconds_f64(days * 86_400.0);

    let critical = DueStatus::compute(in_days(2.9), now);
    assert_eq!(critical.urgency(), Urgency::Critical);
    assert!(!critical.is_terminal());

    let warning = DueStatus::compute(in_days(6.9), now);
    assert_eq!(warning.urgency(), Urgency::Warning);
    assert!(!warning.urgency().is_critical());

    let neutral = DueStatus::compute(in_days(8.0), now);
    assert_eq!(neutral.urgency(), Urgency::Neutral);
    assert_eq!(neutral.label(), "Due in 8d");

    // the window edges belong to the more urgent side
    assert_eq!(DueStatus::compute(in_days(3.0), now).urgency(), Urgency::Critical);
    assert_eq!(DueStatus::compute(in_days(7.0), now).urgency(), Urgency::Warning);
}

#[test]
fn overdue_is_terminal_and_critical() {
    let now = datetime!(2025-06-21 12:00 UTC);
    for status in [
        DueStatus::compute(now, now),
        DueStatus::compute(now - Duration::minutes(1), now),
    ] {
        assert_eq!(status, DueStatus::Overdue);
        assert_eq!(status.label(), "Overdue!");
        assert!(status.urgency().is_critical());
        assert!(status.is_terminal());
    }
}
