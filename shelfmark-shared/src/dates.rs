//! Human readable dates for borrow and due dates

use time::{OffsetDateTime, UtcOffset};

/// Format a date like `Saturday 21 June 2025 5:24 p.m.`
///
/// The date is shown in `offset`, which on the client is the offset of the browser.
pub fn format_date(date: OffsetDateTime, offset: UtcOffset) -> String {
    let local = date.to_offset(offset);
    let (hour12, suffix) = match local.hour() {
        0 => (12, "a.m."),
        h @ 1..=11 => (h, "a.m."),
        12 => (12, "p.m."),
        h => (h - 12, "p.m."),
    };
    format!(
        "{} {} {} {} {}:{:02} {}",
        local.weekday(),
        local.day(),
        local.month(),
        local.year(),
        hour12,
        local.minute(),
        suffix
    )
}

/// The offset for a `Date.getTimezoneOffset()` value
///
/// The browser reports minutes *behind* UTC, so `-720` is `+12:00`.
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    UtcOffset::from_whole_seconds(-(minutes as i32) * 60).unwrap_or(UtcOffset::UTC)
}

#[cfg(test)]
mod test {
    use time::macros::{datetime, offset};

    use super::*;

    #[test]
    fn formats_in_given_offset() {
        let date = datetime!(2025-06-21 17:24:00 +12:00);
        assert_eq!(
            format_date(date, offset!(+12:00)),
            "Saturday 21 June 2025 5:24 p.m."
        );
        // the same instant seen from UTC
        assert_eq!(
            format_date(date, UtcOffset::UTC),
            "Saturday 21 June 2025 5:24 a.m."
        );
        assert!(!format_date(date, UtcOffset::UTC).contains(','));
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(
            format_date(datetime!(2025-01-06 00:05 UTC), UtcOffset::UTC),
            "Monday 6 January 2025 12:05 a.m."
        );
        assert_eq!(
            format_date(datetime!(2025-01-06 12:00 UTC), UtcOffset::UTC),
            "Monday 6 January 2025 12:00 p.m."
        );
    }

    #[test]
    fn js_offsets_are_inverted() {
        assert_eq!(offset_from_js_minutes(-720.0), offset!(+12:00));
        assert_eq!(offset_from_js_minutes(60.0), offset!(-01:00));
        assert_eq!(offset_from_js_minutes(0.0), UtcOffset::UTC);
    }
}
