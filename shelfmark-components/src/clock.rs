//! Current time and timezone of the browser, and the timer handle the registry keeps
//!
//! On the server there is no browser; it falls back to the system clock and UTC.

use leptos::prelude::IntervalHandle;
use shelfmark_shared::timers::CancelTimer;
use time::{OffsetDateTime, UtcOffset};

#[cfg(target_arch = "wasm32")]
pub fn now() -> OffsetDateTime {
    shelfmark_shared::timestamp::from_unix_millis(web_sys::js_sys::Date::now())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(target_arch = "wasm32")]
pub fn local_offset() -> UtcOffset {
    shelfmark_shared::dates::offset_from_js_minutes(
        web_sys::js_sys::Date::new_0().get_timezone_offset(),
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_offset() -> UtcOffset {
    UtcOffset::UTC
}

/// A running `setInterval`
#[derive(Debug, Clone, Copy)]
pub struct Interval(pub IntervalHandle);
impl CancelTimer for Interval {
    fn cancel(self) {
        self.0.clear();
    }
}
