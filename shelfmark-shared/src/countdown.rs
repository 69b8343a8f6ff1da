//! The countdowns shown next to every unreturned borrow record
//!
//! Two things are computed for a record each second:
//! - the return cooldown: a book can only be returned 24 hours after it was borrowed
//! - the due status: how long until the book is due, and how urgent that is
//!
//! Everything here takes `now` explicitly so the rules do not depend on a clock.

use time::{Duration, OffsetDateTime};

/// How long after borrowing a book can be returned
pub const RETURN_COOLDOWN: Duration = Duration::hours(24);
/// Books due within this window are shown as critical
pub const CRITICAL_WINDOW: Duration = Duration::days(3);
/// Books due within this window (but not within [`CRITICAL_WINDOW`]) are shown as warning
pub const WARNING_WINDOW: Duration = Duration::days(7);

pub const OVERDUE_LABEL: &str = "Overdue!";
pub const RETURN_AVAILABLE_TOOLTIP: &str = "Return this book";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Format a time span in milliseconds as the largest three non-zero units
///
/// `1d 3h 15m`, `2h 5s`, ... Zero (and anything negative) is `0s`.
pub fn format_time_left(ms: i64) -> String {
    if ms <= 0 {
        return "0s".to_string();
    }
    let units = [
        (ms / MS_PER_DAY, 'd'),
        (ms % MS_PER_DAY / MS_PER_HOUR, 'h'),
        (ms % MS_PER_HOUR / MS_PER_MINUTE, 'm'),
        (ms % MS_PER_MINUTE / MS_PER_SECOND, 's'),
    ];
    let parts = units
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .take(3)
        .map(|(amount, unit)| format!("{amount}{unit}"))
        .collect::<Vec<_>>();
    if parts.is_empty() {
        // less than a second left
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// [`format_time_left`] for a [`Duration`]
pub fn format_duration_left(duration: Duration) -> String {
    format_time_left(duration.whole_milliseconds().clamp(i64::MIN as i128, i64::MAX as i128) as i64)
}

/// State of the return action for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCooldown {
    /// The book cannot be returned yet
    Pending { remaining: Duration },
    /// The book can be returned. This is final.
    Available,
}
impl ReturnCooldown {
    pub fn compute(borrow_date: OffsetDateTime, now: OffsetDateTime) -> Self {
        let available_at = borrow_date + RETURN_COOLDOWN;
        if now < available_at {
            Self::Pending {
                remaining: available_at - now,
            }
        } else {
            Self::Available
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Once available, the cooldown timer has nothing more to do
    pub fn is_terminal(&self) -> bool {
        self.is_available()
    }

    pub fn tooltip(&self) -> String {
        match self {
            Self::Pending { remaining } => {
                format!("Available to return in {}", format_duration_left(*remaining))
            }
            Self::Available => RETURN_AVAILABLE_TOOLTIP.to_string(),
        }
    }
}

/// The styling urgency of a due date
///
/// Critical and Warning are mutually exclusive: a record is styled with at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Critical,
    Warning,
    Neutral,
}
impl Urgency {
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

/// Status of the due date of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// The due date has passed. This is final.
    Overdue,
    /// Still time left
    Due { remaining: Duration, urgency: Urgency },
}
impl DueStatus {
    pub fn compute(due_date: OffsetDateTime, now: OffsetDateTime) -> Self {
        let remaining = due_date - now;
        if remaining <= Duration::ZERO {
            Self::Overdue
        } else if remaining <= CRITICAL_WINDOW {
            Self::Due {
                remaining,
                urgency: Urgency::Critical,
            }
        } else if remaining <= WARNING_WINDOW {
            Self::Due {
                remaining,
                urgency: Urgency::Warning,
            }
        } else {
            Self::Due {
                remaining,
                urgency: Urgency::Neutral,
            }
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            Self::Overdue => Urgency::Critical,
            Self::Due { urgency, .. } => *urgency,
        }
    }

    /// Once overdue, the due timer has nothing more to do
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Overdue)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Overdue => OVERDUE_LABEL.to_string(),
            Self::Due { remaining, .. } => format!("Due in {}", format_duration_left(*remaining)),
        }
    }
}

#[cfg(test)]
mod test;
