//! Parsing timestamps sent by the backend
//!
//! The backend sends RFC 3339 timestamps (`2025-06-21T05:24:00.123Z`). When it runs without
//! timezone support it sends naive timestamps instead (`2025-06-21T05:24:00`); these are read as
//! UTC.

use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

const NAIVE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

#[derive(Debug, PartialEq)]
pub enum TimestampError {
    /// The string is neither an RFC 3339 nor a naive ISO 8601 timestamp
    Unparsable(String),
    Format(String),
}
impl core::fmt::Display for TimestampError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Unparsable(s) => {
                write!(f, "Unable to parse timestamp: {s}")
            }
            Self::Format(e) => {
                write!(f, "Unable to format timestamp: {e}")
            }
        }
    }
}
impl std::error::Error for TimestampError {}

/// Parse a timestamp as sent by the backend
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, TimestampError> {
    let trimmed = value.trim();
    if let Ok(x) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(x);
    }
    PrimitiveDateTime::parse(trimmed, NAIVE_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| TimestampError::Unparsable(value.to_string()))
}

/// Format a timestamp the way the backend expects it
pub fn format_timestamp(value: &OffsetDateTime) -> Result<String, TimestampError> {
    value
        .format(&Rfc3339)
        .map_err(|e| TimestampError::Format(e.to_string()))
}

/// Convert milliseconds since the unix epoch (as handed out by `Date.now()`) to a timestamp
///
/// Values outside the representable range are clamped to the epoch.
pub fn from_unix_millis(millis: f64) -> OffsetDateTime {
    let nanos = (millis as i128) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// `#[serde(with = ...)]` support for backend timestamps
pub mod serde_timestamp {
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = super::format_timestamp(value).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(D::Error::custom)
    }

    pub mod option {
        use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};
        use time::OffsetDateTime;

        pub fn serialize<S: Serializer>(
            value: &Option<OffsetDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(x) => {
                    let formatted = super::super::format_timestamp(x).map_err(S::Error::custom)?;
                    serializer.serialize_some(&formatted)
                }
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<OffsetDateTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::super::parse_timestamp(&raw)
                    .map(Some)
                    .map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}
