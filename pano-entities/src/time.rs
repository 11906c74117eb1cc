use std::fmt;

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

/// Human readable UTC date and time, e.g. `2024-03-09 17:05:42`.
const DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A point in time in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from_secs(seconds: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(seconds).ok().map(Self)
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Formats the timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
    pub fn format_date_time(self) -> String {
        // The format description only contains components
        // that are always available for an `OffsetDateTime`.
        self.0
            .to_offset(time::UtcOffset::UTC)
            .format(DATE_TIME_FORMAT)
            .unwrap_or_else(|_| self.as_secs().to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format_date_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_time() {
        let ts = Timestamp::from_secs(1_709_997_942).unwrap();
        assert_eq!("2024-03-09 15:25:42", ts.format_date_time());
        assert_eq!("2024-03-09 15:25:42", ts.to_string());
    }

    #[test]
    fn seconds_since_epoch() {
        let ts = Timestamp::from_secs(42).unwrap();
        assert_eq!(42, ts.as_secs());
        assert_eq!("1970-01-01 00:00:42", ts.to_string());
    }
}
