use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Layout used by the close-approach feed: `2020-Jan-01 06:00`.
pub const CAD_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// All-numeric variant of [`CAD_TIME_FORMAT`], also the output layout.
pub const ISO_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid close-approach timestamp: '{0}'")]
pub struct ParseTimestampError(String);

/// Position of a [`NearEarthObject`](super::neo::NearEarthObject) inside a
/// [`NeoDatabase`](crate::NeoDatabase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

/// Position of a [`CloseApproach`](super::approach::CloseApproach) inside a
/// [`NeoDatabase`](crate::NeoDatabase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(crate) usize);

impl NeoId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl ApproachId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neo#{}", self.0)
    }
}

impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approach#{}", self.0)
    }
}

/// Calendar timestamp of a close approach, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    #[inline]
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    #[inline]
    pub fn date(&self) -> chrono::NaiveDate {
        self.0.date()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_TIME_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveDateTime::parse_from_str(trimmed, CAD_TIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_TIME_FORMAT))
            .map(Self)
            .map_err(|_| ParseTimestampError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn timestamp_from_cad_layout() {
        let ts = Timestamp::from_str("2020-Jan-01 06:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(ts.datetime().hour(), 6);
        assert_eq!(ts.datetime().minute(), 0);
    }

    #[test]
    fn timestamp_from_numeric_month() {
        let ts = Timestamp::from_str("1900-12-04 22:53").unwrap();
        assert_eq!(ts.date().month(), 12);
        assert_eq!(ts.to_string(), "1900-12-04 22:53");
    }

    #[test]
    fn timestamp_display_uses_numeric_month() {
        let ts = Timestamp::from_str("2089-Sep-30 11:19").unwrap();
        assert_eq!(ts.to_string(), "2089-09-30 11:19");
    }

    #[test]
    fn timestamp_invalid() {
        let err = Timestamp::from_str("2020-Foo-01 06:00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid close-approach timestamp: '2020-Foo-01 06:00'"
        );
        assert!(Timestamp::from_str("").is_err());
        assert!(Timestamp::from_str("2020-Jan-01").is_err());
    }

    #[test]
    fn timestamps_order_chronologically() {
        let a = Timestamp::from_str("2020-Jan-01 06:00").unwrap();
        let b = Timestamp::from_str("2020-Jan-01 06:01").unwrap();
        let c = Timestamp::from_str("2019-Dec-31 23:59").unwrap();
        assert!(c < a && a < b);
    }
}
