//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + Duration::seconds(secs as i64))
    }

    /// Returns the UTC calendar day this timestamp falls on.
    pub fn calendar_day(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Checks if both timestamps fall on the same UTC calendar day.
    pub fn is_same_day(&self, other: &Timestamp) -> bool {
        self.calendar_day() == other.calendar_day()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_datetime(DateTime::from_timestamp(secs, 0).unwrap())
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let t = Timestamp::now();
        let after = Utc::now();

        assert!(t.as_datetime() >= &before);
        assert!(t.as_datetime() <= &after);
    }

    #[test]
    fn ordering_helpers_agree() {
        let earlier = ts(1704326400);
        let later = earlier.plus_secs(60);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
    }

    #[test]
    fn add_days_moves_calendar_day() {
        let t = ts(1704326400); // 2024-01-04 00:00:00 UTC
        assert_eq!(t.add_days(1).calendar_day(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(t.add_days(-1).calendar_day(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let morning = ts(1704326400);
        let evening = morning.plus_secs(23 * 3600);
        let next_day = morning.plus_secs(24 * 3600);
        assert!(morning.is_same_day(&evening));
        assert!(!morning.is_same_day(&next_day));
    }

    #[test]
    fn serializes_transparently_as_rfc3339() {
        let json = serde_json::to_string(&ts(1704326400)).unwrap();
        assert!(json.starts_with("\"2024-01-04T00:00:00"));
    }
}
