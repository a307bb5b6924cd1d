//! Once-per-day gate for external enrichment fetches (weather, steps).
//!
//! The gate is a plain value owned by the service that fetches. It holds
//! the time of the last successful fetch and answers whether another fetch
//! is due on the current UTC calendar day.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Last-success timestamp compared against the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFetchGate {
    last_success: Option<Timestamp>,
}

impl DailyFetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a gate from a persisted last-success time.
    pub fn from_last_success(last_success: Option<Timestamp>) -> Self {
        Self { last_success }
    }

    pub fn last_success(&self) -> Option<Timestamp> {
        self.last_success
    }

    /// True unless a fetch already succeeded on `now`'s calendar day.
    ///
    /// A last success stamped after `now` (clock moved backwards) also
    /// allows a fetch.
    pub fn should_fetch(&self, now: Timestamp) -> bool {
        match self.last_success {
            Some(last) => !last.is_same_day(&now) || last.is_after(&now),
            None => true,
        }
    }

    /// Marks a successful fetch. Failed fetches must not be recorded.
    pub fn record_success(&mut self, now: Timestamp) {
        self.last_success = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(day: u32, hour: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap())
    }

    #[test]
    fn fresh_gate_fetches() {
        assert!(DailyFetchGate::new().should_fetch(at(1, 8)));
    }

    #[test]
    fn same_day_is_skipped() {
        let mut gate = DailyFetchGate::new();
        gate.record_success(at(1, 8));
        assert!(!gate.should_fetch(at(1, 8)));
        assert!(!gate.should_fetch(at(1, 23)));
    }

    #[test]
    fn next_day_fetches_again() {
        let mut gate = DailyFetchGate::new();
        gate.record_success(at(1, 23));
        assert!(gate.should_fetch(at(2, 0)));
    }

    #[test]
    fn clock_moving_backwards_allows_fetch() {
        let gate = DailyFetchGate::from_last_success(Some(at(1, 20)));
        assert!(gate.should_fetch(at(1, 9)));
    }

    #[test]
    fn record_success_replaces_previous() {
        let mut gate = DailyFetchGate::from_last_success(Some(at(1, 8)));
        gate.record_success(at(3, 8));
        assert_eq!(gate.last_success(), Some(at(3, 8)));
    }
}
