// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chart window calculation for mapping the current UTC day to a timestamp range
//!
//! Every chart covers a window of block timestamps. By default the window starts
//! at 00:00:00 UTC of the current day and spans one day. Callers may supply a
//! different upper bound to shift the end of the window; the lower bound always
//! stays at today's midnight.
//!
//! # Examples
//!
//! ```rust
//! use blockcharts::{ChartWindow, UnixTimestamp};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2025, 10, 15, 13, 45, 0).unwrap();
//!
//! let window = ChartWindow::for_utc_day(now, None).unwrap();
//! assert_eq!(window.start, UnixTimestamp(1760486400));
//! assert_eq!(window.end, UnixTimestamp(1760572800));
//!
//! let shifted = ChartWindow::for_utc_day(now, Some(UnixTimestamp(1760500000))).unwrap();
//! assert_eq!(shifted.end, UnixTimestamp(1760500000));
//! ```

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ChartError;

/// Unix timestamp in seconds (always UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnixTimestamp(pub i64);

impl UnixTimestamp {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Seconds elapsed since `earlier`; negative when `earlier` is later
    pub fn seconds_since(&self, earlier: UnixTimestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp range a chart is computed over
///
/// `start` is the lower bound (`gte`), `end` the upper bound (`lte`). The exact
/// inclusiveness at each boundary is decided by the block source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartWindow {
    /// UTC midnight of the current day
    pub start: UnixTimestamp,

    /// Caller-supplied upper bound, or one day after `start`
    pub end: UnixTimestamp,
}

impl ChartWindow {
    /// Resolves the window for the UTC day containing `now`
    ///
    /// `end` overrides the upper bound. A zero override is treated as absent,
    /// matching the explorer's historical handling of a missing
    /// `startTimestamp` query parameter.
    pub fn for_utc_day(now: DateTime<Utc>, end: Option<UnixTimestamp>) -> Result<Self, ChartError> {
        let date = now.date_naive();

        let start_dt = Utc
            .with_ymd_and_hms(date.year(), date.month(), date.day(), 0, 0, 0)
            .single()
            .ok_or_else(|| {
                ChartError::invalid_window(format!("cannot resolve midnight of {date}"))
            })?;

        let end = match end.filter(|ts| ts.0 != 0) {
            Some(end) => end,
            None => {
                let end_dt = start_dt
                    .checked_add_signed(chrono::TimeDelta::days(1))
                    .ok_or_else(|| {
                        ChartError::invalid_window(format!("date arithmetic overflow after {date}"))
                    })?;
                UnixTimestamp::from_datetime(end_dt)
            }
        };

        Ok(Self {
            start: UnixTimestamp::from_datetime(start_dt),
            end,
        })
    }

    /// Resolves the window for the current UTC day
    pub fn today(end: Option<UnixTimestamp>) -> Result<Self, ChartError> {
        Self::for_utc_day(Utc::now(), end)
    }
}

impl std::fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::SECONDS_PER_DAY;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_default_window_spans_one_day_from_midnight() {
        let window = ChartWindow::for_utc_day(at(2024, 10, 10, 17, 3, 59), None).unwrap();

        assert_eq!(window.start, UnixTimestamp(1728518400));
        assert_eq!(window.end, UnixTimestamp(1728518400 + SECONDS_PER_DAY));
    }

    #[test]
    fn test_midnight_exactly() {
        let window = ChartWindow::for_utc_day(at(2024, 10, 10, 0, 0, 0), None).unwrap();
        assert_eq!(window.start, UnixTimestamp(1728518400));
    }

    #[test]
    fn test_last_second_of_day() {
        let window = ChartWindow::for_utc_day(at(2024, 10, 10, 23, 59, 59), None).unwrap();
        assert_eq!(window.start, UnixTimestamp(1728518400));
        assert_eq!(window.end, UnixTimestamp(1728604800));
    }

    #[test]
    fn test_explicit_end_overrides_default() {
        let end = UnixTimestamp(1728550000);
        let window = ChartWindow::for_utc_day(at(2024, 10, 10, 12, 0, 0), Some(end)).unwrap();

        assert_eq!(window.start, UnixTimestamp(1728518400));
        assert_eq!(window.end, end);
    }

    #[test]
    fn test_end_before_start_is_passed_through() {
        // Earlier upper bounds are handed to the block source unchanged
        let end = UnixTimestamp(1700000000);
        let window = ChartWindow::for_utc_day(at(2024, 10, 10, 12, 0, 0), Some(end)).unwrap();
        assert_eq!(window.end, end);
    }

    #[test]
    fn test_zero_end_falls_back_to_default() {
        let window =
            ChartWindow::for_utc_day(at(2024, 10, 10, 12, 0, 0), Some(UnixTimestamp(0))).unwrap();
        assert_eq!(window.end, UnixTimestamp(1728604800));
    }

    #[test]
    fn test_leap_day() {
        let window = ChartWindow::for_utc_day(at(2024, 2, 29, 6, 0, 0), None).unwrap();
        assert_eq!(window.start, UnixTimestamp(1709164800));
        assert_eq!(window.end, UnixTimestamp(1709251200));
    }

    #[test]
    fn test_seconds_since() {
        assert_eq!(UnixTimestamp(220).seconds_since(UnixTimestamp(150)), 70);
        assert_eq!(UnixTimestamp(100).seconds_since(UnixTimestamp(150)), -50);
    }

    #[test]
    fn test_window_display() {
        let window = ChartWindow {
            start: UnixTimestamp(10),
            end: UnixTimestamp(20),
        };
        assert_eq!(window.to_string(), "[10, 20]");
    }
}
