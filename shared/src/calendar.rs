//! Calendar date arithmetic
//!
//! All computations are UTC-anchored: a [`CalendarDate`] carries no
//! time-of-day, and "today" is resolved against the UTC calendar so that
//! weekday resolution never drifts near midnight.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The Monday..Friday span the dining hall operates on.
pub const WORK_WEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Error returned when a date string is not `YYYY-MM-DD`.
#[derive(Debug, Error)]
#[error("invalid calendar date '{input}': expected YYYY-MM-DD")]
pub struct ParseDateError {
    input: String,
}

/// A date normalized to a calendar day.
///
/// Canonical form is the ISO-8601 `YYYY-MM-DD` string, which is how dates
/// travel on the wire and land in the local cache. Two dates are equal iff
/// their ISO strings match, so the derived equality is the canonical one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from year/month/day, `None` if out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today on the UTC calendar.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// ISO-8601 week number (week 1 contains the year's first Thursday).
    pub fn iso_week(self) -> u32 {
        self.0.iso_week().week()
    }

    /// The year the ISO week belongs to, which differs from the calendar
    /// year around new year boundaries.
    pub fn iso_week_year(self) -> i32 {
        self.0.iso_week().year()
    }

    /// Weekday on the UTC calendar.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The Monday on or before this date.
    pub fn start_of_work_week(self) -> Self {
        self.add_days(-(self.0.weekday().num_days_from_monday() as i64))
    }

    /// Signed day offset.
    pub fn add_days(self, n: i64) -> Self {
        Self(self.0 + Duration::days(n))
    }

    /// The next Monday..Friday date strictly after this one.
    pub fn next_workday(self) -> Self {
        let mut date = self.add_days(1);
        while !WORK_WEEK.contains(&date.weekday()) {
            date = date.add_days(1);
        }
        date
    }

    /// The previous Monday..Friday date strictly before this one.
    pub fn prev_workday(self) -> Self {
        let mut date = self.add_days(-1);
        while !WORK_WEEK.contains(&date.weekday()) {
            date = date.add_days(-1);
        }
        date
    }

    /// Whether this date falls inside the modification lock window:
    /// anything earlier than `today + lead_days` can no longer be changed.
    pub fn is_locked(self, today: Self, lead_days: i64) -> bool {
        self < today.add_days(lead_days)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ParseDateError {
                input: s.to_string(),
            })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Monday through Friday of one ISO week.
///
/// Derived, never persisted. Invariants: `start` is a Monday and
/// `end = start + 4 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl WeekWindow {
    /// The work week containing `date`.
    pub fn containing(date: CalendarDate) -> Self {
        let start = date.start_of_work_week();
        Self {
            start,
            end: start.add_days(4),
        }
    }

    /// ISO week number of this window.
    pub fn iso_week(&self) -> u32 {
        self.start.iso_week()
    }

    /// The five workdays, Monday first.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        (0..5).map(|offset| self.start.add_days(offset))
    }

    /// Whether `date` falls inside this window.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The window one week later.
    pub fn next(&self) -> Self {
        Self::containing(self.start.add_days(7))
    }

    /// The window one week earlier.
    pub fn prev(&self) -> Self {
        Self::containing(self.start.add_days(-7))
    }
}
