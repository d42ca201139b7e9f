//! Shared types for BookingBite
//!
//! Common types used across crates: calendar arithmetic, attendance
//! sets, dish models, menu grouping and API request/response structures.

pub mod api;
pub mod attendance;
pub mod calendar;
pub mod menu;
pub mod models;

// Re-exports
pub use chrono::Weekday;
pub use serde::{Deserialize, Serialize};

pub use attendance::{AttendanceDiff, AttendanceSet};
pub use calendar::{CalendarDate, ParseDateError, WeekWindow, WORK_WEEK};
