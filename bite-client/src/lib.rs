//! BookingBite Client - HTTP client for the dining-hall service
//!
//! Provides network calls to the booking/chef-management REST API, a
//! local attendance cache and the save reconciliation flow.

pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod sync;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use store::{AttendanceStore, MemoryAttendanceStore, RedbAttendanceStore, StoreError};
pub use sync::{AttendanceRemote, AttendanceSync, BookingSession, SyncError};

// Re-export shared types for convenience
pub use shared::{AttendanceDiff, AttendanceSet, CalendarDate, WeekWindow};
