//! Attendance reconciliation
//!
//! A save never ships the whole selection: it diffs the pending set
//! against the persisted baseline and dispatches the additive and
//! subtractive halves as separate batch calls, then overwrites the local
//! cache with the new baseline.

use crate::error::ClientError;
use crate::http::HttpClient;
use crate::store::{AttendanceStore, StoreError};
use async_trait::async_trait;
use shared::{AttendanceDiff, AttendanceSet, CalendarDate, WORK_WEEK};
use thiserror::Error;

/// Days ahead of today a booking can still be changed by an employee.
pub const BOOKING_LEAD_DAYS: i64 = 7;

/// Days ahead of today the menu is locked for chefs, so dishes cannot be
/// swapped under days already opened for booking.
pub const MENU_LOCK_DAYS: i64 = 10;

/// Reconciliation errors
#[derive(Debug, Error)]
pub enum SyncError {
    /// The additive batch failed; nothing was changed locally
    #[error("Failed to add attendance: {0}")]
    AddFailed(#[source] ClientError),

    /// The subtractive batch failed after the additive one succeeded;
    /// the local cache reflects the dates the remote accepted
    #[error("Failed to remove attendance: {0}")]
    RemoveFailed(#[source] ClientError),

    /// The local cache could not be read or written
    #[error("Attendance cache error: {0}")]
    Store(#[from] StoreError),
}

/// The two batch operations the remote store exposes for attendance.
///
/// [`HttpClient`] is the production implementation; tests substitute a
/// recording mock.
#[async_trait]
pub trait AttendanceRemote: Send + Sync {
    async fn add_attendance(&self, dates: &[CalendarDate]) -> Result<(), ClientError>;
    async fn remove_attendance(&self, dates: &[CalendarDate]) -> Result<(), ClientError>;
}

#[async_trait]
impl AttendanceRemote for HttpClient {
    async fn add_attendance(&self, dates: &[CalendarDate]) -> Result<(), ClientError> {
        HttpClient::add_attendance(self, dates).await
    }

    async fn remove_attendance(&self, dates: &[CalendarDate]) -> Result<(), ClientError> {
        HttpClient::remove_attendance(self, dates).await
    }
}

#[async_trait]
impl<T: AttendanceRemote + ?Sized> AttendanceRemote for std::sync::Arc<T> {
    async fn add_attendance(&self, dates: &[CalendarDate]) -> Result<(), ClientError> {
        (**self).add_attendance(dates).await
    }

    async fn remove_attendance(&self, dates: &[CalendarDate]) -> Result<(), ClientError> {
        (**self).remove_attendance(dates).await
    }
}

/// Reconciles an [`AttendanceSet`] against the remote store, with the
/// local cache as the persisted baseline.
pub struct AttendanceSync<R: AttendanceRemote, S: AttendanceStore> {
    remote: R,
    store: S,
}

impl<R: AttendanceRemote, S: AttendanceStore> AttendanceSync<R, S> {
    pub fn new(remote: R, store: S) -> Self {
        Self { remote, store }
    }

    /// The baseline cached by the last successful save, empty when the
    /// cache is fresh.
    pub fn load_persisted(&self) -> Result<AttendanceSet, SyncError> {
        Ok(self.store.load()?)
    }

    /// Save `pending` against the `persisted` baseline.
    ///
    /// An empty diff is a no-op: no network call, cache untouched. The
    /// additive batch goes first; if it fails nothing changes locally.
    /// If the subtractive batch then fails, the cache is moved to
    /// `persisted + to_add` (what the remote actually accepted) and
    /// [`SyncError::RemoveFailed`] is returned. On full success the cache
    /// is overwritten with `pending`, which becomes the new baseline.
    pub async fn save(
        &self,
        pending: &AttendanceSet,
        persisted: &AttendanceSet,
    ) -> Result<AttendanceSet, SyncError> {
        let AttendanceDiff { to_add, to_remove } = pending.diff(persisted);

        if to_add.is_empty() && to_remove.is_empty() {
            tracing::debug!("no attendance changes to save");
            return Ok(persisted.clone());
        }

        if !to_add.is_empty() {
            if let Err(err) = self.remote.add_attendance(&to_add).await {
                tracing::error!(error = %err, count = to_add.len(), "attendance add batch failed");
                return Err(SyncError::AddFailed(err));
            }
        }

        if !to_remove.is_empty() {
            if let Err(err) = self.remote.remove_attendance(&to_remove).await {
                tracing::error!(
                    error = %err,
                    count = to_remove.len(),
                    "attendance remove batch failed after add batch succeeded"
                );
                let partial = persisted.with_added(&to_add);
                self.store.store(&partial)?;
                return Err(SyncError::RemoveFailed(err));
            }
        }

        self.store.store(pending)?;
        tracing::info!(
            added = to_add.len(),
            removed = to_remove.len(),
            total = pending.len(),
            "attendance saved"
        );
        Ok(pending.clone())
    }
}

/// The pending/persisted pair a booking view works on.
///
/// Both members are plain values: toggles replace `pending` rather than
/// mutating shared state, so a toggle made while a save is in flight is
/// simply picked up by the next save.
#[derive(Debug, Clone, Default)]
pub struct BookingSession {
    persisted: AttendanceSet,
    pending: AttendanceSet,
}

impl BookingSession {
    /// Start a session from the cached baseline; the selection begins
    /// equal to it.
    pub fn new(persisted: AttendanceSet) -> Self {
        Self {
            pending: persisted.clone(),
            persisted,
        }
    }

    pub fn persisted(&self) -> &AttendanceSet {
        &self.persisted
    }

    pub fn pending(&self) -> &AttendanceSet {
        &self.pending
    }

    /// Flip the selection state of one date.
    pub fn toggle(&mut self, date: CalendarDate) {
        self.pending = self.pending.toggle(date);
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.pending.contains(date)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.pending != self.persisted
    }

    pub fn diff(&self) -> AttendanceDiff {
        self.pending.diff(&self.persisted)
    }

    /// Adopt the baseline returned by a successful save. The pending
    /// selection is left as-is so toggles made during the save survive.
    pub fn commit(&mut self, baseline: AttendanceSet) {
        self.persisted = baseline;
    }

    /// Whether `date` can still be booked: a workday outside the booking
    /// lock window.
    pub fn is_bookable(date: CalendarDate, today: CalendarDate) -> bool {
        WORK_WEEK.contains(&date.weekday()) && !date.is_locked(today, BOOKING_LEAD_DAYS)
    }
}
