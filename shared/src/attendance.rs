//! Attendance set and diffing
//!
//! An [`AttendanceSet`] is the set of calendar days a user intends to eat
//! at the dining hall. The UI keeps two of them side by side: `persisted`
//! (last state confirmed by the remote store, cached locally) and
//! `pending` (the current selection). A save reconciles the two through
//! [`AttendanceSet::diff`].

use crate::calendar::CalendarDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of attendance dates, unique by ISO-string identity.
///
/// Backed by a `BTreeSet` so iteration (and therefore every diff result)
/// is deterministic. Serializes as a plain array of `YYYY-MM-DD` strings,
/// the same shape the wire batches and the local cache use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceSet(BTreeSet<CalendarDate>);

/// The additive/subtractive halves of a reconciliation.
///
/// `to_add` holds dates present only in the current set, `to_remove`
/// dates present only in the baseline; the two are disjoint by
/// construction. Both are in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceDiff {
    pub to_add: Vec<CalendarDate>,
    pub to_remove: Vec<CalendarDate>,
}

impl AttendanceDiff {
    /// True when a save would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

impl AttendanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.0.contains(&date)
    }

    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.0.insert(date)
    }

    pub fn remove(&mut self, date: CalendarDate) -> bool {
        self.0.remove(&date)
    }

    /// A new set with `date` added if absent, removed if present.
    pub fn toggle(&self, date: CalendarDate) -> Self {
        let mut next = self.clone();
        if !next.insert(date) {
            next.remove(date);
        }
        next
    }

    /// Diff against a baseline: what must be added to and removed from
    /// the baseline to arrive at `self`.
    pub fn diff(&self, baseline: &Self) -> AttendanceDiff {
        AttendanceDiff {
            to_add: self.0.difference(&baseline.0).copied().collect(),
            to_remove: baseline.0.difference(&self.0).copied().collect(),
        }
    }

    /// Union with a batch of dates, used to record a partially applied
    /// save (additive half confirmed, subtractive half failed).
    pub fn with_added(&self, dates: &[CalendarDate]) -> Self {
        let mut next = self.clone();
        next.0.extend(dates.iter().copied());
        next
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CalendarDate> for AttendanceSet {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<CalendarDate> for AttendanceSet {
    fn extend<I: IntoIterator<Item = CalendarDate>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn set(dates: &[&str]) -> AttendanceSet {
        dates.iter().map(|s| date(s)).collect()
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let base = set(&["2024-03-04", "2024-03-05"]);
        let d = date("2024-03-06");
        assert_eq!(base.toggle(d).toggle(d), base);
        // Toggling a present date removes it, and back.
        let present = date("2024-03-04");
        assert!(!base.toggle(present).contains(present));
        assert_eq!(base.toggle(present).toggle(present), base);
    }

    #[test]
    fn test_diff_of_identical_sets_is_empty() {
        let a = set(&["2024-03-04", "2024-03-05", "2024-03-08"]);
        let diff = a.diff(&a);
        assert!(diff.is_empty());
        assert!(AttendanceSet::new().diff(&AttendanceSet::new()).is_empty());
    }

    #[test]
    fn test_diff_halves_are_disjoint() {
        let current = set(&["2024-03-05", "2024-03-06", "2024-03-07"]);
        let baseline = set(&["2024-03-04", "2024-03-05"]);
        let diff = current.diff(&baseline);
        for added in &diff.to_add {
            assert!(!diff.to_remove.contains(added));
        }
    }

    #[test]
    fn test_diff_scenario() {
        // Baseline {Mon, Tue}; user toggles Wed on and Mon off.
        let persisted = set(&["2024-03-04", "2024-03-05"]);
        let pending = persisted
            .toggle(date("2024-03-06"))
            .toggle(date("2024-03-04"));
        assert_eq!(pending, set(&["2024-03-05", "2024-03-06"]));

        let diff = pending.diff(&persisted);
        assert_eq!(diff.to_add, vec![date("2024-03-06")]);
        assert_eq!(diff.to_remove, vec![date("2024-03-04")]);
    }

    #[test]
    fn test_diff_order_is_ascending() {
        let current = set(&["2024-03-08", "2024-03-04", "2024-03-06"]);
        let diff = current.diff(&AttendanceSet::new());
        assert_eq!(
            diff.to_add,
            vec![date("2024-03-04"), date("2024-03-06"), date("2024-03-08")]
        );
    }

    #[test]
    fn test_with_added_unions() {
        let base = set(&["2024-03-04"]);
        let merged = base.with_added(&[date("2024-03-05"), date("2024-03-04")]);
        assert_eq!(merged, set(&["2024-03-04", "2024-03-05"]));
    }

    #[test]
    fn test_serializes_as_iso_string_list() {
        let a = set(&["2024-03-05", "2024-03-04"]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"["2024-03-04","2024-03-05"]"#);
        let back: AttendanceSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
