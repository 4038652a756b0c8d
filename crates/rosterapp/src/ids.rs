//! # Record Identifiers
//!
//! New records get their id from an [`IdSource`]. Production uses [`ClockIds`],
//! which hands out milliseconds since the Unix epoch. Two adds inside the same
//! millisecond (or a clock that steps backwards) would collide, so the source
//! remembers the last id it issued and bumps by one whenever the clock has not
//! moved past it. Ids are therefore strictly increasing within a process.
//!
//! After hydrating from storage the caller seeds the source with the largest
//! persisted id via [`IdSource::observe`], so new ids also sort after old ones.
//! A stored id of `i64::MAX` leaves nothing above it; drawing then fails with
//! [`RosterError::IdsExhausted`] instead of wrapping around.

use crate::error::{Result, RosterError};
use crate::model::RecordId;
use chrono::Utc;

pub trait IdSource {
    /// Draw a fresh id, strictly greater than any previously issued or observed.
    fn next_id(&mut self) -> Result<RecordId>;

    /// Record that `id` is in use.
    fn observe(&mut self, id: RecordId);
}

#[derive(Debug, Default)]
pub struct ClockIds {
    last: Option<RecordId>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> Result<RecordId> {
        let now = RecordId(Utc::now().timestamp_millis());
        let id = match self.last {
            Some(last) if now <= last => last
                .0
                .checked_add(1)
                .map(RecordId)
                .ok_or(RosterError::IdsExhausted(last))?,
            _ => now,
        };
        self.last = Some(id);
        Ok(id)
    }

    fn observe(&mut self, id: RecordId) {
        if self.last.map_or(true, |last| id > last) {
            self.last = Some(id);
        }
    }
}

/// Deterministic ids `start, start + 1, ...` for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIds {
    /// `None` once `i64::MAX` has been handed out or observed.
    next: Option<i64>,
}

impl SequentialIds {
    pub fn starting_at(start: i64) -> Self {
        Self { next: Some(start) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Result<RecordId> {
        let id = self
            .next
            .ok_or(RosterError::IdsExhausted(RecordId(i64::MAX)))?;
        self.next = id.checked_add(1);
        Ok(RecordId(id))
    }

    fn observe(&mut self, id: RecordId) {
        if self.next.map_or(false, |next| id.0 >= next) {
            self.next = id.0.checked_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_ids_are_strictly_increasing() {
        let mut ids = ClockIds::new();
        let drawn: Vec<RecordId> = (0..1000).map(|_| ids.next_id().unwrap()).collect();
        for pair in drawn.windows(2) {
            assert!(pair[1] > pair[0], "{} !> {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn clock_ids_skip_past_observed_future_id() {
        let mut ids = ClockIds::new();
        let far_future = RecordId(Utc::now().timestamp_millis() + 1_000_000);
        ids.observe(far_future);
        assert_eq!(ids.next_id().unwrap(), RecordId(far_future.0 + 1));
    }

    #[test]
    fn observing_older_id_keeps_last() {
        let mut ids = ClockIds::new();
        let first = ids.next_id().unwrap();
        ids.observe(RecordId(1));
        assert!(ids.next_id().unwrap() > first);
    }

    #[test]
    fn sequential_ids_follow_observed() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id().unwrap(), RecordId(1));
        ids.observe(RecordId(10));
        assert_eq!(ids.next_id().unwrap(), RecordId(11));
        ids.observe(RecordId(3));
        assert_eq!(ids.next_id().unwrap(), RecordId(12));
    }

    #[test]
    fn clock_ids_fail_instead_of_wrapping_at_max() {
        let mut ids = ClockIds::new();
        ids.observe(RecordId(i64::MAX));
        assert!(matches!(ids.next_id(), Err(RosterError::IdsExhausted(_))));
        ids.observe(RecordId(1));
        assert!(ids.next_id().is_err());
    }

    #[test]
    fn sequential_ids_hand_out_max_once() {
        let mut ids = SequentialIds::starting_at(i64::MAX - 1);
        assert_eq!(ids.next_id().unwrap(), RecordId(i64::MAX - 1));
        assert_eq!(ids.next_id().unwrap(), RecordId(i64::MAX));
        assert!(matches!(ids.next_id(), Err(RosterError::IdsExhausted(_))));

        let mut observed = SequentialIds::default();
        observed.observe(RecordId(i64::MAX));
        assert!(observed.next_id().is_err());
    }
}
