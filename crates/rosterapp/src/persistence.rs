//! # Persistence Bridge
//!
//! Keeps a [`Collection`] and its stored copy in step.
//!
//! - **Startup**: [`PersistenceBridge::hydrate`] reads the kind's key and
//!   replays it into an empty collection with a single `Load` action. Missing
//!   state is normal. Unreadable or corrupt state is logged and treated as
//!   missing; startup never fails because of what is (or is not) on disk.
//!   Derived values (a student's average) are recomputed from the decoded
//!   fields, so a hand-edited file cannot break them.
//! - **Every mutation**: [`PersistenceBridge::save`] re-encodes the whole
//!   collection and overwrites the key. An empty collection is written as `[]`
//!   like any other, so a stale non-empty value never survives the last delete.

use crate::error::{Result, RosterError};
use crate::records::{Action, Collection, Record};
use crate::storage::KeyValueBackend;

pub struct PersistenceBridge<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> PersistenceBridge<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Restore the stored collection of kind `R`, or an empty one.
    pub fn hydrate<R: Record>(&self) -> Collection<R> {
        let collection = Collection::new();
        match self.read::<R>() {
            Ok(Some(records)) => {
                tracing::info!(kind = R::KEY, count = records.len(), "hydrated collection");
                collection.transition(Action::Load(records))
            }
            Ok(None) => {
                tracing::debug!(kind = R::KEY, "no stored state, starting empty");
                collection
            }
            Err(e) => {
                tracing::warn!(kind = R::KEY, error = %e, "ignoring unreadable stored state, starting empty");
                collection
            }
        }
    }

    /// Read and decode the stored records of kind `R`, if any.
    pub fn read<R: Record>(&self) -> Result<Option<Vec<R>>> {
        match self.backend.get(R::KEY)? {
            Some(raw) => {
                let mut records: Vec<R> =
                    serde_json::from_str(&raw).map_err(RosterError::Serialization)?;
                check_unique_ids(&records)?;
                recompute_derived(&mut records);
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the stored value with the full collection.
    pub fn save<R: Record>(&self, collection: &Collection<R>) -> Result<()> {
        let encoded =
            serde_json::to_string(collection.records()).map_err(RosterError::Serialization)?;
        self.backend.set(R::KEY, &encoded)?;
        tracing::debug!(kind = R::KEY, count = collection.len(), "saved collection");
        Ok(())
    }

    /// Drop whatever is stored for kind `R`.
    pub fn clear<R: Record>(&self) -> Result<()> {
        self.backend.remove(R::KEY)?;
        tracing::debug!(kind = R::KEY, "cleared stored state");
        Ok(())
    }
}

fn recompute_derived<R: Record>(records: &mut [R]) {
    let mut repaired = 0;
    for record in records.iter_mut() {
        let stored = record.clone();
        record.recompute_derived();
        if *record != stored {
            repaired += 1;
        }
    }
    if repaired > 0 {
        tracing::warn!(kind = R::KEY, repaired, "stored derived values disagreed, recomputed");
    }
}

fn check_unique_ids<R: Record>(records: &[R]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(RosterError::Store(format!(
                "stored {} contain duplicate id {}",
                R::KEY,
                record.id()
            )));
        }
    }
    Ok(())
}
