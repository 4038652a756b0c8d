//! # Record Store: Pure Transitions
//!
//! A [`Collection`] is the ordered sequence of records of one kind. It only ever
//! changes through [`Collection::transition`], which consumes the current state
//! and an [`Action`] and returns the next state. There is no hidden shared state:
//! whoever owns the collection passes it in and keeps what comes back.
//!
//! ## Actions
//!
//! | Action   | Effect                                              | Absent id |
//! |----------|-----------------------------------------------------|-----------|
//! | `Load`   | Replace everything (startup hydration only)         | n/a       |
//! | `Add`    | Append a new record built from fields               | n/a       |
//! | `Edit`   | Replace every non-id field in place                 | no-op     |
//! | `Delete` | Remove the record                                   | no-op     |
//!
//! `Add` carries its id. Drawing fresh ids is the caller's job (see
//! [`crate::ids`]), which keeps `transition` deterministic.
//!
//! Transitions never validate. Input is checked at the boundary
//! ([`crate::validation`]) before an action is built.
//!
//! ## Invariants
//!
//! - Ids are pairwise distinct. `Add` with an id already present is ignored.
//! - Order is insertion order; edits never move a record.

use crate::model::{RecordId, Todo};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record kind managed by a [`Collection`].
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned {
    /// Replaceable, already validated values.
    type Fields;

    /// Namespace key under which the collection is persisted.
    const KEY: &'static str;

    fn create(id: RecordId, fields: Self::Fields) -> Self;

    fn id(&self) -> RecordId;

    /// Replace every field except the id.
    fn apply(&mut self, fields: Self::Fields);

    /// Recompute fields derived from the others. Runs on every decoded record.
    fn recompute_derived(&mut self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action<R: Record> {
    Load(Vec<R>),
    Add { id: RecordId, fields: R::Fields },
    Edit { id: RecordId, fields: R::Fields },
    Delete(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the next state from this one.
    pub fn transition(mut self, action: Action<R>) -> Self {
        match action {
            Action::Load(records) => {
                self.records = records;
            }
            Action::Add { id, fields } => {
                if self.contains(id) {
                    tracing::warn!(kind = R::KEY, %id, "ignoring add with duplicate id");
                } else {
                    self.records.push(R::create(id, fields));
                }
            }
            Action::Edit { id, fields } => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
                    record.apply(fields);
                }
            }
            Action::Delete(id) => {
                self.records.retain(|r| r.id() != id);
            }
        }
        self
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Largest id in the collection, if any.
    pub fn max_id(&self) -> Option<RecordId> {
        self.records.iter().map(Record::id).max()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(Record::id).collect()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Collection<Todo> {
    /// Flip `completed` on one item. Expressed as an edit that keeps the text.
    pub fn toggle(self, id: RecordId) -> Self {
        match self.get(id).map(Todo::toggled) {
            Some(fields) => self.transition(Action::Edit { id, fields }),
            None => self,
        }
    }
}
