//! # Command Layer
//!
//! Each command builds an [`Action`], runs the transition, persists the result
//! and reports what happened as a [`CmdResult`]. Commands never print and never
//! validate raw input; the API facade has already turned user text into fields.
//!
//! ## Commit Order
//!
//! [`commit`] computes the next collection from a copy of the current one,
//! writes it through the [`PersistenceBridge`], and only then replaces the
//! caller's state. A failed write leaves memory exactly as it was, so the
//! in-memory collection and the stored copy never disagree.
//!
//! Transitions that change nothing (edit/delete/toggle of an unknown id) are
//! not written and come back with `changed == false` and an info message.
//!
//! ## Command Modules
//!
//! - [`students`]: add, edit, delete, list (with class average)
//! - [`todos`]: add, edit, toggle, delete, list (partitioned)
//! - [`reset`]: drop stored state for one or both kinds

use crate::error::Result;
use crate::model::{Student, Todo};
use crate::persistence::PersistenceBridge;
use crate::records::{Action, Collection, Record};
use crate::storage::KeyValueBackend;
use crate::views::TodoPartition;
use serde::Serialize;

pub mod reset;
pub mod students;
pub mod todos;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Whether any collection changed.
    pub changed: bool,
    pub affected_students: Vec<Student>,
    pub affected_todos: Vec<Todo>,
    pub listed_students: Vec<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_partition: Option<TodoPartition>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_changed(mut self, changed: bool) -> Self {
        self.changed = changed;
        self
    }

    /// Merge another result into this one (used when listing both kinds).
    pub fn merge(mut self, other: CmdResult) -> Self {
        self.changed |= other.changed;
        self.affected_students.extend(other.affected_students);
        self.affected_todos.extend(other.affected_todos);
        self.listed_students.extend(other.listed_students);
        self.class_average = self.class_average.or(other.class_average);
        self.todo_partition = self.todo_partition.or(other.todo_partition);
        self.messages.extend(other.messages);
        self
    }
}

/// Run `action` against `current`, persist the outcome, then commit it.
///
/// Returns whether the collection changed.
pub fn commit<B: KeyValueBackend, R: Record>(
    bridge: &PersistenceBridge<B>,
    current: &mut Collection<R>,
    action: Action<R>,
) -> Result<bool> {
    let next = current.clone().transition(action);
    if next == *current {
        tracing::debug!(kind = R::KEY, "transition left collection unchanged");
        return Ok(false);
    }
    bridge.save(&next)?;
    *current = next;
    Ok(true)
}
