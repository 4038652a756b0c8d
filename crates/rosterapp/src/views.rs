//! Derived views over a collection.
//!
//! Views keep no state of their own. They are recomputed from the collection
//! they are handed every time they are asked for.

use crate::model::{Student, Todo};
use crate::records::Collection;
use serde::Serialize;

/// Arithmetic mean of `field` over `records`; `0.0` for an empty slice.
pub fn average_of<R>(records: &[R], field: impl Fn(&R) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(field).sum();
    total / records.len() as f64
}

/// Mean of every student's stored average.
pub fn class_average(students: &Collection<Student>) -> f64 {
    average_of(students.records(), |s| s.average)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TodoPartition {
    pub incomplete: Vec<Todo>,
    pub completed: Vec<Todo>,
}

/// Split into (not done, done), each keeping source order.
pub fn partition(todos: &Collection<Todo>) -> TodoPartition {
    let (completed, incomplete): (Vec<Todo>, Vec<Todo>) = todos.iter().cloned().partition(|t| t.completed);
    TodoPartition {
        incomplete,
        completed,
    }
}
