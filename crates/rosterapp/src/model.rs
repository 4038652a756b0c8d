//! # Domain Model
//!
//! The two record kinds roster manages: [`Student`] and [`Todo`].
//!
//! Both carry a [`RecordId`] assigned once at creation (see [`crate::ids`]) and
//! never reused. Everything else about a record is replaceable through an edit.
//!
//! ## Stored Averages
//!
//! A student's `average` is *stored*, not computed per read. It is written by
//! [`Student::new`] and refreshed by [`Student::apply`], the only two ways a
//! student's grades can change, so it always equals the mean of the three grades.
//! Records loaded from storage keep the stored value as-is.
//!
//! ## Wire Format
//!
//! ```text
//! students: [{"id":1700000000000,"name":"An","grade1":7.0,"grade2":8.0,"grade3":9.0,"average":8.0}]
//! todos:    [{"id":1700000000001,"text":"Buy milk","completed":false}]
//! ```

use crate::records::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecordId)
    }
}

/// Mean of three grades.
pub fn mean_of(grade1: f64, grade2: f64, grade3: f64) -> f64 {
    (grade1 + grade2 + grade3) / 3.0
}

/// Already-validated values for creating or editing a student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub grade1: f64,
    pub grade2: f64,
    pub grade3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub grade1: f64,
    pub grade2: f64,
    pub grade3: f64,
    pub average: f64,
}

impl Student {
    pub fn new(id: RecordId, fields: StudentFields) -> Self {
        Self {
            id,
            name: fields.name,
            grade1: fields.grade1,
            grade2: fields.grade2,
            grade3: fields.grade3,
            average: mean_of(fields.grade1, fields.grade2, fields.grade3),
        }
    }

    pub fn grades(&self) -> [f64; 3] {
        [self.grade1, self.grade2, self.grade3]
    }
}

impl Record for Student {
    type Fields = StudentFields;
    const KEY: &'static str = "students";

    fn create(id: RecordId, fields: StudentFields) -> Self {
        Student::new(id, fields)
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&mut self, fields: StudentFields) {
        self.name = fields.name;
        self.grade1 = fields.grade1;
        self.grade2 = fields.grade2;
        self.grade3 = fields.grade3;
        self.recompute_derived();
    }

    fn recompute_derived(&mut self) {
        self.average = mean_of(self.grade1, self.grade2, self.grade3);
    }
}

/// Replacement values for a to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub text: String,
    pub completed: bool,
}

impl TodoFields {
    /// Fields for a brand new, not yet completed item.
    pub fn open(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// The fields of this item with `completed` flipped.
    pub fn toggled(&self) -> TodoFields {
        TodoFields {
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}

impl Record for Todo {
    type Fields = TodoFields;
    const KEY: &'static str = "todos";

    fn create(id: RecordId, fields: TodoFields) -> Self {
        Self {
            id,
            text: fields.text,
            completed: fields.completed,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&mut self, fields: TodoFields) {
        self.text = fields.text;
        self.completed = fields.completed;
    }
}
