//! Input validation at the API boundary.
//!
//! Rules:
//! - Names and to-do texts must be non-empty after trimming; the trimmed text is kept.
//! - Each of a student's three grades must parse as a finite number in `[1, 10]`.
//!
//! Transitions never re-check any of this; an action is only built from values
//! that passed here.

use crate::model::{StudentFields, TodoFields};

pub const MIN_GRADE: f64 = 1.0;
pub const MAX_GRADE: f64 = 10.0;

/// Raw, user-supplied values for a student, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub grades: [String; 3],
}

impl StudentInput {
    pub fn new(name: impl Into<String>, grades: [&str; 3]) -> Self {
        Self {
            name: name.into(),
            grades: grades.map(str::to_string),
        }
    }
}

/// Validates student input and converts it into fields ready for a transition.
///
/// # Examples
/// ```
/// use rosterapp::validation::{validate_student, StudentInput};
///
/// let fields = validate_student(&StudentInput::new(" An ", ["1", "10", "5.5"])).unwrap();
/// assert_eq!(fields.name, "An");
/// assert_eq!(fields.grade3, 5.5);
///
/// assert!(validate_student(&StudentInput::new("An", ["0", "5", "5"])).is_err());
/// assert!(validate_student(&StudentInput::new("  ", ["5", "5", "5"])).is_err());
/// ```
pub fn validate_student(input: &StudentInput) -> Result<StudentFields, ValidationError> {
    let name = required_text(&input.name, ValidationError::EmptyName)?;
    let [grade1, grade2, grade3] = &input.grades;
    Ok(StudentFields {
        name,
        grade1: parse_grade(1, grade1)?,
        grade2: parse_grade(2, grade2)?,
        grade3: parse_grade(3, grade3)?,
    })
}

/// Validates the text of a to-do item.
pub fn validate_todo_text(text: &str) -> Result<String, ValidationError> {
    required_text(text, ValidationError::EmptyText)
}

/// Validates a replacement for an existing item, keeping its completion state.
pub fn validate_todo(text: &str, completed: bool) -> Result<TodoFields, ValidationError> {
    Ok(TodoFields {
        text: validate_todo_text(text)?,
        completed,
    })
}

fn required_text(raw: &str, empty: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    Ok(trimmed.to_string())
}

fn parse_grade(slot: u8, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::GradeNotANumber {
            slot,
            raw: trimmed.to_string(),
        })?;

    if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
        return Err(ValidationError::GradeOutOfRange { slot, value });
    }
    Ok(value)
}

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    EmptyText,
    GradeNotANumber { slot: u8, raw: String },
    GradeOutOfRange { slot: u8, value: f64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "student name cannot be empty"),
            ValidationError::EmptyText => write!(f, "to-do text cannot be empty"),
            ValidationError::GradeNotANumber { slot, raw } => {
                write!(f, "grade {} must be a number, got '{}'", slot, raw)
            }
            ValidationError::GradeOutOfRange { slot, value } => {
                write!(
                    f,
                    "grade {} must be between {} and {}, got {}",
                    slot, MIN_GRADE, MAX_GRADE, value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
