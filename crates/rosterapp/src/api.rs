//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every roster operation,
//! whatever UI sits on top of it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns state**: the current student and to-do collections plus the id source.
//!   There is no process-wide store; drop the API and the state goes with it.
//! - **Hydrates once**: [`RosterApi::open`] loads both kinds from storage before
//!   any action can run, then seeds the id source past every loaded id.
//! - **Validates**: raw user values are checked here. A rejected input comes back
//!   as `Err(RosterError::Validation(_))` and nothing changes.
//! - **Dispatches** to the command modules and returns their `CmdResult`.
//!
//! ## Outcomes
//!
//! | Situation                    | Returned                                   |
//! |------------------------------|--------------------------------------------|
//! | Applied                      | `Ok(result)` with `result.changed == true` |
//! | Unknown id (edit/delete/...) | `Ok(result)` with `result.changed == false`|
//! | Edit with identical values   | `Ok(result)`, `changed == false`, info msg |
//! | Invalid input                | `Err(RosterError::Validation(_))`          |
//! | Storage write failed         | `Err(..)`, state unchanged                 |
//!
//! ## Generic Over the Backend
//!
//! `RosterApi<B: KeyValueBackend>`:
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::ids::{ClockIds, IdSource};
use crate::model::{RecordId, Student, Todo};
use crate::persistence::PersistenceBridge;
use crate::records::Collection;
use crate::storage::KeyValueBackend;
use crate::validation::{validate_student, validate_todo_text, StudentInput};
use crate::views::{self, TodoPartition};

pub struct RosterApi<B: KeyValueBackend> {
    bridge: PersistenceBridge<B>,
    ids: Box<dyn IdSource>,
    students: Collection<Student>,
    todos: Collection<Todo>,
}

impl<B: KeyValueBackend> RosterApi<B> {
    /// Hydrate from `backend` using clock-based ids.
    pub fn open(backend: B) -> Self {
        Self::with_id_source(backend, Box::new(ClockIds::new()))
    }

    pub fn with_id_source(backend: B, mut ids: Box<dyn IdSource>) -> Self {
        let bridge = PersistenceBridge::new(backend);
        let students = bridge.hydrate::<Student>();
        let todos = bridge.hydrate::<Todo>();
        for id in students.max_id().into_iter().chain(todos.max_id()) {
            ids.observe(id);
        }
        Self {
            bridge,
            ids,
            students,
            todos,
        }
    }

    pub fn add_student(&mut self, input: &StudentInput) -> Result<CmdResult> {
        let fields = validate_student(input)?;
        commands::students::add(&self.bridge, self.ids.as_mut(), &mut self.students, fields)
    }

    pub fn edit_student(&mut self, id: RecordId, input: &StudentInput) -> Result<CmdResult> {
        let fields = validate_student(input)?;
        commands::students::edit(&self.bridge, &mut self.students, id, fields)
    }

    pub fn delete_student(&mut self, id: RecordId) -> Result<CmdResult> {
        commands::students::delete(&self.bridge, &mut self.students, id)
    }

    pub fn list_students(&self) -> CmdResult {
        commands::students::list(&self.students)
    }

    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        let text = validate_todo_text(text)?;
        commands::todos::add(&self.bridge, self.ids.as_mut(), &mut self.todos, text)
    }

    pub fn edit_todo(&mut self, id: RecordId, text: &str) -> Result<CmdResult> {
        let text = validate_todo_text(text)?;
        commands::todos::edit(&self.bridge, &mut self.todos, id, text)
    }

    pub fn toggle_todo(&mut self, id: RecordId) -> Result<CmdResult> {
        commands::todos::toggle(&self.bridge, &mut self.todos, id)
    }

    pub fn delete_todo(&mut self, id: RecordId) -> Result<CmdResult> {
        commands::todos::delete(&self.bridge, &mut self.todos, id)
    }

    pub fn list_todos(&self) -> CmdResult {
        commands::todos::list(&self.todos)
    }

    /// Both listings in one result.
    pub fn list_all(&self) -> CmdResult {
        self.list_todos().merge(self.list_students())
    }

    /// Drop stored state. With neither flag set, both kinds are cleared.
    pub fn reset(&mut self, students: bool, todos: bool) -> Result<CmdResult> {
        let both = !students && !todos;
        let mut result = CmdResult::default();
        if students || both {
            result = result.merge(commands::reset::run(&self.bridge, &mut self.students)?);
        }
        if todos || both {
            result = result.merge(commands::reset::run(&self.bridge, &mut self.todos)?);
        }
        Ok(result)
    }

    pub fn students(&self) -> &Collection<Student> {
        &self.students
    }

    pub fn todos(&self) -> &Collection<Todo> {
        &self.todos
    }

    pub fn class_average(&self) -> f64 {
        views::class_average(&self.students)
    }

    pub fn todo_partition(&self) -> TodoPartition {
        views::partition(&self.todos)
    }

    pub fn backend(&self) -> &B {
        self.bridge.backend()
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
