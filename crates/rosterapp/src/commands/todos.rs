use crate::commands::{commit, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdSource;
use crate::model::{RecordId, Todo, TodoFields};
use crate::persistence::PersistenceBridge;
use crate::records::{Action, Collection};
use crate::storage::KeyValueBackend;
use crate::views::partition;

pub fn add<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    ids: &mut dyn IdSource,
    todos: &mut Collection<Todo>,
    text: String,
) -> Result<CmdResult> {
    let id = ids.next_id()?;
    let changed = commit(
        bridge,
        todos,
        Action::Add {
            id,
            fields: TodoFields::open(text),
        },
    )?;

    let mut result = CmdResult::default().with_changed(changed);
    if let Some(todo) = todos.get(id) {
        result.add_message(CmdMessage::success(format!("To-do added ({}): {}", id, todo.text)));
        result.affected_todos.push(todo.clone());
    }
    Ok(result)
}

/// Replace the text of an item; its completion state is kept.
pub fn edit<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    todos: &mut Collection<Todo>,
    id: RecordId,
    text: String,
) -> Result<CmdResult> {
    let Some(completed) = todos.get(id).map(|t| t.completed) else {
        return Ok(not_found(id));
    };
    let changed = commit(
        bridge,
        todos,
        Action::Edit {
            id,
            fields: TodoFields { text, completed },
        },
    )?;

    let mut result = CmdResult::default().with_changed(changed);
    if let Some(todo) = todos.get(id) {
        if changed {
            result.add_message(CmdMessage::success(format!("To-do updated ({}): {}", id, todo.text)));
            result.affected_todos.push(todo.clone());
        } else {
            result.add_message(CmdMessage::info(format!("No changes to to-do ({}): {}", id, todo.text)));
        }
    }
    Ok(result)
}

pub fn toggle<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    todos: &mut Collection<Todo>,
    id: RecordId,
) -> Result<CmdResult> {
    let Some(fields) = todos.get(id).map(Todo::toggled) else {
        return Ok(not_found(id));
    };
    let changed = commit(bridge, todos, Action::Edit { id, fields })?;

    let mut result = CmdResult::default().with_changed(changed);
    if let Some(todo) = todos.get(id) {
        let verb = if todo.completed { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!("To-do {} ({}): {}", verb, id, todo.text)));
        result.affected_todos.push(todo.clone());
    }
    Ok(result)
}

pub fn delete<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    todos: &mut Collection<Todo>,
    id: RecordId,
) -> Result<CmdResult> {
    let Some(removed) = todos.get(id).cloned() else {
        return Ok(not_found(id));
    };
    let changed = commit(bridge, todos, Action::Delete(id))?;

    let mut result = CmdResult::default().with_changed(changed);
    result.add_message(CmdMessage::success(format!("To-do deleted ({}): {}", id, removed.text)));
    result.affected_todos.push(removed);
    Ok(result)
}

pub fn list(todos: &Collection<Todo>) -> CmdResult {
    CmdResult {
        todo_partition: Some(partition(todos)),
        ..Default::default()
    }
}

fn not_found(id: RecordId) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("No to-do with id {}", id)));
    result
}
