use crate::commands::{commit, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdSource;
use crate::model::{RecordId, Student, StudentFields};
use crate::persistence::PersistenceBridge;
use crate::records::{Action, Collection};
use crate::storage::KeyValueBackend;
use crate::views::class_average;

pub fn add<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    ids: &mut dyn IdSource,
    students: &mut Collection<Student>,
    fields: StudentFields,
) -> Result<CmdResult> {
    let id = ids.next_id()?;
    let changed = commit(bridge, students, Action::Add { id, fields })?;

    let mut result = CmdResult::default().with_changed(changed);
    if let Some(student) = students.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Student added ({}): {}",
            id, student.name
        )));
        result.affected_students.push(student.clone());
    }
    Ok(result)
}

pub fn edit<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    students: &mut Collection<Student>,
    id: RecordId,
    fields: StudentFields,
) -> Result<CmdResult> {
    let changed = commit(bridge, students, Action::Edit { id, fields })?;

    let mut result = CmdResult::default().with_changed(changed);
    match students.get(id) {
        Some(student) if changed => {
            result.add_message(CmdMessage::success(format!(
                "Student updated ({}): {}",
                id, student.name
            )));
            result.affected_students.push(student.clone());
        }
        Some(student) => result.add_message(CmdMessage::info(format!(
            "No changes to student ({}): {}",
            id, student.name
        ))),
        None => result.add_message(CmdMessage::info(format!("No student with id {}", id))),
    }
    Ok(result)
}

pub fn delete<B: KeyValueBackend>(
    bridge: &PersistenceBridge<B>,
    students: &mut Collection<Student>,
    id: RecordId,
) -> Result<CmdResult> {
    let removed = students.get(id).cloned();
    let changed = commit(bridge, students, Action::Delete(id))?;

    let mut result = CmdResult::default().with_changed(changed);
    match removed {
        Some(student) => {
            result.add_message(CmdMessage::success(format!(
                "Student deleted ({}): {}",
                id, student.name
            )));
            result.affected_students.push(student);
        }
        None => result.add_message(CmdMessage::info(format!("No student with id {}", id))),
    }
    Ok(result)
}

pub fn list(students: &Collection<Student>) -> CmdResult {
    CmdResult {
        listed_students: students.records().to_vec(),
        class_average: Some(class_average(students)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::model::mean_of;
    use crate::storage::mem_backend::MemBackend;

    fn fields(name: &str, g: [f64; 3]) -> StudentFields {
        StudentFields {
            name: name.to_string(),
            grade1: g[0],
            grade2: g[1],
            grade3: g[2],
        }
    }

    #[test]
    fn add_assigns_fresh_ids_in_order() {
        let bridge = PersistenceBridge::new(MemBackend::new());
        let mut ids = SequentialIds::starting_at(100);
        let mut students = Collection::new();

        for name in ["An", "Binh", "Chi"] {
            let result = add(&bridge, &mut ids, &mut students, fields(name, [5.0, 6.0, 7.0])).unwrap();
            assert!(result.changed);
            assert_eq!(result.affected_students.len(), 1);
        }

        assert_eq!(
            students.ids(),
            vec![RecordId(100), RecordId(101), RecordId(102)]
        );
        assert_eq!(bridge.hydrate::<Student>(), students);
    }

    #[test]
    fn edit_recomputes_average_and_persists() {
        let bridge = PersistenceBridge::new(MemBackend::new());
        let mut ids = SequentialIds::default();
        let mut students = Collection::new();
        add(&bridge, &mut ids, &mut students, fields("An", [1.0, 1.0, 1.0])).unwrap();

        let result = edit(&bridge, &mut students, RecordId(1), fields("An", [10.0, 9.0, 3.5])).unwrap();
        assert!(result.changed);
        let stored = bridge.hydrate::<Student>();
        assert_eq!(stored.records()[0].average, mean_of(10.0, 9.0, 3.5));
    }

    #[test]
    fn edit_unknown_is_reported_as_no_op() {
        let bridge = PersistenceBridge::new(MemBackend::new());
        let mut students = Collection::new();
        let result = edit(&bridge, &mut students, RecordId(4), fields("X", [5.0, 5.0, 5.0])).unwrap();
        assert!(!result.changed);
        assert!(result.affected_students.is_empty());
        assert!(result.messages[0].content.contains("No student"));
    }

    #[test]
    fn edit_with_identical_values_is_not_written() {
        let backend = MemBackend::new();
        let bridge = PersistenceBridge::new(&backend);
        let mut ids = SequentialIds::default();
        let mut students = Collection::new();
        add(&bridge, &mut ids, &mut students, fields("An", [5.0, 6.0, 7.0])).unwrap();
        backend.set_simulate_write_error(true);

        let result = edit(&bridge, &mut students, RecordId(1), fields("An", [5.0, 6.0, 7.0])).unwrap();
        assert!(!result.changed);
        assert!(result.affected_students.is_empty());
        assert_eq!(result.messages[0].content, "No changes to student (1): An");
    }

    #[test]
    fn deleting_last_student_writes_empty_array() {
        let backend = MemBackend::new();
        let bridge = PersistenceBridge::new(&backend);
        let mut ids = SequentialIds::default();
        let mut students = Collection::new();
        add(&bridge, &mut ids, &mut students, fields("An", [5.0, 5.0, 5.0])).unwrap();

        let result = delete(&bridge, &mut students, RecordId(1)).unwrap();
        assert!(result.changed);
        assert_eq!(result.affected_students[0].name, "An");
        assert_eq!(backend.get("students").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn list_includes_class_average() {
        let bridge = PersistenceBridge::new(MemBackend::new());
        let mut ids = SequentialIds::default();
        let mut students = Collection::new();
        assert_eq!(list(&students).class_average, Some(0.0));

        add(&bridge, &mut ids, &mut students, fields("An", [4.0, 4.0, 4.0])).unwrap();
        add(&bridge, &mut ids, &mut students, fields("Binh", [8.0, 8.0, 8.0])).unwrap();
        let listed = list(&students);
        assert_eq!(listed.listed_students.len(), 2);
        assert_eq!(listed.class_average, Some(6.0));
    }
}
