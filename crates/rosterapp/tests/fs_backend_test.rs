use rosterapp::model::{RecordId, Todo, TodoFields};
use rosterapp::persistence::PersistenceBridge;
use rosterapp::records::{Action, Collection};
use rosterapp::storage::fs_backend::FsBackend;
use rosterapp::storage::KeyValueBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("store"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Nothing stored yet
    assert_eq!(backend.get("todos").unwrap(), None);

    // 2. Write creates the directory
    backend.set("todos", "[]").unwrap();
    assert!(backend.root().is_dir());
    assert_eq!(backend.get("todos").unwrap().as_deref(), Some("[]"));

    // 3. Overwrite
    backend.set("todos", "[1]").unwrap();
    assert_eq!(backend.get("todos").unwrap().as_deref(), Some("[1]"));

    // 4. Remove, twice
    backend.remove("todos").unwrap();
    backend.remove("todos").unwrap();
    assert_eq!(backend.get("todos").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.set("students", "[]").unwrap();
    backend.set("students", "[{}]").unwrap();

    let expected = backend.root().join("students.json");
    assert_eq!(fs::read_to_string(&expected).unwrap(), "[{}]");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_keys_are_separate_files() {
    let (_dir, backend) = setup();
    backend.set("students", "[]").unwrap();
    backend.set("todos", "[]").unwrap();

    let mut names: Vec<String> = fs::read_dir(backend.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["students.json", "todos.json"]);
}

#[test]
fn test_fs_backend_rejects_bad_keys() {
    let (_dir, backend) = setup();
    assert!(backend.set("../escape", "x").is_err());
    assert!(backend.get("a/b").is_err());
}

#[test]
fn test_bridge_round_trip_through_files() {
    let (_dir, backend) = setup();
    let bridge = PersistenceBridge::new(backend);

    let todos = (1..=3).fold(Collection::<Todo>::new(), |c, i| {
        c.transition(Action::Add {
            id: RecordId(1_700_000_000_000 + i),
            fields: TodoFields {
                text: format!("task {}", i),
                completed: i == 2,
            },
        })
    });
    bridge.save(&todos).unwrap();

    let restored: Collection<Todo> = bridge.hydrate();
    assert_eq!(restored, todos);
}

#[test]
fn test_bridge_ignores_corrupt_file() {
    let (_dir, backend) = setup();
    backend.set("todos", "this is not json").unwrap();
    let bridge = PersistenceBridge::new(backend);
    assert!(bridge.hydrate::<Todo>().is_empty());
}
