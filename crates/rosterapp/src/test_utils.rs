use crate::api::RosterApi;
use crate::ids::SequentialIds;
use crate::storage::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway data directory. Each [`TestEnv::open`] is a fresh "process start"
/// against the same files.
pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(&self.root)
    }

    /// Hydrate a new API from disk with deterministic ids.
    pub fn open(&self) -> RosterApi<FsBackend> {
        RosterApi::with_id_source(self.backend(), Box::new(SequentialIds::default()))
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(format!("{}.json", key))).ok()
    }
}
