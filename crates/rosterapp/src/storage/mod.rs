//! # Storage Layer
//!
//! Roster persists each collection as one value in a key-value store. The
//! [`KeyValueBackend`] trait is that port: it knows nothing about students or
//! to-dos, only strings under keys. [`crate::persistence::PersistenceBridge`]
//! decides what goes in and how it is encoded.
//!
//! ## Keys
//!
//! - `students`: JSON array of every student, in roster order
//! - `todos`: JSON array of every to-do item, in list order
//!
//! Each write replaces the whole value; there is no append log.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key under a data directory.
//! - [`mem_backend::MemBackend`]: a map in memory, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── roster.toml      # Optional configuration
//! ├── students.json
//! └── todos.json
//! ```

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;

/// Abstract interface for raw key-value I/O.
///
/// All methods take `&self`; roster is single-threaded and backends that need
/// mutation use interior mutability.
pub trait KeyValueBackend {
    /// Read the value stored under `key`.
    /// Returns `Ok(None)` if nothing is stored; `Err` only on real I/O failures.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic: readers see either the old value or the new one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
