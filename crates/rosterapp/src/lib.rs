//! # Roster Architecture
//!
//! Roster keeps two independent collections, a class roster of students and a
//! to-do list. It is a **UI-agnostic library**; the `roster` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the current collections and the id source           │
//! │  - Validates raw user input before anything changes         │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds actions, runs transitions, persists, reports      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Records + Views (records/, views.rs)                       │
//! │  - Pure transitions: (collection, action) -> collection     │
//! │  - Derived averages and the done/not-done partition         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persistence.rs, storage/)                     │
//! │  - PersistenceBridge over an abstract key-value backend     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. Diagnostics
//! go through `tracing`; installing a subscriber is the client's job.
//!
//! ## Testing Strategy
//!
//! - **records / views / validation**: plain unit tests on values.
//! - **commands / api**: driven against [`storage::mem_backend::MemBackend`] with a
//!   deterministic [`ids::SequentialIds`] source.
//! - **storage**: `FsBackend` is covered by integration tests in `tests/` using
//!   temporary directories.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod persistence;
pub mod records;
pub mod storage;
pub mod validation;
pub mod views;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
