//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution
//!
//! Running `roster` with no command lists both collections: open to-dos,
//! finished to-dos, then the class roster with its average.
//!
//! ## Ids
//!
//! Records are addressed by the id shown in listings (a millisecond timestamp
//! taken when the record was added).
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `logging`: tracing subscriber bootstrap
//! - `commands`: dispatch from parsed arguments to the API
//! - `render`: output formatting

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
