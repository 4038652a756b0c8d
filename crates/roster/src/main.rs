//! # Roster CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and turns errors into exit codes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - logging bootstrap (logging.rs)                           │
//! │  - dispatch to the API facade (commands.rs)                 │
//! │  - terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  rosterapp::api::RosterApi                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: success, including edits/deletes of ids that do not exist
//! - `1`: any other failure (storage, configuration)
//! - `2`: input rejected by validation; nothing was changed

mod cli;

use rosterapp::error::RosterError;

fn main() {
    if let Err(e) = cli::run() {
        let rejected = e
            .downcast_ref::<RosterError>()
            .is_some_and(RosterError::is_rejection);
        if rejected {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
