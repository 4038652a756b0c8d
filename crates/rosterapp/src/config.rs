//! # Configuration
//!
//! Roster configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ROSTER_DATA_DIR`, `ROSTER_LOG_LEVEL`, `ROSTER_AVERAGE_PRECISION`.
//! 2. **Data directory config**: `<data_dir>/roster.toml`.
//! 3. **User config**: `roster.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where `students.json` and `todos.json` live |
//! | `log_level` | `warn` | Default log filter when `RUST_LOG` is unset |
//! | `average_precision` | `2` | Decimals shown for averages |

use crate::error::{Result, RosterError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "roster.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Directory holding the stored collections.
    #[config(env = "ROSTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "warn", "debug", "rosterapp=trace").
    #[config(env = "ROSTER_LOG_LEVEL", default = "warn")]
    pub log_level: String,

    /// Number of decimals shown for averages.
    #[config(env = "ROSTER_AVERAGE_PRECISION", default = 2)]
    pub average_precision: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "warn".to_string(),
            average_precision: 2,
        }
    }
}

impl RosterConfig {
    /// Load from the environment and the given files, highest priority first.
    /// Missing files are skipped.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        builder
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    pub fn format_average(&self, value: f64) -> String {
        format!("{:.*}", self.average_precision, value)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RosterError::Config(e.to_string()))
    }
}
