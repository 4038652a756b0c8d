//! # Context Initialization
//!
//! Wires configuration, the data directory and the filesystem backend into a
//! ready [`RosterApi`].
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data-dir`) if given.
//! 2. `data_dir` from configuration (`ROSTER_DATA_DIR` or a config file).
//! 3. The OS data directory for roster (via the `directories` crate).
//!
//! ## Config Files
//!
//! Looked up in priority order: `<data_dir>/roster.toml`, then `roster.toml` in
//! the user config directory. `ROSTER_CONFIG_DIR` replaces the user config
//! directory, which keeps tests away from the real one.

use crate::api::RosterApi;
use crate::config::{RosterConfig, CONFIG_FILE};
use crate::error::{Result, RosterError};
use crate::storage::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Resolved configuration and data directory, before anything is read from storage.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: RosterConfig,
    pub data_dir: PathBuf,
}

pub struct RosterContext {
    pub api: RosterApi<FsBackend>,
    pub config: RosterConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "roster", "roster")
}

/// The user-level config file, if a config directory can be determined.
pub fn user_config_file() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ROSTER_CONFIG_DIR") {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Pick the data directory: override, then config, then the OS default.
pub fn resolve_data_dir(data_override: Option<PathBuf>, config: &RosterConfig) -> Result<PathBuf> {
    if let Some(dir) = data_override.or_else(|| config.data_dir.clone()) {
        return Ok(dir);
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine a data directory".to_string()))
}

/// Load configuration and resolve the data directory.
pub fn load_settings(data_override: Option<PathBuf>) -> Result<Settings> {
    let user_file: Vec<PathBuf> = user_config_file().into_iter().collect();
    let base = RosterConfig::load(&user_file)?;
    let data_dir = resolve_data_dir(data_override, &base)?;

    let mut files = vec![data_dir.join(CONFIG_FILE)];
    files.extend(user_file);
    let config = RosterConfig::load(&files)?;
    Ok(Settings { config, data_dir })
}

/// Hydrate the API from the settings' data directory.
pub fn open(settings: Settings) -> RosterContext {
    tracing::debug!(data_dir = %settings.data_dir.display(), "opening roster");
    let api = RosterApi::open(FsBackend::new(&settings.data_dir));
    RosterContext {
        api,
        config: settings.config,
        data_dir: settings.data_dir,
    }
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<RosterContext> {
    load_settings(data_override).map(open)
}
