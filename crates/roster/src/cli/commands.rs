//! Dispatch from parsed arguments to [`RosterApi`].
//!
//! Settings are loaded first so the logging level from configuration is in
//! place before storage is read; hydration warnings about damaged files then
//! reach stderr.

use super::logging;
use super::render::render;
use super::setup::{Cli, Commands, StudentCommands, TodoCommands};
use anyhow::{Context, Result};
use clap::Parser;
use rosterapp::api::RosterApi;
use rosterapp::commands::CmdResult;
use rosterapp::config::RosterConfig;
use rosterapp::init::{self, Settings};
use rosterapp::storage::fs_backend::FsBackend;
use rosterapp::validation::StudentInput;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = init::load_settings(cli.data_dir.clone())?;
    logging::init(cli.verbose, &settings.config.log_level);

    match cli.command {
        Some(Commands::Config) => show_config(&settings, cli.json),
        command => {
            let mut ctx = init::open(settings);
            let result = dispatch(&mut ctx.api, command)?;
            print(&result, &ctx.config, cli.json)
        }
    }
}

fn dispatch(api: &mut RosterApi<FsBackend>, command: Option<Commands>) -> Result<CmdResult> {
    tracing::debug!(?command, "dispatching");
    let result = match command {
        None => api.list_all(),
        Some(Commands::Student { action }) => match action {
            StudentCommands::Add { name, grades } => {
                api.add_student(&StudentInput::new(&name, grades.as_array()))?
            }
            StudentCommands::Edit { id, name, grades } => {
                api.edit_student(id, &StudentInput::new(&name, grades.as_array()))?
            }
            StudentCommands::Delete { id } => api.delete_student(id)?,
            StudentCommands::List => api.list_students(),
        },
        Some(Commands::Todo { action }) => match action {
            TodoCommands::Add { text } => api.add_todo(&text.join(" "))?,
            TodoCommands::Edit { id, text } => api.edit_todo(id, &text.join(" "))?,
            TodoCommands::Toggle { id } => api.toggle_todo(id)?,
            TodoCommands::Delete { id } => api.delete_todo(id)?,
            TodoCommands::List => api.list_todos(),
        },
        Some(Commands::Reset { students, todos }) => api.reset(students, todos)?,
        Some(Commands::Config) => anyhow::bail!("config is shown without opening the store"),
    };
    Ok(result)
}

fn print(result: &CmdResult, config: &RosterConfig, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(result).context("Failed to encode result")?;
        println!("{}", text);
    } else {
        print!("{}", render(result, config));
    }
    Ok(())
}

fn show_config(settings: &Settings, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "data_dir": settings.data_dir,
            "config": settings.config,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    println!("data dir: {}", settings.data_dir.display());
    print!("{}", settings.config.to_toml()?);
    Ok(())
}
