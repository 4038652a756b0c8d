use clap::{ArgAction, Parser, Subcommand};
use rosterapp::model::RecordId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Keep a class roster and a to-do list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding students.json and todos.json
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage students and their grades
    #[command(alias = "s", display_order = 1)]
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },

    /// Manage the to-do list
    #[command(alias = "t", display_order = 2)]
    Todo {
        #[command(subcommand)]
        action: TodoCommands,
    },

    /// Remove stored state (both collections unless one is chosen)
    #[command(display_order = 10)]
    Reset {
        /// Only clear students
        #[arg(long)]
        students: bool,

        /// Only clear to-dos
        #[arg(long)]
        todos: bool,
    },

    /// Show the effective configuration
    #[command(display_order = 11)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Add a student with three grades between 1 and 10
    #[command(alias = "n")]
    Add {
        name: String,
        #[command(flatten)]
        grades: GradeArgs,
    },

    /// Replace a student's name and grades
    #[command(alias = "e")]
    Edit {
        id: RecordId,
        name: String,
        #[command(flatten)]
        grades: GradeArgs,
    },

    /// Remove a student
    #[command(alias = "rm")]
    Delete { id: RecordId },

    /// List students and the class average
    #[command(alias = "ls")]
    List,
}

#[derive(clap::Args, Debug)]
pub struct GradeArgs {
    #[arg(allow_hyphen_values = true)]
    pub grade1: String,
    #[arg(allow_hyphen_values = true)]
    pub grade2: String,
    #[arg(allow_hyphen_values = true)]
    pub grade3: String,
}

impl GradeArgs {
    pub fn as_array(&self) -> [&str; 3] {
        [&self.grade1, &self.grade2, &self.grade3]
    }
}

#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// Add an item
    #[command(alias = "n")]
    Add {
        /// Text words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Replace an item's text
    #[command(alias = "e")]
    Edit {
        id: RecordId,
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Mark an item done, or not done again
    #[command(alias = "x")]
    Toggle { id: RecordId },

    /// Remove an item
    #[command(alias = "rm")]
    Delete { id: RecordId },

    /// List open and finished items
    #[command(alias = "ls")]
    List,
}
