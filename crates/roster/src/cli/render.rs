//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal text. Styling comes from `console`, which
//! drops colors on its own when stdout is not a terminal.
//!
//! Listing layout:
//!
//! ```text
//! To-dos
//!   1718000000001  water plants
//! Done
//!   1718000000000  buy milk          (struck through)
//! Students
//!   1718000000002  An        7.00  8.00  9.00   avg 8.00
//! Class average: 8.00
//! ```

use console::style;
use rosterapp::api::{CmdMessage, MessageLevel};
use rosterapp::commands::CmdResult;
use rosterapp::config::RosterConfig;
use rosterapp::model::{Student, Todo};
use rosterapp::views::TodoPartition;

const EMPTY: &str = "(none)";

pub fn render(result: &CmdResult, config: &RosterConfig) -> String {
    let mut out = Vec::new();

    if let Some(split) = &result.todo_partition {
        render_partition(split, &mut out);
    }
    if let Some(average) = result.class_average {
        render_students(&result.listed_students, average, config, &mut out);
    }
    for message in &result.messages {
        out.push(render_message(message));
    }

    let mut text = out.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Success => style(&message.content).green().to_string(),
        MessageLevel::Warning => style(&message.content).yellow().to_string(),
        MessageLevel::Info => style(&message.content).dim().to_string(),
    }
}

fn render_partition(split: &TodoPartition, out: &mut Vec<String>) {
    out.push(style("To-dos").bold().to_string());
    section(&split.incomplete, |t| todo_line(t, false), out);
    out.push(style("Done").bold().to_string());
    section(&split.completed, |t| todo_line(t, true), out);
}

fn render_students(students: &[Student], average: f64, config: &RosterConfig, out: &mut Vec<String>) {
    out.push(style("Students").bold().to_string());
    let width = students.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    section(students, |s| student_line(s, width, config), out);
    out.push(format!(
        "Class average: {}",
        style(config.format_average(average)).bold()
    ));
}

fn section<T>(items: &[T], line: impl Fn(&T) -> String, out: &mut Vec<String>) {
    if items.is_empty() {
        out.push(format!("  {}", style(EMPTY).dim()));
        return;
    }
    out.extend(items.iter().map(line));
}

fn todo_line(todo: &Todo, done: bool) -> String {
    let text = if done {
        style(&todo.text).strikethrough().dim().to_string()
    } else {
        todo.text.clone()
    };
    format!("  {}  {}", style(todo.id).cyan(), text)
}

fn student_line(student: &Student, width: usize, config: &RosterConfig) -> String {
    let grades: Vec<String> = student
        .grades()
        .iter()
        .map(|g| config.format_average(*g))
        .collect();
    format!(
        "  {}  {:<width$}  {}   avg {}",
        style(student.id).cyan(),
        student.name,
        grades.join("  "),
        config.format_average(student.average),
        width = width
    )
}
