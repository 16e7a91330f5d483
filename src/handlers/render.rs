//! Terminal rendering shared by the list views.

use chrono::NaiveDateTime;
use colored::{Color, ColoredString, Colorize};
use serde::Serialize;
use taskboard::engine::classify::DueStatus;
use taskboard::engine::types::{display_due_date, Task};
use taskboard::engine::view::description_preview;

/// A task plus its derived due status, for `--json` output.
#[derive(Serialize)]
pub struct TaskView<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    pub status: String,
    pub label: Option<String>,
    pub overdue: bool,
}

impl<'a> TaskView<'a> {
    #[must_use]
    pub fn new(task: &'a Task, now: NaiveDateTime) -> Self {
        let status = task.due_status(now);
        Self {
            task,
            status: status.to_string(),
            label: status.label(),
            overdue: task.is_overdue(now),
        }
    }
}

/// Prints tasks as a JSON array of `TaskView`s.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn print_json(tasks: &[Task], now: NaiveDateTime) -> anyhow::Result<()> {
    let views: Vec<_> = tasks.iter().map(|t| TaskView::new(t, now)).collect();
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

/// Terminal colour for a due-status hint; `None` leaves the text plain.
fn hint_color(hint: &str) -> Option<Color> {
    match hint {
        "gray" => Some(Color::BrightBlack),
        "yellow" => Some(Color::Yellow),
        "amber" => Some(Color::TrueColor { r: 255, g: 176, b: 0 }),
        "red" => Some(Color::Red),
        _ => None,
    }
}

/// Colours a due label the way the list badge shows it.
#[must_use]
pub fn paint_due(status: DueStatus) -> Option<ColoredString> {
    let label = status.label()?;
    let painted = match hint_color(status.color_hint()) {
        Some(color) => label.color(color),
        None => label.normal(),
    };
    Some(if status.is_past_due() {
        painted.bold()
    } else {
        painted
    })
}

pub fn print_task(task: &Task, now: NaiveDateTime, expanded: bool) {
    let (icon, title) = if task.completed {
        ("✓".green(), task.title.strikethrough().dimmed())
    } else {
        ("○".dimmed(), task.title.normal())
    };
    println!("   {} [{}] {}", icon, task.id.to_string().blue(), title);

    if !task.description.is_empty() {
        for line in description_preview(&task.description, expanded).lines() {
            println!("        {line}");
        }
    }
    println!("        {}", format!("({})", task.category).italic().dimmed());

    if let Some(due) = task.due_date {
        let badge = paint_due(task.due_status(now))
            .map(|b| format!("  {b}"))
            .unwrap_or_default();
        println!("        📅 {}{}", display_due_date(due), badge);
    }
}
