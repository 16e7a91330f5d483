//! JSON snapshots in the REST backend's response shape.

use super::error::TaskError;
use super::types::{parse_due_date, Category, Task, TaskId};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Wire record before due dates are parsed, so date failures surface as
/// `InvalidDate` rather than as a generic JSON error.
#[derive(Deserialize)]
struct WireTask {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<WireTask> for Task {
    type Error = TaskError;

    fn try_from(wire: WireTask) -> Result<Self, Self::Error> {
        let due_date = match wire.due_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_due_date(raw)?),
            _ => None,
        };
        Ok(Self {
            id: wire.id,
            title: wire.title,
            description: wire.description.unwrap_or_default(),
            category: wire.category,
            due_date,
            completed: wire.completed,
        })
    }
}

/// Parses and validates a JSON array of tasks.
///
/// # Errors
/// Returns `InvalidDate` for an unparseable due date, `InvalidInput` for
/// malformed JSON, a blank title, or a repeated id.
pub fn parse_snapshot(json: &str) -> Result<Vec<Task>, TaskError> {
    let wire: Vec<WireTask> =
        serde_json::from_str(json).map_err(|e| TaskError::InvalidInput(e.to_string()))?;
    let tasks = wire
        .into_iter()
        .map(Task::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    validate_snapshot(&tasks)?;
    Ok(tasks)
}

/// Checks the snapshot invariants: unique ids and non-blank titles.
///
/// # Errors
/// Returns `InvalidInput` naming the first offending task.
pub fn validate_snapshot(tasks: &[Task]) -> Result<(), TaskError> {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id) {
            return Err(TaskError::InvalidInput(format!("duplicate task id {}", task.id)));
        }
        if task.title.trim().is_empty() {
            return Err(TaskError::InvalidInput(format!("task {} has an empty title", task.id)));
        }
    }
    Ok(())
}

/// Reads a snapshot file from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or fails validation.
pub fn read_snapshot(path: &Path) -> Result<Vec<Task>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let tasks = parse_snapshot(&raw)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), tasks = tasks.len(), "snapshot loaded");
    Ok(tasks)
}

/// Serializes tasks in the REST response shape.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}
