//! Task Repository: create, read, update and delete stored tasks.

use crate::engine::error::TaskError;
use crate::engine::types::{
    format_due_date, parse_due_date, Category, NewTask, Task, TaskId, TaskUpdate,
};
use anyhow::{Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

const TASK_SELECT: &str =
    "SELECT id, title, description, category, due_date, completed FROM tasks";

pub struct TaskRepo<'a> {
    conn: &'a Connection,
}

impl<'a> TaskRepo<'a> {
    /// Creates a new repository instance borrowing the connection.
    #[must_use]
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Stores a new, not yet completed task.
    ///
    /// # Errors
    /// Returns an error if validation or the insertion fails.
    pub fn add(&self, new: &NewTask) -> Result<Task> {
        new.validate()?;
        self.conn.execute(
            "INSERT INTO tasks (title, description, category, due_date, completed)
             VALUES (?1, ?2, ?3, ?4, 0)",
            params![
                new.title.trim(),
                new.description,
                category_to_sql(&new.category),
                new.due_date.map(format_due_date),
            ],
        )?;
        let id = TaskId(self.conn.last_insert_rowid());
        tracing::info!(task_id = %id, category = %new.category, "task created");
        self.get(id)
    }

    /// Retrieves every stored task in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        let sql = format!("{TASK_SELECT} ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        tracing::debug!(tasks = tasks.len(), "snapshot read from store");
        Ok(tasks)
    }

    /// Finds a task by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn find_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let sql = format!("{TASK_SELECT} WHERE id = ?1");
        self.conn
            .query_row(&sql, params![id.0], row_to_task)
            .optional()
            .context("Search by ID failed")
    }

    /// Like `find_by_id`, but a missing task is an error.
    ///
    /// # Errors
    /// Returns `TaskError::NotFound` if no task has this id.
    pub fn get(&self, id: TaskId) -> Result<Task> {
        self.find_by_id(id)?
            .ok_or_else(|| TaskError::NotFound(id).into())
    }

    /// Applies a partial update and returns the stored result.
    ///
    /// # Errors
    /// Returns an error if the task is missing, the update is invalid, or the
    /// write fails.
    pub fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Task> {
        let mut task = self.get(id)?;
        update.apply(&mut task)?;
        self.conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, category = ?3, due_date = ?4,
             completed = ?5 WHERE id = ?6",
            params![
                task.title,
                task.description,
                category_to_sql(&task.category),
                task.due_date.map(format_due_date),
                task.completed,
                id.0,
            ],
        )?;
        tracing::info!(task_id = %id, completed = task.completed, "task updated");
        Ok(task)
    }

    /// Marks a task done or not done.
    ///
    /// # Errors
    /// Returns an error if the task is missing or the write fails.
    pub fn set_completed(&self, id: TaskId, completed: bool) -> Result<Task> {
        let update = TaskUpdate {
            completed: Some(completed),
            ..TaskUpdate::default()
        };
        self.update(id, &update)
    }

    /// Flips the completion flag.
    ///
    /// # Errors
    /// Returns an error if the task is missing or the write fails.
    pub fn toggle(&self, id: TaskId) -> Result<Task> {
        let task = self.get(id)?;
        self.set_completed(id, !task.completed)
    }

    /// Deletes a task.
    ///
    /// # Errors
    /// Returns `TaskError::NotFound` if no task has this id.
    pub fn delete(&self, id: TaskId) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id.0])?;
        if removed == 0 {
            return Err(TaskError::NotFound(id).into());
        }
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Inserts tasks keeping their ids, replacing stored tasks with the same id.
    ///
    /// # Errors
    /// Returns an error if any insertion fails.
    pub fn import(&self, tasks: &[Task]) -> Result<usize> {
        let mut stmt = self.conn.prepare(
            "INSERT OR REPLACE INTO tasks (id, title, description, category, due_date, completed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for task in tasks {
            stmt.execute(params![
                task.id.0,
                task.title,
                task.description,
                category_to_sql(&task.category),
                task.due_date.map(format_due_date),
                task.completed,
            ])
            .with_context(|| format!("Failed to import task {}", task.id))?;
        }
        tracing::info!(tasks = tasks.len(), "snapshot imported");
        Ok(tasks.len())
    }
}

fn category_to_sql(category: &Category) -> Option<&str> {
    match category {
        Category::Uncategorized => None,
        other => Some(other.label()),
    }
}

/// Converts a database row to a Task.
fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let category: Option<String> = row.get(3)?;
    let due_date = row
        .get::<_, Option<String>>(4)?
        .map(|raw| parse_due_date(&raw))
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: TaskId(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        category: Category::from_label(category.as_deref().unwrap_or_default()),
        due_date,
        completed: row.get(5)?,
    })
}
