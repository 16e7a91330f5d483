//! Handler for the `edit` command.

use anyhow::{bail, Result};
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::types::{parse_due_date, Category, TaskId, TaskUpdate};

/// Fields the user asked to change.
pub struct EditArgs<'a> {
    pub title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub due: Option<&'a str>,
    pub clear_due: bool,
    pub description: Option<&'a str>,
}

impl EditArgs<'_> {
    fn into_update(self) -> Result<TaskUpdate> {
        let due_date = match (self.due, self.clear_due) {
            (Some(_), true) => bail!("--due and --clear-due cannot be combined"),
            (Some(raw), false) => Some(Some(parse_due_date(raw)?)),
            (None, true) => Some(None),
            (None, false) => None,
        };
        Ok(TaskUpdate {
            title: self.title.map(str::to_string),
            description: self.description.map(str::to_string),
            category: self.category.map(Category::from_label),
            due_date,
            completed: None,
        })
    }
}

/// Updates the given fields of a task.
///
/// # Errors
/// Returns error if nothing was given to change, the task does not exist, or
/// the new values are invalid.
pub fn handle(config: &Config, id: i64, args: EditArgs<'_>) -> Result<()> {
    let update = args.into_update()?;
    if update.is_empty() {
        bail!("Nothing to update. Pass at least one of --title, --category, --due, --clear-due, --description.");
    }

    let conn = Db::connect(&config.data_dir)?;
    let task = TaskRepo::new(&conn).update(TaskId(id), &update)?;

    println!(
        "{} Updated [{}] {} ({})",
        "✓".green(),
        task.id.to_string().yellow(),
        task.title,
        task.category.to_string().dimmed()
    );
    Ok(())
}
