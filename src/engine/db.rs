//! Database bootstrap: opening the task store and applying its schema.

use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

const DB_FILE: &str = "tasks.db";

pub struct Db;

impl Db {
    /// Location of the database inside a data directory.
    #[must_use]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(DB_FILE)
    }

    /// Creates the data directory and database schema.
    ///
    /// # Errors
    /// Returns error if directory creation, DB opening, or migration fails.
    pub fn init(data_dir: &Path) -> Result<PathBuf> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).with_context(|| {
                format!("Failed to create data directory {}", data_dir.display())
            })?;
        }

        let db_path = Self::path(data_dir);
        let conn = Connection::open(&db_path).context("Failed to open database")?;
        Self::migrate(&conn)?;

        tracing::info!(path = %db_path.display(), "task store initialized");
        Ok(db_path)
    }

    /// Connects to an existing database.
    ///
    /// # Errors
    /// Returns error if the database file does not exist or cannot be opened.
    pub fn connect(data_dir: &Path) -> Result<Connection> {
        let db_path = Self::path(data_dir);
        if !db_path.exists() {
            bail!("Task store not initialized. Run `taskboard init` first.");
        }
        let conn = Connection::open(&db_path).context("Failed to open database")?;
        tracing::debug!(path = %db_path.display(), "task store opened");
        Ok(conn)
    }

    /// Applies the schema. Safe to run repeatedly.
    ///
    /// # Errors
    /// Returns error if a table cannot be created.
    pub fn migrate(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT,
                due_date TEXT,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create tasks table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS state (
                key TEXT PRIMARY KEY,
                value TEXT
            )",
            [],
        )
        .context("Failed to create state table")?;

        Ok(())
    }
}
