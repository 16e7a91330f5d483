//! Session Repository: the single signed-in user, kept in the `state` table.

use crate::engine::error::TaskError;
use crate::engine::types::Session;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

const USER_KEY: &str = "session_user";
const STARTED_KEY: &str = "session_started";

pub struct SessionRepo<'a> {
    conn: &'a Connection,
}

impl<'a> SessionRepo<'a> {
    #[must_use]
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Starts a session for `username` at `now`, replacing any current one.
    ///
    /// Writes two state rows; callers run it inside a transaction.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a blank username, or a write error.
    pub fn login(&self, username: &str, now: NaiveDateTime) -> Result<Session> {
        if username.trim().is_empty() {
            return Err(TaskError::InvalidInput("username cannot be empty".to_string()).into());
        }
        let session = Session::new(username, now);
        self.set(USER_KEY, &session.username)?;
        self.set(STARTED_KEY, &session.started_at)?;
        tracing::info!(user = %session.username, "session started");
        Ok(session)
    }

    /// Ends the current session. Returns the session that was cleared, if any.
    ///
    /// # Errors
    /// Returns an error if the state table cannot be updated.
    pub fn logout(&self) -> Result<Option<Session>> {
        let previous = self.current()?;
        self.conn.execute(
            "DELETE FROM state WHERE key IN (?1, ?2)",
            params![USER_KEY, STARTED_KEY],
        )?;
        if let Some(session) = &previous {
            tracing::info!(user = %session.username, "session ended");
        }
        Ok(previous)
    }

    /// Loads the active session.
    ///
    /// # Errors
    /// Returns an error if the state query fails.
    pub fn current(&self) -> Result<Option<Session>> {
        let Some(username) = self.get(USER_KEY)? else {
            return Ok(None);
        };
        let started_at = self.get(STARTED_KEY)?.unwrap_or_default();
        Ok(Some(Session {
            username,
            started_at,
        }))
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM state WHERE key = ?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::db::Db;
    use crate::engine::types::parse_due_date;

    fn memory_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        Db::migrate(&conn).unwrap();
        conn
    }

    fn at(raw: &str) -> NaiveDateTime {
        parse_due_date(raw).unwrap()
    }

    fn login_in_tx(conn: &mut Connection, username: &str, now: NaiveDateTime) -> Result<Session> {
        let tx = conn.transaction()?;
        let session = SessionRepo::new(&tx).login(username, now)?;
        tx.commit()?;
        Ok(session)
    }

    #[test]
    fn test_lifecycle() {
        let mut conn = memory_conn();
        assert_eq!(SessionRepo::new(&conn).current().unwrap(), None);

        let session = login_in_tx(&mut conn, " ana ", at("2025-04-20T09:30")).unwrap();
        assert_eq!(session.username, "ana");
        assert_eq!(session.started_at, "2025-04-20T09:30:00");
        assert_eq!(SessionRepo::new(&conn).current().unwrap(), Some(session.clone()));
        assert_eq!(Session::display_name(Some(&session)), "ana");

        login_in_tx(&mut conn, "luis", at("2025-04-21")).unwrap();
        let repo = SessionRepo::new(&conn);
        let current = repo.current().unwrap().unwrap();
        assert_eq!(current.username, "luis");
        assert_eq!(current.started_at, "2025-04-21T00:00:00");

        let cleared = repo.logout().unwrap();
        assert_eq!(cleared.map(|s| s.username), Some("luis".to_string()));
        assert_eq!(repo.current().unwrap(), None);
        assert_eq!(Session::display_name(None), "Usuario");
    }

    #[test]
    fn test_blank_username_rejected() {
        let mut conn = memory_conn();
        assert!(login_in_tx(&mut conn, "   ", at("2025-04-20")).is_err());
        assert_eq!(SessionRepo::new(&conn).current().unwrap(), None);
    }

    #[test]
    fn test_rolled_back_login_leaves_no_rows() {
        let mut conn = memory_conn();
        {
            let tx = conn.transaction().unwrap();
            SessionRepo::new(&tx).login("ana", at("2025-04-20")).unwrap();
            // dropped without commit
        }
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM state", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 0);
        assert_eq!(SessionRepo::new(&conn).current().unwrap(), None);
    }
}
