//! Evaluation Context: the instant every classification is measured against.

use chrono::{Local, NaiveDateTime};

/// Captures "now" once per command.
///
/// Engine functions never read the wall clock themselves; they take the
/// instant from here so a whole command sees one consistent `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: NaiveDateTime,
}

impl Clock {
    /// Reads the local wall clock.
    #[must_use]
    pub fn system() -> Self {
        Self {
            now: Local::now().naive_local(),
        }
    }

    /// Pins the clock to a given instant (tests, `--now`).
    #[must_use]
    pub fn fixed(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Uses `now` when given, the wall clock otherwise.
    #[must_use]
    pub fn from_override(now: Option<NaiveDateTime>) -> Self {
        now.map_or_else(Self::system, Self::fixed)
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }
}
