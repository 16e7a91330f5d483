//! Core types for the taskboard engine.
//!
//! Note: `DueStatus` (the computed urgency) lives in `classify.rs`.
//! A `Task` here carries only the stored fields.

use super::classify::{self, DueStatus};
use super::error::TaskError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque task identifier, stable for the task's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task category: the known set offered by the UI plus a free-form fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    General,
    Work,
    Study,
    Personal,
    Other,
    /// Absent or empty category.
    #[default]
    Uncategorized,
    Custom(String),
}

/// Variant → display label. `Custom` and `Uncategorized` are handled apart.
const KNOWN_CATEGORIES: &[(Category, &str)] = &[
    (Category::General, "General"),
    (Category::Work, "Trabajo"),
    (Category::Study, "Estudio"),
    (Category::Personal, "Personal"),
    (Category::Other, "Otros"),
];

pub const UNCATEGORIZED_LABEL: &str = "Sin categoría";

impl Category {
    /// Maps a raw label to a category. Matching on known labels ignores case.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNCATEGORIZED_LABEL) {
            return Self::Uncategorized;
        }
        KNOWN_CATEGORIES
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(trimmed))
            .map_or_else(|| Self::Custom(trimmed.to_string()), |(cat, _)| cat.clone())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Uncategorized => UNCATEGORIZED_LABEL,
            Self::Custom(label) => label.as_str(),
            known => KNOWN_CATEGORIES
                .iter()
                .find(|(cat, _)| cat == known)
                .map_or(UNCATEGORIZED_LABEL, |(_, label)| *label),
        }
    }

    /// The categories offered when creating a task, in menu order.
    pub fn known() -> impl Iterator<Item = &'static Category> {
        KNOWN_CATEGORIES.iter().map(|(cat, _)| cat)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// On the wire a category is a string label, `null` when absent.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uncategorized => serializer.serialize_none(),
            other => serializer.serialize_str(other.label()),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_label(raw.as_deref().unwrap_or_default()))
    }
}

/// A to-do item as returned by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, with = "due_date_format")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Urgency label category for this task at `now` (day granularity).
    #[must_use]
    pub fn due_status(&self, now: NaiveDateTime) -> DueStatus {
        classify::classify_due_status(self.due_date, now)
    }

    /// Instant-precision overdue predicate; see `classify::is_overdue`.
    #[must_use]
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        classify::is_overdue(self, now)
    }
}

/// Fields for a task that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub due_date: Option<NaiveDateTime>,
}

impl NewTask {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            category: Category::General,
            due_date: None,
        }
    }

    /// Checks required fields before the task reaches the store.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the title is blank.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::InvalidInput("title cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Partial update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    /// `Some(None)` clears the due date.
    pub due_date: Option<Option<NaiveDateTime>>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
    }

    /// Applies the update to `task` in place.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the new title is blank.
    pub fn apply(&self, task: &mut Task) -> Result<(), TaskError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(TaskError::InvalidInput("title cannot be empty".to_string()));
            }
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        Ok(())
    }
}

/// The signed-in user.
///
/// Passed explicitly to whatever needs identity. Login replaces it, logout
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    pub started_at: String,
}

impl Session {
    #[must_use]
    pub fn new(username: &str, started_at: NaiveDateTime) -> Self {
        Self {
            username: username.trim().to_string(),
            started_at: format_due_date(started_at),
        }
    }

    /// Name to greet: the session's user, or a generic fallback.
    #[must_use]
    pub fn display_name(session: Option<&Self>) -> &str {
        session.map_or("Usuario", |s| s.username.as_str())
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 due date. A bare date means midnight.
///
/// # Errors
/// Returns `InvalidDate` if no accepted format matches.
pub fn parse_due_date(raw: &str) -> Result<NaiveDateTime, TaskError> {
    let s = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .map_err(|_| TaskError::InvalidDate(raw.to_string()))
}

/// Storage/wire form, matching the backend's `isoformat()` output.
#[must_use]
pub fn format_due_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Day/month/year form used in list output.
#[must_use]
pub fn display_due_date(dt: NaiveDateTime) -> String {
    dt.format("%-d/%-m/%Y").to_string()
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

mod due_date_format {
    use super::{format_due_date, parse_due_date};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&format_due_date(*dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => {
                parse_due_date(&raw).map(Some).map_err(de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}
