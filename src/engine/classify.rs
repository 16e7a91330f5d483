//! Due-status classifier: how urgent is a task right now?
//!
//! Two rules live here and they are deliberately not unified:
//! - `classify_due_status` compares calendar days and drives the urgency label.
//! - `is_overdue` compares instants and drives overdue counts.
//!
//! A date-only task due today is "⚠️ Vence hoy" by the first rule but already
//! overdue by the second once the clock passes midnight.

use super::types::Task;
use chrono::NaiveDateTime;
use std::fmt;

/// Urgency of a task's due date relative to the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due in more than one day.
    Future { days_remaining: i64 },
    DueTomorrow,
    DueToday,
    OverdueYesterday,
    /// Overdue by more than one day.
    Overdue { days_overdue: i64 },
    /// The task has no due date.
    NoDueDate,
}

impl DueStatus {
    /// Human-readable urgency label, `None` when the task has no due date.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Future { days_remaining } => Some(format!("Faltan {days_remaining} días")),
            Self::DueTomorrow => Some("Falta 1 día".to_string()),
            Self::DueToday => Some("⚠️ Vence hoy".to_string()),
            Self::OverdueYesterday => Some("Venció ayer".to_string()),
            Self::Overdue { days_overdue } => Some(format!("Vencida hace {days_overdue} días")),
            Self::NoDueDate => None,
        }
    }

    /// Returns the display color hint for UI rendering.
    #[must_use]
    pub fn color_hint(&self) -> &'static str {
        match self {
            Self::Future { .. } => "gray",
            Self::DueTomorrow => "yellow",
            Self::DueToday => "amber",
            Self::OverdueYesterday | Self::Overdue { .. } => "red",
            Self::NoDueDate => "none",
        }
    }

    /// True for the two past-due variants.
    #[must_use]
    pub fn is_past_due(&self) -> bool {
        matches!(self, Self::OverdueYesterday | Self::Overdue { .. })
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Future { .. } => write!(f, "FUTURE"),
            Self::DueTomorrow => write!(f, "DUE_TOMORROW"),
            Self::DueToday => write!(f, "DUE_TODAY"),
            Self::OverdueYesterday => write!(f, "OVERDUE_YESTERDAY"),
            Self::Overdue { .. } => write!(f, "OVERDUE"),
            Self::NoDueDate => write!(f, "NONE"),
        }
    }
}

/// Whole calendar days from `now` to `due` (negative when `due` is past).
///
/// Both instants are truncated to midnight first.
#[must_use]
pub fn days_until(due: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (due.date() - now.date()).num_days()
}

/// Classifies a due date against `now` at day granularity.
///
/// This is a pure function: `now` is always supplied by the caller.
#[must_use]
pub fn classify_due_status(due: Option<NaiveDateTime>, now: NaiveDateTime) -> DueStatus {
    let Some(due) = due else {
        return DueStatus::NoDueDate;
    };

    match days_until(due, now) {
        d if d > 1 => DueStatus::Future { days_remaining: d },
        1 => DueStatus::DueTomorrow,
        0 => DueStatus::DueToday,
        -1 => DueStatus::OverdueYesterday,
        d => DueStatus::Overdue { days_overdue: d.abs() },
    }
}

/// Overdue predicate used for counts: open, dated, and due strictly before `now`.
///
/// Compares full instants, not calendar days.
#[must_use]
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    !task.completed && task.due_date.is_some_and(|due| due < now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{parse_due_date, Category, TaskId};

    fn at(raw: &str) -> NaiveDateTime {
        parse_due_date(raw).unwrap()
    }

    fn make_task(due: Option<&str>, completed: bool) -> Task {
        Task {
            id: TaskId(1),
            title: "Test Task".to_string(),
            description: String::new(),
            category: Category::General,
            due_date: due.map(at),
            completed,
        }
    }

    #[test]
    fn test_no_due_date() {
        let status = classify_due_status(None, at("2025-05-10T09:00"));
        assert_eq!(status, DueStatus::NoDueDate);
        assert_eq!(status.label(), None);
    }

    #[test]
    fn test_thresholds() {
        let now = at("2025-05-10T18:45");
        let cases = [
            ("2025-05-15", DueStatus::Future { days_remaining: 5 }, "Faltan 5 días"),
            ("2025-05-12", DueStatus::Future { days_remaining: 2 }, "Faltan 2 días"),
            ("2025-05-11", DueStatus::DueTomorrow, "Falta 1 día"),
            ("2025-05-10", DueStatus::DueToday, "⚠️ Vence hoy"),
            ("2025-05-09", DueStatus::OverdueYesterday, "Venció ayer"),
            ("2025-05-07", DueStatus::Overdue { days_overdue: 3 }, "Vencida hace 3 días"),
        ];
        for (due, expected, label) in cases {
            let status = classify_due_status(Some(at(due)), now);
            assert_eq!(status, expected, "due {due}");
            assert_eq!(status.label().as_deref(), Some(label));
        }
    }

    #[test]
    fn test_time_of_day_ignored() {
        let now = at("2025-05-10T23:59");
        assert_eq!(
            classify_due_status(Some(at("2025-05-11T00:01")), now),
            DueStatus::DueTomorrow
        );
        assert_eq!(
            classify_due_status(Some(at("2025-05-10T00:00")), at("2025-05-10T23:59")),
            DueStatus::DueToday
        );
    }

    #[test]
    fn test_crosses_month_and_year() {
        let now = at("2024-12-31T10:00");
        assert_eq!(
            classify_due_status(Some(at("2025-01-01")), now),
            DueStatus::DueTomorrow
        );
        assert_eq!(
            classify_due_status(Some(at("2024-02-28")), at("2024-03-01")),
            DueStatus::Overdue { days_overdue: 2 }
        );
    }

    #[test]
    fn test_overdue_predicate() {
        let now = at("2025-05-10T12:00");
        assert!(is_overdue(&make_task(Some("2025-05-09"), false), now));
        assert!(!is_overdue(&make_task(Some("2025-05-09"), true), now));
        assert!(!is_overdue(&make_task(None, false), now));
        assert!(!is_overdue(&make_task(Some("2025-05-10T12:00"), false), now));
        assert!(!is_overdue(&make_task(Some("2025-05-11"), false), now));
    }

    #[test]
    fn test_label_and_predicate_disagree_on_today() {
        let task = make_task(Some("2025-05-10"), false);
        let now = at("2025-05-10T08:00");
        assert_eq!(task.due_status(now), DueStatus::DueToday);
        assert!(task.is_overdue(now));
    }

    #[test]
    fn test_color_hints() {
        assert_eq!(DueStatus::Future { days_remaining: 4 }.color_hint(), "gray");
        assert_eq!(DueStatus::DueToday.color_hint(), "amber");
        assert_eq!(DueStatus::Overdue { days_overdue: 9 }.color_hint(), "red");
        assert!(DueStatus::OverdueYesterday.is_past_due());
        assert!(!DueStatus::DueTomorrow.is_past_due());
    }
}
