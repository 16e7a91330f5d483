//! List views: the main list, the completed list, and category filters.

use super::order::sort_by_due_date;
use super::types::{Category, Task};
use std::borrow::Cow;

/// Descriptions longer than this are cut in collapsed views.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Which tasks the main list shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// "Todas" or "all" (any case) selects everything; anything else is a
    /// category label.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("todas") || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(Category::from_label(trimmed))
        }
    }

    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => &task.category == category,
        }
    }
}

/// Main list: every task in due order, narrowed by `filter`.
#[must_use]
pub fn home_view(tasks: Vec<Task>, filter: &CategoryFilter) -> Vec<Task> {
    sort_by_due_date(tasks)
        .into_iter()
        .filter(|t| filter.matches(t))
        .collect()
}

/// Completed list: only finished tasks, in due order.
#[must_use]
pub fn completed_view(tasks: Vec<Task>) -> Vec<Task> {
    sort_by_due_date(tasks.into_iter().filter(|t| t.completed).collect())
}

/// Shortens long descriptions unless the caller asked for the full text.
#[must_use]
pub fn description_preview(description: &str, expanded: bool) -> Cow<'_, str> {
    if expanded || description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return Cow::Borrowed(description);
    }
    let cut: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    Cow::Owned(format!("{cut}..."))
}
