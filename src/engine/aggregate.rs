//! Aggregator: dashboard statistics over one snapshot.
//!
//! Every reduction here is recomputed from scratch per call.

use super::classify::{days_until, is_overdue};
use super::types::{Category, Task};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Width of the forward-looking due-date histogram, in days.
pub const UPCOMING_DAYS: usize = 7;

/// Bucket labels for the upcoming histogram, index 0 being today.
pub const UPCOMING_LABELS: [&str; UPCOMING_DAYS] =
    ["Hoy", "Mañana", "2 días", "3 días", "4 días", "5 días", "6 días"];

/// Labels for completed / pending / overdue, in that order.
pub const STATUS_LABELS: [&str; 3] = ["Completadas", "Pendientes", "Vencidas"];

/// How many overdue tasks the dashboard lists.
pub const RECENT_OVERDUE_LIMIT: usize = 5;

/// Aggregate counts of tasks by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Counts completed and overdue tasks; pending is whatever remains.
#[must_use]
pub fn summarize(tasks: &[Task], now: NaiveDateTime) -> Summary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks.iter().filter(|t| is_overdue(t, now)).count();
    Summary {
        total,
        completed,
        pending: total - completed - overdue,
        overdue,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Written as its display label, "Sin categoría" included.
    #[serde(serialize_with = "serialize_label")]
    pub category: Category,
    pub count: usize,
}

fn serialize_label<S: Serializer>(category: &Category, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category.label())
}

/// Tasks per category, in order of first appearance in the snapshot.
#[must_use]
pub fn category_histogram(tasks: &[Task]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for task in tasks {
        match counts.iter_mut().find(|c| c.category == task.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: task.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Dated tasks bucketed by calendar days from today, for the next week.
///
/// Past tasks and tasks seven or more days out are left out.
#[must_use]
pub fn upcoming_histogram(tasks: &[Task], now: NaiveDateTime) -> [usize; UPCOMING_DAYS] {
    let mut buckets = [0; UPCOMING_DAYS];
    for due in tasks.iter().filter_map(|t| t.due_date) {
        if let Ok(index) = usize::try_from(days_until(due, now)) {
            if let Some(bucket) = buckets.get_mut(index) {
                *bucket += 1;
            }
        }
    }
    buckets
}

/// Overdue tasks, most recently due first, at most `limit` of them.
#[must_use]
pub fn recent_overdue(tasks: &[Task], now: NaiveDateTime, limit: usize) -> Vec<Task> {
    let mut overdue: Vec<Task> = tasks
        .iter()
        .filter(|t| is_overdue(t, now))
        .cloned()
        .collect();
    overdue.sort_by(|a, b| b.due_date.cmp(&a.due_date));
    overdue.truncate(limit);
    overdue
}

/// Everything the statistics view shows, computed from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub categories: Vec<CategoryCount>,
    pub upcoming: [usize; UPCOMING_DAYS],
    pub recent_overdue: Vec<Task>,
}

impl Dashboard {
    #[must_use]
    pub fn build(tasks: &[Task], now: NaiveDateTime) -> Self {
        Self {
            summary: summarize(tasks, now),
            categories: category_histogram(tasks),
            upcoming: upcoming_histogram(tasks, now),
            recent_overdue: recent_overdue(tasks, now, RECENT_OVERDUE_LIMIT),
        }
    }

    /// `(label, count)` pairs for completed, pending and overdue.
    #[must_use]
    pub fn status_rows(&self) -> [(&'static str, usize); 3] {
        [
            (STATUS_LABELS[0], self.summary.completed),
            (STATUS_LABELS[1], self.summary.pending),
            (STATUS_LABELS[2], self.summary.overdue),
        ]
    }

    /// `(label, count)` pairs for the upcoming histogram.
    pub fn upcoming_rows(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        UPCOMING_LABELS.iter().copied().zip(self.upcoming.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{parse_due_date, TaskId};

    fn at(raw: &str) -> NaiveDateTime {
        parse_due_date(raw).unwrap()
    }

    fn make_task(id: i64, category: Category, due: Option<&str>, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            title: format!("task {id}"),
            description: String::new(),
            category,
            due_date: due.map(at),
            completed,
        }
    }

    #[test]
    fn test_four_task_scenario() {
        let now = at("2025-04-20");
        let tasks = vec![
            make_task(1, Category::General, Some("2025-04-23"), false),
            make_task(2, Category::General, None, false),
            make_task(3, Category::Work, Some("2025-04-19"), false),
            make_task(4, Category::Work, Some("2025-04-20"), true),
        ];
        let summary = summarize(&tasks, now);
        assert_eq!(
            summary,
            Summary {
                total: 4,
                completed: 1,
                pending: 2,
                overdue: 1,
            }
        );
        assert_eq!(
            summary.completed + summary.pending + summary.overdue,
            summary.total
        );
    }

    #[test]
    fn test_completed_overdue_not_double_counted() {
        let now = at("2025-04-20T10:00");
        let tasks = vec![
            make_task(1, Category::General, Some("2025-04-01"), true),
            make_task(2, Category::General, Some("2025-04-01"), false),
        ];
        let summary = summarize(&tasks, now);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.pending, 0);
    }

    #[test]
    fn test_category_histogram_first_occurrence_order() {
        let tasks = vec![
            make_task(1, Category::Work, None, false),
            make_task(2, Category::Uncategorized, None, false),
            make_task(3, Category::Custom("Gym".to_string()), None, false),
            make_task(4, Category::Work, None, true),
            make_task(5, Category::Uncategorized, None, false),
        ];
        let histogram = category_histogram(&tasks);
        let labels: Vec<_> = histogram.iter().map(|c| c.category.label()).collect();
        assert_eq!(labels, vec!["Trabajo", "Sin categoría", "Gym"]);
        let counts: Vec<_> = histogram.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
        assert_eq!(counts.iter().sum::<usize>(), tasks.len());
    }

    #[test]
    fn test_upcoming_window_edges() {
        let now = at("2025-04-20T16:30");
        let tasks = vec![
            make_task(1, Category::General, Some("2025-04-20T08:00"), false),
            make_task(2, Category::General, Some("2025-04-21"), true),
            make_task(3, Category::General, Some("2025-04-26"), false),
            make_task(4, Category::General, Some("2025-04-27"), false),
            make_task(5, Category::General, Some("2025-04-19"), false),
            make_task(6, Category::General, None, false),
        ];
        assert_eq!(upcoming_histogram(&tasks, now), [1, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_recent_overdue_newest_first() {
        let now = at("2025-04-20T12:00");
        let mut tasks: Vec<Task> = (1..=7)
            .map(|day| {
                let due = format!("2025-04-{day:02}");
                make_task(day, Category::General, Some(&due), false)
            })
            .collect();
        tasks.push(make_task(8, Category::General, Some("2025-04-19"), true));

        let recent = recent_overdue(&tasks, now, RECENT_OVERDUE_LIMIT);
        let ids: Vec<_> = recent.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_empty_snapshot() {
        let dashboard = Dashboard::build(&[], at("2025-04-20"));
        assert_eq!(dashboard.summary, Summary::default());
        assert!(dashboard.categories.is_empty());
        assert_eq!(dashboard.upcoming, [0; UPCOMING_DAYS]);
        assert!(dashboard.recent_overdue.is_empty());
    }

    #[test]
    fn test_dashboard_json_labels_uncategorized() {
        let tasks = crate::engine::snapshot::parse_snapshot(
            r#"[{"id":1,"title":"a","category":null},{"id":2,"title":"b","category":""},{"id":3,"title":"c","category":"Trabajo"}]"#,
        )
        .unwrap();
        let json = serde_json::to_value(Dashboard::build(&tasks, at("2025-04-20"))).unwrap();
        assert_eq!(
            json["categories"],
            serde_json::json!([
                {"category": "Sin categoría", "count": 2},
                {"category": "Trabajo", "count": 1},
            ])
        );
        // tasks keep the null wire shape
        let wire = serde_json::to_value(&tasks[0]).unwrap();
        assert_eq!(wire["category"], serde_json::Value::Null);
    }

    #[test]
    fn test_dashboard_rows() {
        let now = at("2025-04-20");
        let tasks = vec![make_task(1, Category::Study, Some("2025-04-21"), false)];
        let dashboard = Dashboard::build(&tasks, now);
        assert_eq!(
            dashboard.status_rows(),
            [("Completadas", 0), ("Pendientes", 1), ("Vencidas", 0)]
        );
        let rows: Vec<_> = dashboard.upcoming_rows().collect();
        assert_eq!(rows[1], ("Mañana", 1));
        assert_eq!(rows.len(), UPCOMING_DAYS);
    }
}
