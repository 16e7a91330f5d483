//! Task ordering: dated tasks first by ascending due instant, undated last.

use super::types::Task;
use std::cmp::Ordering;

/// Total order on due dates. Undated tasks compare equal to each other and
/// greater than any dated task.
#[must_use]
pub fn compare_due(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts a snapshot by due date. Stable, so ties keep input order and
/// sorting an already sorted snapshot is a no-op.
#[must_use]
pub fn sort_by_due_date(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(compare_due);
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{parse_due_date, Category, TaskId};

    fn make_task(id: i64, due: Option<&str>) -> Task {
        Task {
            id: TaskId(id),
            title: format!("task {id}"),
            description: String::new(),
            category: Category::General,
            due_date: due.map(|d| parse_due_date(d).unwrap()),
            completed: false,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id.0).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, None),
            make_task(2, Some("2025-06-03")),
            make_task(3, None),
            make_task(4, Some("2025-06-01T15:00")),
            make_task(5, Some("2025-06-01T09:00")),
            make_task(6, Some("2025-06-03")),
        ]
    }

    #[test]
    fn test_orders_dated_then_undated() {
        let sorted = sort_by_due_date(sample());
        assert_eq!(ids(&sorted), vec![5, 4, 2, 6, 1, 3]);
    }

    #[test]
    fn test_idempotent() {
        let once = sort_by_due_date(sample());
        let twice = sort_by_due_date(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_undated_last_for_every_rotation() {
        let base = sample();
        for shift in 0..base.len() {
            let mut rotated = base.clone();
            rotated.rotate_left(shift);
            let sorted = sort_by_due_date(rotated);
            let first_undated = sorted
                .iter()
                .position(|t| t.due_date.is_none())
                .unwrap_or(sorted.len());
            assert!(sorted[first_undated..].iter().all(|t| t.due_date.is_none()));
            assert!(sorted[..first_undated].windows(2).all(|w| w[0].due_date <= w[1].due_date));
        }
    }

    #[test]
    fn test_empty() {
        assert!(sort_by_due_date(Vec::new()).is_empty());
    }
}
