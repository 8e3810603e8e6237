use crate::Task;
use crate::priority::Priority;

/// Weight of the overall completion ratio.
const COMPLETION_WEIGHT: usize = 70;
/// Weight of the high-priority completion ratio.
const HIGH_PRIORITY_WEIGHT: usize = 30;

/// Productivity score in `0..=100`.
///
/// `completed / total * 70`, plus `high_completed / high_total * 30` when any
/// high-priority task exists, rounded half up. Computed in integers so ratios
/// such as 1/2 land exactly on their midpoint.
#[must_use]
pub fn productivity_score(tasks: &[Task]) -> u8 {
    let total = tasks.len();
    if total == 0 {
        return 0;
    }

    let completed = tasks.iter().filter(|task| task.completed).count();
    let (high_total, high_completed) = tasks
        .iter()
        .filter(|task| task.priority == Priority::High)
        .fold((0, 0), |(all, done), task| (all + 1, done + usize::from(task.completed)));

    // score = numerator / denominator, kept as a fraction until rounding.
    let (numerator, denominator) = if high_total == 0 {
        (COMPLETION_WEIGHT * completed, total)
    } else {
        (
            COMPLETION_WEIGHT * completed * high_total + HIGH_PRIORITY_WEIGHT * high_completed * total,
            total * high_total,
        )
    };

    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskStore;
    use crate::clock::FixedClock;
    use time::OffsetDateTime;

    fn tasks(entries: &[(Priority, bool)]) -> Vec<Task> {
        let mut store = TaskStore::with_clock(FixedClock(OffsetDateTime::UNIX_EPOCH));
        for (idx, (priority, completed)) in entries.iter().enumerate() {
            let id = store
                .add(&format!("task {idx}"), *priority)
                .unwrap_or_else(|err| panic!("add: {err}"))
                .id;
            if *completed {
                store
                    .toggle_completion(id)
                    .unwrap_or_else(|err| panic!("toggle: {err}"));
            }
        }
        store.all().to_vec()
    }

    #[test]
    fn empty_set_scores_zero() {
        assert_eq!(productivity_score(&[]), 0);
    }

    #[test]
    fn without_high_priority_only_completion_counts() {
        let set = tasks(&[
            (Priority::Low, true),
            (Priority::Medium, false),
            (Priority::Medium, false),
        ]);
        // 1/3 * 70 = 23.33
        assert_eq!(productivity_score(&set), 23);

        let set = tasks(&[(Priority::Low, true), (Priority::Medium, false)]);
        assert_eq!(productivity_score(&set), 35);
    }

    #[test]
    fn high_priority_ratio_adds_up_to_thirty() {
        let set = tasks(&[
            (Priority::High, true),
            (Priority::Medium, true),
            (Priority::High, false),
            (Priority::Low, false),
        ]);
        // base 35 + 15
        assert_eq!(productivity_score(&set), 50);
    }

    #[test]
    fn everything_done_scores_hundred() {
        let set = tasks(&[(Priority::High, true), (Priority::Low, true)]);
        assert_eq!(productivity_score(&set), 100);

        let set = tasks(&[(Priority::Medium, true)]);
        assert_eq!(productivity_score(&set), 70);
    }

    #[test]
    fn rounds_half_up() {
        // 1/4 * 70 = 17.5
        let set = tasks(&[
            (Priority::Low, true),
            (Priority::Low, false),
            (Priority::Low, false),
            (Priority::Low, false),
        ]);
        assert_eq!(productivity_score(&set), 18);
    }
}
