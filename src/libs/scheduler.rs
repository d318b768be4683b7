//! Task-plan scheduling with pause-day conflict lookback.
//!
//! Walks the plan's date range one day at a time and inserts the task on
//! every day whose preceding pause window is free of same-muscle-group
//! tasks. The pause window is group-scoped, not plan-scoped: any task
//! sharing the muscle group occupies the cooldown slot, including tasks
//! placed by earlier plans.

use crate::libs::plan::PlanRequest;
use crate::libs::task::{day_key, Task, TaskStore};
use chrono::Duration;

/// Schedules a validated plan into the store, returning the number of
/// placements made.
///
/// Stepping rule: after a successful placement the cursor jumps past the
/// entire pause window (`pause_days + 1`), so a plan's own placements are
/// spaced at least that far apart. After a conflict the cursor advances a
/// single day, so days freed mid-window are still considered. Both
/// branches move the cursor forward, which guarantees termination.
///
/// Every visited day gets a store entry, even when placement is skipped;
/// existing tasks are never removed or reordered.
pub fn schedule(store: &mut TaskStore, plan: &PlanRequest) -> usize {
    let mut placed = 0;
    let mut current = plan.start_date;
    while current <= plan.end_date {
        let key = day_key(current);
        let lookback: Vec<String> = (1..=plan.pause_days as i64)
            .map(|i| day_key(current - Duration::days(i)))
            .collect();
        let conflict = lookback
            .iter()
            .filter_map(|day| store.get(day))
            .flatten()
            .any(|task| task.muscle_group == plan.muscle_group);
        let tasks = store.entry(key).or_default();
        if !conflict {
            tasks.push(Task::new(&plan.name, plan.muscle_group));
            placed += 1;
            current += Duration::days(plan.pause_days as i64 + 1);
        } else {
            current += Duration::days(1);
        }
    }
    placed
}
