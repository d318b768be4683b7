#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use replan::libs::task::{MuscleGroup, Task, TaskStore, ToggleTask};

    fn store_with_task() -> TaskStore {
        let mut store = TaskStore::new();
        store.insert(
            "2024-06-12".to_string(),
            vec![Task::new("Squats", MuscleGroup::StrengthStability)],
        );
        store
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_toggle_sets_completion() {
        let mut store = store_with_task();
        let today = date(2024, 6, 12);

        let applied = ToggleTask::new("2024-06-12", 0, true).apply(&mut store, today).unwrap();

        assert!(applied);
        assert!(store["2024-06-12"][0].completed);
    }

    #[test]
    fn test_toggle_twice_restores_original_value() {
        let mut store = store_with_task();
        let today = date(2024, 6, 12);

        ToggleTask::new("2024-06-12", 0, true).apply(&mut store, today).unwrap();
        ToggleTask::new("2024-06-12", 0, false).apply(&mut store, today).unwrap();

        assert!(!store["2024-06-12"][0].completed);
    }

    #[test]
    fn test_past_days_are_read_only() {
        let mut store = store_with_task();
        let today = date(2024, 6, 13);

        let applied = ToggleTask::new("2024-06-12", 0, true).apply(&mut store, today).unwrap();

        assert!(!applied);
        assert!(!store["2024-06-12"][0].completed);
    }

    #[test]
    fn test_today_is_writable() {
        let mut store = store_with_task();
        let today = date(2024, 6, 12);

        let applied = ToggleTask::new("2024-06-12", 0, true).apply(&mut store, today).unwrap();

        assert!(applied);
    }

    #[test]
    fn test_missing_day_is_an_error() {
        let mut store = store_with_task();
        let result = ToggleTask::new("2024-06-14", 0, true).apply(&mut store, date(2024, 6, 12));
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut store = store_with_task();
        let result = ToggleTask::new("2024-06-12", 5, true).apply(&mut store, date(2024, 6, 12));
        assert!(result.is_err());
    }

    #[test]
    fn test_unparseable_day_key_is_an_error() {
        let mut store = store_with_task();
        let result = ToggleTask::new("someday", 0, true).apply(&mut store, date(2024, 6, 12));
        assert!(result.is_err());
    }
}
