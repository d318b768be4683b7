#[cfg(test)]
mod tests {
    use replan::libs::task::{MuscleGroup, Task, TaskStore};
    use replan::storage::tasks::Tasks;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context redirecting the platform data directory into a
    /// temporary location.
    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { temp_dir }
        }
    }

    fn sample_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.insert(
            "2024-01-01".to_string(),
            vec![
                Task::new("Squats", MuscleGroup::StrengthStability),
                Task {
                    name: "Sprints".to_string(),
                    completed: true,
                    muscle_group: MuscleGroup::HighImpact,
                },
            ],
        );
        store.insert("2024-01-02".to_string(), Vec::new());
        store
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_missing_file_loads_empty_store(ctx: &mut StorageTestContext) {
        let tasks = Tasks::with_path(ctx.temp_dir.path().join("absent.json"));
        let store = tasks.load().unwrap();
        assert!(store.is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_load_preserves_tasks(ctx: &mut StorageTestContext) {
        let tasks = Tasks::with_path(ctx.temp_dir.path().join("exercise.json"));
        let store = sample_store();

        tasks.save(&store).unwrap();
        let loaded = tasks.load().unwrap();

        assert_eq!(loaded, store);
        // Order and completion flags survive the round trip.
        let day = &loaded["2024-01-01"];
        assert_eq!(day[0].name, "Squats");
        assert!(!day[0].completed);
        assert!(day[1].completed);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("nested").join("dir").join("exercise.json");
        let tasks = Tasks::with_path(path.clone());

        tasks.save(&sample_store()).unwrap();

        assert!(path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("exercise.json");
        fs::write(&path, "not json at all").unwrap();

        let result = Tasks::with_path(path).load();

        assert!(result.is_err());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_default_path_resolves_inside_data_directory(_ctx: &mut StorageTestContext) {
        // With no config file, the store lands in the platform data
        // directory (redirected into the temp dir here).
        let tasks = Tasks::new().unwrap();
        let store = tasks.load().unwrap();
        assert!(store.is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_muscle_group_serialization_names(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("exercise.json");
        let tasks = Tasks::with_path(path.clone());
        let mut store = TaskStore::new();
        store.insert(
            "2024-01-01".to_string(),
            vec![
                Task::new("A", MuscleGroup::HighImpact),
                Task::new("B", MuscleGroup::StrengthStability),
            ],
        );

        tasks.save(&store).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("\"high-impact\""));
        assert!(content.contains("\"strength/stability\""));
    }
}
