#[cfg(test)]
mod tests {
    use pomodo::db::tasks::Tasks;
    use pomodo::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_create_and_fetch(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Read chapter 4")).unwrap();
        let created = tasks.fetch(TaskFilter::Today).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Read chapter 4");
        assert!(!created[0].is_completed);
        assert_eq!(created[0].completion_time, 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_rename(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Old name")).unwrap();
        let id = tasks.fetch(TaskFilter::All).unwrap()[0].id.unwrap();

        let updated = tasks.rename(id, "New name").unwrap();
        assert_eq!(updated, 1);

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.name, "New name");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_completion_write_through(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Write summary")).unwrap();
        let id = tasks.fetch(TaskFilter::All).unwrap()[0].id.unwrap();

        // Completing persists flag and attributed time together.
        tasks.set_completion(id, true, 10_000).unwrap();
        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert!(task.is_completed);
        assert_eq!(task.completion_time, 10_000);

        // Reopening keeps the accumulated time.
        tasks.set_completion(id, false, task.completion_time).unwrap();
        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert!(!task.is_completed);
        assert_eq!(task.completion_time, 10_000);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Temporary")).unwrap();
        let id = tasks.fetch(TaskFilter::All).unwrap()[0].id.unwrap();

        let deleted = tasks.delete(id).unwrap();
        assert_eq!(deleted, 1);
        assert!(tasks.get_by_id(id).unwrap().is_none());
    }
}
