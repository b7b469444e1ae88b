#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tdl::db::tasks::Tasks;
    use tdl::libs::task::TaskError;
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
    #[serial]
    fn test_create_appends_active_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = tasks.create("Buy milk").unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);

        let list = tasks.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], task);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_create_trims_text(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = tasks.create("  Buy milk  ").unwrap();
        assert_eq!(task.text, "Buy milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_create_rejects_blank_text(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        for input in ["", "   ", "\t\n"] {
            let err = tasks.create(input).unwrap_err();
            assert!(matches!(err, TaskError::EmptyText));
        }

        // Nothing was created
        assert!(tasks.list().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_ids_are_unique_and_monotonic(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.create("a").unwrap();
        let second = tasks.create("b").unwrap();
        tasks.delete(first.id).unwrap();
        let third = tasks.create("c").unwrap();

        assert!(second.id > first.id);
        assert!(third.id > second.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_toggle_twice_restores_state(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create("Water plants").unwrap();

        let toggled = tasks.toggle(task.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.text, task.text);

        let restored = tasks.toggle(task.id).unwrap();
        assert!(!restored.completed);
        assert_eq!(restored, task);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_toggle_unknown_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.toggle(42).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(42)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_edit_replaces_text_only(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create("Buy milk").unwrap();
        tasks.toggle(task.id).unwrap();

        tasks.edit(task.id, Some("Buy oat milk")).unwrap();

        let updated = tasks.get_by_id(task.id).unwrap();
        assert_eq!(updated.text, "Buy oat milk");
        assert!(updated.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_edit_cancelled_is_noop(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create("Buy milk").unwrap();

        tasks.edit(task.id, None).unwrap();

        assert_eq!(tasks.get_by_id(task.id).unwrap().text, "Buy milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_edit_rejects_blank_text(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create("Buy milk").unwrap();

        let err = tasks.edit(task.id, Some("   ")).unwrap_err();
        assert!(matches!(err, TaskError::EmptyText));
        assert_eq!(tasks.get_by_id(task.id).unwrap().text, "Buy milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_delete_removes_without_reordering(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create("a").unwrap();
        let b = tasks.create("b").unwrap();
        let c = tasks.create("c").unwrap();

        tasks.delete(b.id).unwrap();

        let texts: Vec<&str> = tasks.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(tasks.list()[0].id, a.id);
        assert_eq!(tasks.list()[1].id, c.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_deleted_id_is_gone(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create("Ephemeral").unwrap();
        tasks.delete(task.id).unwrap();

        assert!(matches!(tasks.toggle(task.id), Err(TaskError::NotFound(_))));
        assert!(matches!(tasks.edit(task.id, Some("x")), Err(TaskError::NotFound(_))));
        assert!(matches!(tasks.delete(task.id), Err(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_full_task_lifecycle(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = tasks.create("Buy milk").unwrap();
        assert_eq!(tasks.list().len(), 1);
        assert_eq!(tasks.list()[0].text, "Buy milk");
        assert!(!tasks.list()[0].completed);

        let toggled = tasks.toggle(task.id).unwrap();
        assert!(toggled.completed);

        tasks.edit(task.id, Some("Buy oat milk")).unwrap();
        let edited = tasks.get_by_id(task.id).unwrap();
        assert_eq!(edited.text, "Buy oat milk");
        assert!(edited.completed);

        tasks.delete(task.id).unwrap();
        assert!(tasks.list().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_toggle_preserves_position(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create("first").unwrap();
        let middle = tasks.create("second").unwrap();
        tasks.create("third").unwrap();

        tasks.toggle(middle.id).unwrap();

        let texts: Vec<&str> = tasks.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
