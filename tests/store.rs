#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::fs;
    use taskfile::db::tasks::{LoadOutcome, TaskStore, TASKS_FILE_NAME};
    use taskfile::libs::messages::Message;
    use taskfile::libs::task::{Task, TaskEntry, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
        store: TaskStore,
    }

    impl StoreTestContext {
        fn write_raw(&self, content: &str) {
            fs::write(self.store.path(), content).unwrap();
        }

        fn read_raw(&self) -> String {
            fs::read_to_string(self.store.path()).unwrap()
        }
    }

    impl AsyncTestContext for StoreTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::new(temp_dir.path().join(TASKS_FILE_NAME));
            StoreTestContext { temp_dir, store }
        }
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_save_then_load_returns_same_list(ctx: &mut StoreTestContext) {
        let mut done = Task::new("Ship release", "tag and publish").unwrap();
        done.complete();
        let tasks: Vec<TaskEntry> = vec![
            Task::new("Write spec", "draft v1").unwrap().into(),
            done.into(),
            Task::new("Write spec", "").unwrap().into(),
        ];

        ctx.store.save_all(&tasks).await.unwrap();

        assert_eq!(ctx.store.load_all().await, LoadOutcome::Loaded(tasks));
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_missing_file_is_empty(ctx: &mut StoreTestContext) {
        assert!(!ctx.store.path().exists());

        let outcome = ctx.store.load_all().await;

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(outcome.into_tasks().is_empty());
        assert!(!ctx.store.path().exists());
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_corrupted_file_is_empty_and_left_alone(ctx: &mut StoreTestContext) {
        ctx.write_raw("this is { not json");

        let outcome = ctx.store.load_all().await;

        assert!(matches!(outcome, LoadOutcome::Invalid(_)));
        assert!(outcome.into_tasks().is_empty());
        assert_eq!(ctx.read_raw(), "this is { not json");
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_empty_file_is_invalid(ctx: &mut StoreTestContext) {
        ctx.write_raw("");

        assert!(matches!(ctx.store.load_all().await, LoadOutcome::Invalid(_)));
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_json_that_is_not_an_array_is_invalid(ctx: &mut StoreTestContext) {
        ctx.write_raw(r#"{"title": "lonely object"}"#);

        let outcome = ctx.store.load_all().await;

        assert!(matches!(outcome, LoadOutcome::Invalid(_)));
        assert!(outcome.into_tasks().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_unreadable_path_is_empty(ctx: &mut StoreTestContext) {
        fs::create_dir(ctx.store.path()).unwrap();

        let outcome = ctx.store.load_all().await;

        assert!(matches!(outcome, LoadOutcome::Unreadable(_)));
        assert!(outcome.into_tasks().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_empty_array_loads_as_empty_list(ctx: &mut StoreTestContext) {
        ctx.write_raw("[]");

        assert_eq!(ctx.store.load_all().await, LoadOutcome::Loaded(vec![]));
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_saved_file_is_pretty_printed_with_two_spaces(ctx: &mut StoreTestContext) {
        let tasks = vec![Task::new("A", "d").unwrap().into()];

        ctx.store.save_all(&tasks).await.unwrap();

        let expected = "[\n  {\n    \"title\": \"A\",\n    \"description\": \"d\",\n    \"status\": \"not completed\"\n  }\n]";
        assert_eq!(ctx.read_raw(), expected);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_partial_records_get_defaults(ctx: &mut StoreTestContext) {
        ctx.write_raw(r#"[{"description": "no title here"}, {"title": "bare"}]"#);

        let tasks = ctx.store.load_all().await.into_tasks();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title(), None);
        assert_eq!(tasks[0].status(), None);
        assert_eq!(tasks[1].title().as_deref(), Some("bare"));
        assert_eq!(tasks[1].as_task().unwrap().description, "");
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_unknown_status_and_fields_survive_a_save(ctx: &mut StoreTestContext) {
        ctx.write_raw(r#"[{"title": "T", "description": "", "status": "in review", "owner": "sam"}]"#);

        let tasks = ctx.store.load_all().await.into_tasks();
        assert_eq!(
            tasks[0].as_task().unwrap().status,
            Some(TaskStatus::Other("in review".to_string()))
        );
        ctx.store.save_all(&tasks).await.unwrap();

        let written: serde_json::Value = serde_json::from_str(&ctx.read_raw()).unwrap();
        assert_eq!(
            written,
            json!([{"title": "T", "description": "", "status": "in review", "owner": "sam"}])
        );
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_save_into_missing_directory_fails(ctx: &mut StoreTestContext) {
        let store = TaskStore::new(ctx.temp_dir.path().join("nowhere").join(TASKS_FILE_NAME));

        let result = store.save_all(&[Task::new("A", "").unwrap().into()]).await;

        assert!(result.is_err());
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_odd_elements_load_and_save_unchanged(ctx: &mut StoreTestContext) {
        let raw = json!([
            {"title": "Keep me", "description": null, "status": "completed"},
            {"title": "Numbered", "description": "", "status": 1},
            "just a string",
            {"title": "Also", "description": "x", "status": "not completed"}
        ]);
        ctx.write_raw(&raw.to_string());

        let tasks = ctx.store.load_all().await.into_tasks();

        assert_eq!(tasks.len(), 4);
        assert!(matches!(tasks[0], TaskEntry::Unrecognized(_)));
        assert_eq!(tasks[0].title().as_deref(), Some("Keep me"));
        assert_eq!(tasks[0].status().as_deref(), Some("completed"));
        assert_eq!(tasks[1].status().as_deref(), Some("1"));
        assert_eq!(tasks[2].title(), None);
        assert!(tasks[3].as_task().is_some());

        ctx.store.save_all(&tasks).await.unwrap();
        let written: serde_json::Value = serde_json::from_str(&ctx.read_raw()).unwrap();
        assert_eq!(written, raw);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_diagnostics_name_the_file_only(ctx: &mut StoreTestContext) {
        assert!(ctx.store.path().is_absolute());
        assert_eq!(ctx.store.label(), TASKS_FILE_NAME);

        let missing = ctx.store.diagnostic(&LoadOutcome::Missing).unwrap();
        assert_eq!(missing, Message::StoreFileNotFound(TASKS_FILE_NAME.to_string()));
        assert_eq!(
            missing.to_string(),
            "tasks.json file not found, starting with an empty list."
        );

        let corrupted = ctx.store.diagnostic(&LoadOutcome::Invalid("eof".to_string())).unwrap();
        assert_eq!(corrupted.to_string(), "Error parsing tasks.json, file may be corrupted.");
        assert_eq!(ctx.store.diagnostic(&LoadOutcome::Loaded(vec![])), None);
    }
}
