use chrono::{Duration, TimeZone, Utc};
use multitool_core::db::open_db;
use multitool_core::model::note::{Note, NoteDraft};
use multitool_core::model::quiz::{Question, Quiz, QuizDraft};
use multitool_core::model::todo::{Todo, TodoDraft};
use multitool_core::{
    Clock, KeyValueStore, ManualClock, MemoryStore, RecordList, RepoError, SqliteStore, ValidationError,
};

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
}

#[test]
fn create_then_load_returns_equal_record() {
    let store = MemoryStore::new();
    let clock = clock();
    let todos = RecordList::<Todo, _, _>::with_clock(&store, &clock);

    let created = todos.create(TodoDraft::new("buy milk")).unwrap();
    let loaded = todos.load().unwrap();

    assert_eq!(loaded, vec![created.clone()]);
    assert_eq!(created.id, clock.now().timestamp_millis().to_string());
    assert!(!created.completed);
}

#[test]
fn persisted_shape_uses_camel_case_and_iso_dates() {
    let store = MemoryStore::new();
    let clock = clock();
    let todos = RecordList::<Todo, _, _>::with_clock(&store, &clock);
    todos.create(TodoDraft::new("write report")).unwrap();

    let raw = store.get("todos").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["text"], "write report");
    assert_eq!(first["completed"], false);
    assert!(first["createdAt"]
        .as_str()
        .unwrap()
        .starts_with("2024-03-01T09:30:00"));
}

#[test]
fn ids_stay_unique_within_one_millisecond() {
    let store = MemoryStore::new();
    let clock = clock();
    let todos = RecordList::<Todo, _, _>::with_clock(&store, &clock);

    let first = todos.create(TodoDraft::new("a")).unwrap();
    let second = todos.create(TodoDraft::new("b")).unwrap();

    let first_id: i64 = first.id.parse().unwrap();
    let second_id: i64 = second.id.parse().unwrap();
    assert_eq!(second_id, first_id + 1);
}

#[test]
fn create_fails_cleanly_when_ids_are_exhausted() {
    let store = MemoryStore::new();
    let raw = format!(
        r#"[{{"id":"{}","text":"last","completed":false,"createdAt":"2024-03-01T09:30:00Z"}}]"#,
        i64::MAX
    );
    store.set("todos", &raw).unwrap();
    let todos = RecordList::<Todo, _, _>::with_clock(&store, clock());

    let err = todos.create(TodoDraft::new("one more")).unwrap_err();

    assert!(matches!(err, RepoError::InvalidData(_)));
    assert_eq!(store.get("todos").unwrap().unwrap(), raw);
}

#[test]
fn removed_id_never_comes_back() {
    let store = MemoryStore::new();
    let clock = clock();
    let todos = RecordList::<Todo, _, _>::with_clock(&store, &clock);
    let keep = todos.create(TodoDraft::new("keep")).unwrap();
    clock.advance(Duration::milliseconds(5));
    let drop_me = todos.create(TodoDraft::new("drop")).unwrap();

    todos.remove(&drop_me.id).unwrap();

    let ids: Vec<String> = todos.load().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![keep.id]);
    assert!(matches!(
        todos.remove(&drop_me.id),
        Err(RepoError::NotFound(id)) if id == drop_me.id
    ));
}

#[test]
fn toggle_flips_completion_and_persists() {
    let store = MemoryStore::new();
    let todos = RecordList::<Todo, _>::new(&store);
    let todo = todos.create(TodoDraft::new("stretch")).unwrap();

    assert!(todos.toggle(&todo.id).unwrap().completed);
    assert!(todos.get(&todo.id).unwrap().unwrap().completed);
    assert!(!todos.toggle(&todo.id).unwrap().completed);
}

#[test]
fn blank_text_is_rejected_without_writing() {
    let store = MemoryStore::new();
    let todos = RecordList::<Todo, _>::new(&store);

    let err = todos.create(TodoDraft::new("   ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(ValidationError::Blank(_))));
    assert!(store.get("todos").unwrap().is_none());
}

#[test]
fn malformed_json_recovers_to_empty_list() {
    let store = MemoryStore::new();
    store.set("todos", "{not json").unwrap();
    let todos = RecordList::<Todo, _>::new(&store);

    assert!(todos.load().unwrap().is_empty());
    assert!(matches!(
        todos.load_strict(),
        Err(RepoError::InvalidData(_))
    ));

    todos.create(TodoDraft::new("fresh start")).unwrap();
    assert_eq!(todos.load_strict().unwrap().len(), 1);
}

#[test]
fn notes_are_inserted_newest_first_and_update_bumps_timestamp() {
    let store = MemoryStore::new();
    let clock = clock();
    let notes = RecordList::<Note, _, _>::with_clock(&store, &clock);

    let older = notes.create(NoteDraft::new("First", "body")).unwrap();
    clock.advance(Duration::seconds(1));
    let newer = notes.create(NoteDraft::new("Second", "")).unwrap();

    let titles: Vec<String> = notes.load().unwrap().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Second", "First"]);

    clock.advance(Duration::minutes(3));
    let edited = notes
        .update(&older.id, NoteDraft::new("  First, edited ", "new body"))
        .unwrap();
    assert_eq!(edited.title, "First, edited");
    assert_eq!(edited.created_at, older.created_at);
    assert_eq!(edited.updated_at - older.updated_at, Duration::seconds(181));
    assert_ne!(edited.id, newer.id);
}

#[test]
fn quiz_with_out_of_range_answer_is_rejected() {
    let store = MemoryStore::new();
    let quizzes = RecordList::<Quiz, _>::new(&store);
    let mut question = Question::new("1".into(), "2+2?", &["3", "4", "5", "6"], 1).unwrap();
    question.correct_answer = 7;

    let err = quizzes
        .create(QuizDraft {
            title: "Math".into(),
            description: String::new(),
            questions: vec![question],
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::CorrectAnswerOutOfRange { index: 7, .. })
    ));
}

#[test]
fn quiz_without_questions_is_rejected() {
    let store = MemoryStore::new();
    let quizzes = RecordList::<Quiz, _>::new(&store);

    let err = quizzes
        .create(QuizDraft {
            title: "Empty".into(),
            description: String::new(),
            questions: Vec::new(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::NoQuestions)
    ));
}

#[test]
fn invalid_persisted_record_is_reported_by_strict_load() {
    let store = MemoryStore::new();
    store
        .set(
            "quizzes",
            r#"[{"id":"1","title":"Bad","description":"","createdAt":"2024-01-01T00:00:00Z",
                "questions":[{"id":"q","question":"?","options":["a","b","c","d"],"correctAnswer":9}]}]"#,
        )
        .unwrap();
    let quizzes = RecordList::<Quiz, _>::new(&store);

    assert!(matches!(
        quizzes.load_strict(),
        Err(RepoError::InvalidData(_))
    ));
    assert!(quizzes.load().unwrap().is_empty());
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multitool.db");

    let created = {
        let conn = open_db(&path).unwrap();
        let store = SqliteStore::new(&conn);
        let todos = RecordList::<Todo, _>::new(&store);
        todos.create(TodoDraft::new("persist me")).unwrap()
    };

    let conn = open_db(&path).unwrap();
    let store = SqliteStore::new(&conn);
    let todos = RecordList::<Todo, _>::new(&store);
    assert_eq!(todos.load().unwrap(), vec![created]);

    todos.clear().unwrap();
    assert!(todos.load().unwrap().is_empty());
}

#[test]
fn lists_share_one_store_under_separate_keys() {
    let store = MemoryStore::new();
    let todos = RecordList::<Todo, _>::new(&store);
    let notes = RecordList::<Note, _>::new(&store);

    todos.create(TodoDraft::new("one")).unwrap();
    notes.create(NoteDraft::new("Title", "text")).unwrap();

    assert_eq!(todos.storage_key(), "todos");
    assert_eq!(notes.storage_key(), "notes");
    assert_eq!(todos.load().unwrap().len(), 1);
    assert_eq!(notes.load().unwrap().len(), 1);
    assert_eq!(store.len(), 2);
}
