use chrono::{Duration, NaiveDate, TimeZone, Utc};
use multitool_core::model::task::{PlannedTaskDraft, Priority};
use multitool_core::service::flashcard_service::{CardSide, FlashcardService, StudySession};
use multitool_core::service::note_service::NoteService;
use multitool_core::service::planner_service::{sort_by_priority, PlannerService};
use multitool_core::service::quiz_service::{QuizGrade, QuizService, QuizSession};
use multitool_core::service::todo_service::{TodoFilter, TodoService};
use multitool_core::{ManualClock, MemoryStore, RepoError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn todo_filters_and_counts() {
    let store = MemoryStore::new();
    let todos = TodoService::new(&store);
    let a = todos.add("read").unwrap();
    todos.add("write").unwrap();
    todos.add("review").unwrap();
    todos.toggle(&a.id).unwrap();

    let active: Vec<String> = todos
        .list(TodoFilter::Active)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(active, vec!["write", "review"]);
    assert_eq!(todos.list(TodoFilter::Completed).unwrap().len(), 1);

    let counts = todos.counts().unwrap();
    assert_eq!((counts.total, counts.active, counts.completed), (3, 2, 1));

    assert_eq!(todos.clear_completed().unwrap(), 1);
    assert_eq!(todos.list(TodoFilter::All).unwrap().len(), 2);
}

#[test]
fn notes_list_newest_first() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
    let notes = NoteService::with_clock(&store, &clock);
    let first = notes.create("Groceries", "eggs").unwrap();
    clock.advance(Duration::seconds(10));
    notes.create("Ideas", "").unwrap();

    let listed = notes.list().unwrap();
    assert_eq!(listed[0].title, "Ideas");
    assert_eq!(listed[1].id, first.id);

    notes.remove(&first.id).unwrap();
    assert!(notes.get(&first.id).unwrap().is_none());
}

#[test]
fn study_session_wraps_and_survives_deletion() {
    let store = MemoryStore::new();
    let deck = FlashcardService::new(&store);
    deck.add("hola", "hello").unwrap();
    deck.add("adios", "goodbye").unwrap();
    let last = deck.add("gracias", "thanks").unwrap();

    let cards = deck.cards().unwrap();
    let mut session = StudySession::start(cards.len()).unwrap();
    session.prev();
    assert_eq!(session.position(), (3, 3));
    session.flip();
    assert_eq!(session.side(), CardSide::Back);
    assert_eq!(session.visible_text(&cards), Some("thanks"));
    session.next();
    assert_eq!(session.index(), 0);
    assert_eq!(session.side(), CardSide::Front);

    session.prev();
    deck.remove(&last.id).unwrap();
    let session = session.card_removed().unwrap();
    assert_eq!(session.position(), (2, 2));
    let cards = deck.cards().unwrap();
    assert_eq!(session.visible_text(&cards), Some("adios"));
}

#[test]
fn quiz_authoring_and_taking() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    let quizzes = QuizService::with_clock(&store, &clock);

    let mut builder = quizzes.builder("Capitals", "Europe");
    builder
        .add_question("France?", ["Paris", "Lyon", "Nice", "Lille"], 0)
        .unwrap();
    builder
        .add_question("Italy?", ["Milan", "Rome", "Turin", "Pisa"], 1)
        .unwrap();
    builder
        .add_question("Spain?", ["Madrid", "Seville", "Bilbao", "Cadiz"], 0)
        .unwrap();
    assert!(builder
        .add_question("Blank?", ["a", "", "c", "d"], 0)
        .is_err());
    assert_eq!(builder.questions().len(), 3);

    let quiz = quizzes.create(builder).unwrap();
    assert_eq!(quizzes.list().unwrap().len(), 1);

    let mut session = QuizSession::start(quizzes.get(&quiz.id).unwrap().unwrap());
    assert_eq!(session.answer(0).unwrap(), None);
    assert_eq!(session.answer(1).unwrap(), None);
    let result = session.answer(3).unwrap().unwrap();
    assert_eq!((result.score, result.total, result.percentage), (2, 3, 67));
    assert_eq!(result.grade, QuizGrade::Good);
    assert!(session.is_completed());
    assert!(session.answer(0).is_err());

    session.restart();
    assert_eq!(session.current_index(), 0);
    assert!(session.result().is_none());
}

#[test]
fn planner_groups_by_day_and_orders_by_priority() {
    let store = MemoryStore::new();
    let planner = PlannerService::new(&store);
    let day = date(2024, 7, 4);
    planner
        .add(PlannedTaskDraft::new("low", day).with_priority(Priority::Low))
        .unwrap();
    let high = planner
        .add(PlannedTaskDraft::new("high", day).with_priority(Priority::High))
        .unwrap();
    planner.add(PlannedTaskDraft::new("medium", day)).unwrap();
    planner
        .add(PlannedTaskDraft::new("elsewhere", date(2024, 7, 1)))
        .unwrap();

    planner.toggle(&high.id).unwrap();

    let mut tasks = planner.tasks_on(day).unwrap();
    assert_eq!(tasks.len(), 3);
    sort_by_priority(&mut tasks);
    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["medium", "low", "high"]);

    assert_eq!(
        planner.scheduled_dates().unwrap(),
        vec![date(2024, 7, 1), day]
    );
}

#[test]
fn unknown_ids_are_not_found() {
    let store = MemoryStore::new();
    let todos = TodoService::new(&store);
    assert!(matches!(todos.toggle("404"), Err(RepoError::NotFound(_))));
    assert!(matches!(todos.edit("404", "x"), Err(RepoError::NotFound(_))));
}
