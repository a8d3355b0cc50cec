use std::sync::Arc;

use timed_quiz::input::Action;
use timed_quiz::leaderboard::{LEADERBOARD_CAPACITY, record};
use timed_quiz::quiz::{QuizSession, TickOutcome};
use timed_quiz::{
    App, AppState, JsonFileStore, Leaderboard, LeaderboardEntry, LeaderboardStore, MemoryStore,
    Question, Settings,
};

fn three_questions() -> Vec<Question> {
    vec![
        Question::new("Which planet is known as the Red Planet?", vec!["Venus", "Mars", "Jupiter"], 1),
        Question::new("What is 7 x 6?", vec!["42", "36", "48"], 0),
        Question::new("Which gas do plants absorb?", vec!["Oxygen", "Nitrogen", "Carbon dioxide"], 2),
    ]
}

fn entry(name: &str, score: usize) -> LeaderboardEntry {
    LeaderboardEntry::new(name, score, "2026-10-19")
}

#[test]
fn correct_incorrect_correct_scores_two() {
    let mut session = QuizSession::new(three_questions(), 15);
    session.start().unwrap();

    for answer in [1, 2, 2] {
        session.select(answer).unwrap();
        assert!(session.next_question());
    }

    assert_eq!(session.state(), AppState::Complete);
    assert_eq!(session.score(), 2);
}

#[test]
fn expired_question_never_scores() {
    let mut session = QuizSession::new(three_questions(), 15);
    session.start().unwrap();

    let mut last = TickOutcome::Ignored;
    for _ in 0..15 {
        last = session.tick();
    }

    assert_eq!(last, TickOutcome::Expired { correct_answer: 1 });
    assert_eq!(session.revealed_answer(), Some(1));
    assert_eq!(session.score(), 0);
    assert_eq!(session.select(1), None);
    assert_eq!(session.score(), 0);
}

#[test]
fn saving_ava_between_bo_and_cy() {
    let (board, rank) = record(vec![entry("Bo", 9), entry("Cy", 5)], entry("Ava", 7));
    assert_eq!(rank, Some(2));
    let ranked: Vec<(&str, usize)> = board.iter().map(|e| (e.name.as_str(), e.score)).collect();
    assert_eq!(ranked, vec![("Bo", 9), ("Ava", 7), ("Cy", 5)]);
}

#[test]
fn eleventh_entry_drops_lowest() {
    let full: Vec<_> = (1..=10).map(|score| entry(&format!("p{}", score), score)).collect();
    let (board, rank) = record(full, entry("new", 4));
    assert_eq!(rank, Some(8));

    assert_eq!(board.len(), LEADERBOARD_CAPACITY);
    assert!(board.iter().all(|e| e.name != "p1"));
    assert!(board.iter().any(|e| e.name == "new"));
}

#[test]
fn full_run_saves_to_file_and_restart_keeps_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores").join("leaderboard.json");
    let settings = Settings {
        leaderboard_path: path.clone(),
        ..Settings::default()
    };

    let store = JsonFileStore::new(&path);
    store.save(&[entry("Bo", 3)]).unwrap();

    let leaderboard = Leaderboard::open(Box::new(JsonFileStore::new(&path)));
    let mut app = App::new(three_questions(), leaderboard, &settings);

    app.dispatch(Action::Start);
    for answer in [1, 0, 0] {
        app.dispatch(Action::Select(answer));
        app.dispatch(Action::Next);
    }
    assert_eq!(app.state(), AppState::Complete);
    assert_eq!(app.session().score(), 2);

    for c in "Ava".chars() {
        app.dispatch(Action::NameChar(c));
    }
    app.save_score_dated("2026-10-19".to_string());

    let saved = JsonFileStore::new(&path).load();
    assert_eq!(saved, vec![entry("Bo", 3), entry("Ava", 2)]);

    app.dispatch(Action::Restart);
    assert_eq!(app.state(), AppState::InProgress);
    assert_eq!(app.session().score(), 0);
    assert_eq!(app.session().current_index(), 0);
    assert_eq!(JsonFileStore::new(&path).load(), saved);
    assert_eq!(app.leaderboard().entries(), saved.as_slice());
}

#[test]
fn leaderboard_stays_sorted_over_many_runs() {
    let store = Arc::new(MemoryStore::default());
    let questions = three_questions();

    for run in 0..15usize {
        let leaderboard = Leaderboard::open(Box::new(Arc::clone(&store)));
        let mut app = App::new(questions.clone(), leaderboard, &Settings::default());
        app.dispatch(Action::Start);

        // Vary how many answers are right from run to run.
        for (index, question) in questions.iter().enumerate() {
            let answer = if (run + index) % 3 == 0 {
                question.correct_answer
            } else {
                (question.correct_answer + 1) % question.options.len()
            };
            app.dispatch(Action::Select(answer));
            app.dispatch(Action::Next);
        }

        for c in format!("run{}", run).chars() {
            app.dispatch(Action::NameChar(c));
        }
        app.save_score_dated("2026-10-19".to_string());

        let entries = store.load();
        assert!(entries.len() <= LEADERBOARD_CAPACITY);
        assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
    }

    assert_eq!(store.load().len(), LEADERBOARD_CAPACITY);
}
