use super::*;
use crate::data::read_questions_embedded;
use crate::model::{Alert, QuestionRecord, ScoreEntry};
use crate::scores::MemoryStore;
use crate::timer::ManualClock;
use crate::view_models::SceneEvent;
use std::time::Duration;

fn settings(start_seconds: i64) -> QuizSettings {
    QuizSettings {
        start_seconds,
        ..QuizSettings::default()
    }
}

fn session_with(start_seconds: i64) -> (QuizSession<MemoryStore>, ManualClock) {
    let bank = read_questions_embedded().expect("embedded bank");
    let (timer, clock) = CountdownTimer::manual();
    let session = QuizSession::new(bank, settings(start_seconds), timer, MemoryStore::new());
    (session, clock)
}

fn wrong_answer(record: &QuestionRecord) -> usize {
    (record.correct_index + 1) % record.options.len()
}

fn current(session: &QuizSession<MemoryStore>) -> QuestionRecord {
    session.current_question().expect("question on screen").clone()
}

#[test]
fn begin_session_shows_first_question_and_starts_timer() {
    let (mut session, _clock) = session_with(75);
    let event = session.begin_session().unwrap();

    match event {
        SceneEvent::ShowQuestion {
            index,
            total,
            seconds_remaining,
            alert,
            record,
        } => {
            assert_eq!((index, total), (0, 5));
            assert_eq!(seconds_remaining, 75);
            assert_eq!(alert, None);
            assert_eq!(record.prompt, "Commonly-used data types DO NOT include:");
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(session.scene(), Scene::InQuestion);
    assert!(session.timer_running());
}

#[test]
fn wrong_answer_costs_exactly_the_penalty() {
    let (mut session, _clock) = session_with(75);
    session.begin_session().unwrap();

    let record = current(&session);
    let event = session.submit_answer(wrong_answer(&record)).unwrap();

    assert_eq!(session.seconds_remaining(), 65);
    assert_eq!(session.session_state().current_question_index, 1);
    assert_eq!(session.session_state().last_answer_correct, Some(false));
    assert_eq!(
        event.alert(),
        Some(&Alert {
            text: "Incorrect...".into(),
            duration: Duration::from_secs(5)
        })
    );
}

#[test]
fn correct_answer_keeps_the_clock() {
    let (mut session, _clock) = session_with(75);
    session.begin_session().unwrap();

    let record = current(&session);
    let event = session.submit_answer(record.correct_index).unwrap();

    assert_eq!(session.seconds_remaining(), 75);
    assert_eq!(event.alert().map(|a| a.text.as_str()), Some("Correct!"));
}

#[test]
fn index_advances_by_one_until_the_last_question() {
    let (mut session, _clock) = session_with(75);
    session.begin_session().unwrap();

    for expected in 1..=5 {
        let record = current(&session);
        session.submit_answer(record.correct_index).unwrap();
        let state = session.session_state();
        assert_eq!(state.current_question_index, expected);
        assert!(state.current_question_index <= state.total_questions);
    }
    assert_eq!(session.scene(), Scene::Finished);
    assert!(session.current_question().is_none());
}

#[test]
fn last_answer_finishes_with_live_time_remaining() {
    let (mut session, clock) = session_with(75);
    session.begin_session().unwrap();

    // Two wrong answers and a few ticks: 75 - 10 - 10 - 3 = 52.
    for _ in 0..2 {
        let record = current(&session);
        session.submit_answer(wrong_answer(&record)).unwrap();
    }
    clock.advance(3);
    session.pump();

    let mut last = None;
    while session.scene() == Scene::InQuestion {
        let record = current(&session);
        last = Some(session.submit_answer(record.correct_index).unwrap());
    }

    assert_eq!(
        last,
        Some(SceneEvent::ShowFinalScore {
            score: 52,
            seconds_remaining: 52,
            alert: Some(Alert::for_answer(true, Duration::from_secs(5))),
        })
    );
    assert_eq!(session.final_score(), Some(52));
    assert!(!session.timer_running());
}

#[test]
fn final_score_may_be_negative() {
    let (mut session, _clock) = session_with(15);
    session.begin_session().unwrap();

    while session.scene() == Scene::InQuestion {
        let record = current(&session);
        session.submit_answer(wrong_answer(&record)).unwrap();
    }
    assert_eq!(session.final_score(), Some(15 - 5 * 10));
}

#[test]
fn expiry_finishes_without_any_answer() {
    let (mut session, clock) = session_with(3);
    session.begin_session().unwrap();

    clock.advance(3);
    let events = session.pump();

    assert_eq!(
        events,
        vec![
            SceneEvent::TimeRemaining { seconds: 2 },
            SceneEvent::TimeRemaining { seconds: 1 },
            SceneEvent::TimeRemaining { seconds: 0 },
            SceneEvent::ShowFinalScore {
                score: 0,
                seconds_remaining: 0,
                alert: None
            },
        ]
    );
    assert_eq!(session.scene(), Scene::Finished);
    assert_eq!(session.final_score(), Some(0));
    let state = session.session_state();
    assert_eq!(state.current_question_index, state.total_questions);
}

#[test]
fn penalty_below_zero_expires_on_next_tick_with_zero_score() {
    let (mut session, clock) = session_with(5);
    session.begin_session().unwrap();

    let record = current(&session);
    session.submit_answer(wrong_answer(&record)).unwrap();
    assert_eq!(session.seconds_remaining(), -5);
    assert_eq!(session.scene(), Scene::InQuestion);

    clock.tick();
    let events = session.pump();
    assert_eq!(events.len(), 2);
    assert_eq!(session.scene(), Scene::Finished);
    assert_eq!(session.final_score(), Some(0));
}

#[test]
fn submit_answer_rejects_unknown_option() {
    let (mut session, _clock) = session_with(75);
    session.begin_session().unwrap();

    let err = session.submit_answer(9).unwrap_err();
    assert!(matches!(err, QuizError::OptionOutOfRange { index: 9, options: 4 }));
    assert_eq!(session.session_state().current_question_index, 0);
    assert_eq!(session.seconds_remaining(), 75);
}

#[test]
fn actions_in_the_wrong_scene_change_nothing() {
    let (mut session, _clock) = session_with(75);

    assert!(matches!(
        session.submit_answer(0),
        Err(QuizError::InvalidTransition {
            scene: Scene::Welcome,
            action: "submit_answer"
        })
    ));
    assert!(session.submit_score("AB", 10).is_err());
    assert!(session.return_to_welcome().is_err());
    assert!(session.clear_highscores().is_err());

    session.begin_session().unwrap();
    assert!(session.begin_session().is_err());
    assert_eq!(session.scene(), Scene::InQuestion);
}

#[test]
fn blank_initials_keep_the_final_score_scene() {
    let (mut session, clock) = session_with(1);
    session.begin_session().unwrap();
    clock.tick();
    session.pump();

    assert_eq!(session.submit_score("  ", 0).unwrap(), None);
    assert_eq!(session.scene(), Scene::Finished);
    assert!(session.highscores().is_empty());
}

#[test]
fn submitted_score_shows_sorted_highscores() {
    let (mut session, _clock) = session_with(75);
    for (initials, score) in [("A", 10), ("B", 30), ("C", 20)] {
        session.view_highscores().unwrap();
        session.return_to_welcome().unwrap();
        session.begin_session().unwrap();
        while session.scene() == Scene::InQuestion {
            let record = current(&session);
            session.submit_answer(record.correct_index).unwrap();
        }
        let event = session.submit_score(initials, score).unwrap();
        assert!(matches!(event, Some(SceneEvent::ShowHighscores { .. })));
    }

    assert_eq!(session.scene(), Scene::ViewingHighscores);
    assert_eq!(
        session.highscores(),
        vec![
            ScoreEntry::new("B", 30),
            ScoreEntry::new("C", 20),
            ScoreEntry::new("A", 10)
        ]
    );
}

#[test]
fn view_highscores_mid_question_stops_timer_and_keeps_index() {
    let (mut session, clock) = session_with(75);
    session.begin_session().unwrap();
    let record = current(&session);
    session.submit_answer(record.correct_index).unwrap();

    let event = session.view_highscores().unwrap();
    assert_eq!(event, SceneEvent::ShowHighscores { entries: vec![] });
    assert!(!session.timer_running());
    assert_eq!(session.session_state().current_question_index, 1);

    // Ticks after leaving the quiz are dropped.
    clock.advance(5);
    assert!(session.pump().is_empty());
    assert_eq!(session.scene(), Scene::ViewingHighscores);
}

#[test]
fn return_to_welcome_resets_clock_and_index() {
    let (mut session, _clock) = session_with(75);
    session.begin_session().unwrap();
    let record = current(&session);
    session.submit_answer(record.correct_index).unwrap();
    session.view_highscores().unwrap();

    let event = session.return_to_welcome().unwrap();
    assert_eq!(event, SceneEvent::ShowWelcome { seconds_remaining: 0 });
    assert_eq!(session.scene(), Scene::Welcome);
    assert_eq!(session.seconds_remaining(), 0);
    assert_eq!(session.session_state().current_question_index, 0);
    assert_eq!(session.final_score(), None);

    session.begin_session().unwrap();
    assert_eq!(session.seconds_remaining(), 75);
}

#[test]
fn clear_highscores_stays_on_the_list() {
    let (mut session, clock) = session_with(2);
    session.begin_session().unwrap();
    clock.advance(2);
    session.pump();
    session.submit_score("AB", 0).unwrap();
    assert_eq!(session.highscores().len(), 1);

    let event = session.clear_highscores().unwrap();
    assert_eq!(event, SceneEvent::ShowHighscores { entries: vec![] });
    assert_eq!(session.scene(), Scene::ViewingHighscores);
    assert!(session.highscores().is_empty());
}

#[test]
fn wall_clock_session_expires_on_its_own() {
    let bank = read_questions_embedded().unwrap();
    let settings = QuizSettings {
        start_seconds: 3,
        tick_interval: Duration::from_millis(5),
        ..QuizSettings::default()
    };
    let mut session = QuizSession::with_wall_clock(bank, settings, MemoryStore::new());
    session.begin_session().unwrap();

    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while session.scene() == Scene::InQuestion && std::time::Instant::now() < deadline {
        session.pump();
        std::thread::sleep(Duration::from_millis(2));
    }
    assert_eq!(session.scene(), Scene::Finished);
    assert_eq!(session.final_score(), Some(0));
}
