use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionRecord {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

/// Best score recorded for one set of initials.
///
/// Stored as `{"initials": "AB", "value": 50}` so existing highscore tables
/// keep loading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub initials: String,
    #[serde(rename = "value")]
    pub best_value: i64,
}

impl ScoreEntry {
    pub fn new(initials: impl Into<String>, best_value: i64) -> Self {
        Self {
            initials: initials.into(),
            best_value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Welcome,
    InQuestion,
    Finished,
    ViewingHighscores,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_question_index: usize,
    pub total_questions: usize,
    pub last_answer_correct: Option<bool>,
}

impl SessionState {
    pub fn new(total_questions: usize) -> Self {
        Self {
            current_question_index: 0,
            total_questions,
            last_answer_correct: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.current_question_index >= self.total_questions
    }
}

/// Transient notification shown next to a scene and dismissed after `duration`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub duration: Duration,
}

impl Alert {
    pub fn for_answer(correct: bool, duration: Duration) -> Self {
        let text = if correct { "Correct!" } else { "Incorrect..." };
        Self {
            text: text.to_owned(),
            duration,
        }
    }
}
