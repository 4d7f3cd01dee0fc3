use crate::model::{Alert, QuestionRecord, ScoreEntry};

/// What the presenter should show next. Scene variants carry everything
/// needed to redraw the scene from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    ShowWelcome {
        seconds_remaining: i64,
    },
    ShowQuestion {
        record: QuestionRecord,
        index: usize,
        total: usize,
        seconds_remaining: i64,
        alert: Option<Alert>,
    },
    ShowFinalScore {
        score: i64,
        seconds_remaining: i64,
        alert: Option<Alert>,
    },
    ShowHighscores {
        entries: Vec<ScoreEntry>,
    },
    /// Status-bar update from a timer tick; the current scene stays.
    TimeRemaining {
        seconds: i64,
    },
}

impl SceneEvent {
    pub fn alert(&self) -> Option<&Alert> {
        match self {
            SceneEvent::ShowQuestion { alert, .. } | SceneEvent::ShowFinalScore { alert, .. } => {
                alert.as_ref()
            }
            _ => None,
        }
    }

    /// Time to show in the status bar, if this event carries one.
    pub fn seconds_remaining(&self) -> Option<i64> {
        match self {
            SceneEvent::ShowWelcome { seconds_remaining }
            | SceneEvent::ShowQuestion { seconds_remaining, .. }
            | SceneEvent::ShowFinalScore { seconds_remaining, .. } => Some(*seconds_remaining),
            SceneEvent::TimeRemaining { seconds } => Some(*seconds),
            SceneEvent::ShowHighscores { .. } => None,
        }
    }

    pub fn is_scene_change(&self) -> bool {
        !matches!(self, SceneEvent::TimeRemaining { .. })
    }
}
