use super::*;
use crate::model::QuestionRecord;

impl<S: KeyValueStore> QuizSession<S> {
    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn seconds_remaining(&self) -> i64 {
        self.timer.seconds_remaining()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Score of the last finished session, until the player returns to welcome.
    pub fn final_score(&self) -> Option<i64> {
        self.final_score
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        if self.scene != Scene::InQuestion {
            return None;
        }
        self.bank.question_at(self.state.current_question_index).ok()
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn highscores(&self) -> Vec<crate::model::ScoreEntry> {
        self.scores.load_all_sorted()
    }
}
