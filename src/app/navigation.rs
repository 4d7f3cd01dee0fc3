use super::*;
use crate::view_models::SceneEvent;

impl<S: KeyValueStore> QuizSession<S> {
    pub fn begin_session(&mut self) -> Result<SceneEvent> {
        self.require_scene(Scene::Welcome, "begin_session")?;

        self.timer.start(self.settings.start_seconds)?;
        self.state = SessionState::new(self.bank.count());
        self.final_score = None;
        self.scene = Scene::InQuestion;
        log::info!(
            "session started: {} questions, {}s on the clock",
            self.state.total_questions,
            self.settings.start_seconds
        );
        self.question_event(None)
    }

    /// Leaves whatever is happening and lists the highscores. The question
    /// pointer is left where it was.
    pub fn view_highscores(&mut self) -> Result<SceneEvent> {
        if self.scene == Scene::InQuestion {
            log::info!(
                "session abandoned at question {}",
                self.state.current_question_index
            );
        }
        self.timer.stop();
        self.scene = Scene::ViewingHighscores;
        Ok(self.highscores_event())
    }

    pub fn return_to_welcome(&mut self) -> Result<SceneEvent> {
        self.require_scene(Scene::ViewingHighscores, "return_to_welcome")?;

        self.timer.stop();
        self.timer.reset()?;
        self.state = SessionState::new(self.bank.count());
        self.final_score = None;
        self.scene = Scene::Welcome;
        Ok(SceneEvent::ShowWelcome {
            seconds_remaining: self.timer.seconds_remaining(),
        })
    }

    pub(crate) fn question_event(&self, alert: Option<crate::model::Alert>) -> Result<SceneEvent> {
        let index = self.state.current_question_index;
        let record = self.bank.question_at(index)?.clone();
        Ok(SceneEvent::ShowQuestion {
            record,
            index,
            total: self.state.total_questions,
            seconds_remaining: self.timer.seconds_remaining(),
            alert,
        })
    }

    pub(crate) fn highscores_event(&self) -> SceneEvent {
        SceneEvent::ShowHighscores {
            entries: self.scores.load_all_sorted(),
        }
    }
}
