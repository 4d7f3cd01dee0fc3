use super::*;
use crate::model::Alert;
use crate::view_models::SceneEvent;

impl<S: KeyValueStore> QuizSession<S> {
    /// Grades `selected` against the current question, applies the penalty
    /// for a wrong answer and moves on to the next question or the final score.
    pub fn submit_answer(&mut self, selected: usize) -> Result<SceneEvent> {
        self.require_scene(Scene::InQuestion, "submit_answer")?;

        let record = self.bank.question_at(self.state.current_question_index)?;
        if selected >= record.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index: selected,
                options: record.options.len(),
            });
        }
        let correct = record.is_correct(selected);

        if !correct {
            self.timer.adjust(-self.settings.penalty_seconds)?;
        }
        log::debug!(
            "question {} answered {} ({}s left)",
            self.state.current_question_index,
            if correct { "correctly" } else { "wrong" },
            self.timer.seconds_remaining()
        );

        self.state.last_answer_correct = Some(correct);
        self.state.current_question_index += 1;
        let alert = Alert::for_answer(correct, self.settings.alert_duration);

        if self.state.is_over() {
            let score = self.timer.seconds_remaining();
            Ok(self.finish(score, Some(alert)))
        } else {
            self.question_event(Some(alert))
        }
    }

    /// Saves the score under `initials` and shows the highscores.
    ///
    /// Blank initials leave the final-score scene up and return `Ok(None)`.
    pub fn submit_score(&mut self, initials: &str, final_score: i64) -> Result<Option<SceneEvent>> {
        self.require_scene(Scene::Finished, "submit_score")?;

        match self.scores.save(initials, final_score) {
            Ok(()) => {}
            Err(QuizError::InvalidInitials) => {
                log::debug!("blank initials submitted, staying on final score");
                return Ok(None);
            }
            Err(err) => return Err(err),
        }
        self.scene = Scene::ViewingHighscores;
        Ok(Some(self.highscores_event()))
    }

    pub fn clear_highscores(&mut self) -> Result<SceneEvent> {
        self.require_scene(Scene::ViewingHighscores, "clear_highscores")?;
        self.scores.clear_all()?;
        Ok(self.highscores_event())
    }
}
