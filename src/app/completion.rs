use super::*;
use crate::model::Alert;
use crate::timer::TimerEvent;
use crate::view_models::SceneEvent;

impl<S: KeyValueStore> QuizSession<S> {
    /// Applies pending timer ticks. Call this regularly (every frame).
    ///
    /// Each tick yields a [`SceneEvent::TimeRemaining`]; an expiry while a
    /// question is up ends the session with a score of 0.
    pub fn pump(&mut self) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        for event in self.timer.poll() {
            match event {
                TimerEvent::Tick { seconds_remaining } => {
                    events.push(SceneEvent::TimeRemaining {
                        seconds: seconds_remaining,
                    });
                }
                TimerEvent::Expired if self.scene == Scene::InQuestion => {
                    log::info!(
                        "time ran out on question {} of {}",
                        self.state.current_question_index + 1,
                        self.state.total_questions
                    );
                    self.state.current_question_index = self.state.total_questions;
                    events.push(self.finish(0, None));
                }
                TimerEvent::Expired => {}
            }
        }
        events
    }

    pub(crate) fn finish(&mut self, score: i64, alert: Option<Alert>) -> SceneEvent {
        self.timer.stop();
        self.scene = Scene::Finished;
        self.final_score = Some(score);
        log::info!("session finished with score {score}");
        SceneEvent::ShowFinalScore {
            score,
            seconds_remaining: self.timer.seconds_remaining(),
            alert,
        }
    }
}
