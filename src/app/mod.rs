use crate::data::QuestionBank;
use crate::error::{QuizError, Result};
use crate::model::{Scene, SessionState};
use crate::scores::{KeyValueStore, ScoreStore};
use crate::settings::QuizSettings;
use crate::timer::CountdownTimer;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;

#[cfg(test)]
mod tests;

/// Drives one player through the quiz: owns the timer, the question pointer
/// and the scene graph, and reports every transition as a
/// [`crate::view_models::SceneEvent`].
pub struct QuizSession<S> {
    bank: QuestionBank,
    settings: QuizSettings,
    timer: CountdownTimer,
    scores: ScoreStore<S>,
    state: SessionState,
    scene: Scene,
    final_score: Option<i64>,
}

impl<S: KeyValueStore> QuizSession<S> {
    pub fn new(
        bank: QuestionBank,
        settings: QuizSettings,
        timer: CountdownTimer,
        backend: S,
    ) -> Self {
        let scores = ScoreStore::new(backend, settings.storage_key.clone());
        let state = SessionState::new(bank.count());
        Self {
            bank,
            settings,
            timer,
            scores,
            state,
            scene: Scene::Welcome,
            final_score: None,
        }
    }

    /// Session on the wall clock, ticking every `settings.tick_interval`.
    pub fn with_wall_clock(bank: QuestionBank, settings: QuizSettings, backend: S) -> Self {
        let timer = CountdownTimer::wall(settings.tick_interval);
        Self::new(bank, settings, timer, backend)
    }

    fn require_scene(&self, expected: Scene, action: &'static str) -> Result<()> {
        if self.scene == expected {
            Ok(())
        } else {
            log::warn!("ignoring `{action}` while in {:?}", self.scene);
            Err(QuizError::InvalidTransition {
                scene: self.scene,
                action,
            })
        }
    }
}
