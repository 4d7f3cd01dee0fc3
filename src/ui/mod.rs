mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizSession;
use crate::error::Result;
use crate::scores::FileStore;
use crate::view_models::SceneEvent;
use eframe::{APP_KEY, App, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::{alert_panel, bottom_panel, status_bar};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Presenter state that survives restarts through eframe's storage.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Alert banner currently on screen; `expires_at` is in egui input time.
#[derive(Clone, Debug)]
pub struct ActiveAlert {
    pub text: String,
    pub expires_at: f64,
}

pub struct QuizGui {
    pub session: QuizSession<FileStore>,
    pub view: SceneEvent,
    pub seconds_remaining: i64,
    pub alert: Option<ActiveAlert>,
    pub initials: String,
    pub message: String,
    pub prefs: Preferences,
}

impl QuizGui {
    pub fn new(cc: &eframe::CreationContext<'_>, session: QuizSession<FileStore>) -> Self {
        let prefs: Preferences = cc
            .storage
            .and_then(|storage| get_value(storage, APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        let seconds_remaining = session.seconds_remaining();
        Self {
            session,
            view: SceneEvent::ShowWelcome { seconds_remaining },
            seconds_remaining,
            alert: None,
            initials: String::new(),
            message: String::new(),
            prefs,
        }
    }

    /// Swaps in the scene carried by `event` (or just the clock for ticks).
    pub fn apply(&mut self, event: SceneEvent, now: f64) {
        if let Some(seconds) = event.seconds_remaining() {
            self.seconds_remaining = seconds;
        }
        if !event.is_scene_change() {
            return;
        }
        if let Some(alert) = event.alert() {
            // Un nuevo aviso reemplaza al anterior
            self.alert = Some(ActiveAlert {
                text: alert.text.clone(),
                expires_at: now + alert.duration.as_secs_f64(),
            });
        }
        if matches!(event, SceneEvent::ShowFinalScore { .. }) {
            self.initials.clear();
        }
        self.message.clear();
        self.view = event;
    }

    fn handle(&mut self, result: Result<SceneEvent>, now: f64) {
        match result {
            Ok(event) => self.apply(event, now),
            Err(err) => {
                log::warn!("action rejected: {err}");
                self.message = err.to_string();
            }
        }
    }

    pub fn start_quiz(&mut self, now: f64) {
        let result = self.session.begin_session();
        self.handle(result, now);
    }

    pub fn answer(&mut self, selected: usize, now: f64) {
        let result = self.session.submit_answer(selected);
        self.handle(result, now);
    }

    pub fn submit_initials(&mut self, now: f64) {
        let score = self.session.final_score().unwrap_or_default();
        match self.session.submit_score(&self.initials, score) {
            Ok(Some(event)) => self.apply(event, now),
            Ok(None) => {}
            Err(err) => {
                log::error!("could not save score: {err}");
                self.message = format!("No se pudo guardar la puntuación: {err}");
            }
        }
    }

    pub fn view_highscores(&mut self, now: f64) {
        let result = self.session.view_highscores();
        self.handle(result, now);
    }

    pub fn go_back(&mut self, now: f64) {
        let result = self.session.return_to_welcome();
        self.handle(result, now);
    }

    pub fn clear_highscores(&mut self, now: f64) {
        let result = self.session.clear_highscores();
        self.handle(result, now);
    }

    fn expire_alert(&mut self, now: f64) {
        if self.alert.as_ref().is_some_and(|a| now >= a.expires_at) {
            self.alert = None;
        }
    }
}

impl App for QuizGui {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);

        for event in self.session.pump() {
            self.apply(event, now);
        }
        self.expire_alert(now);

        // Sin eventos de entrada egui no repinta: hay que pedirlo mientras corre el reloj
        if self.session.timer_running() || self.alert.is_some() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        // La lista de puntuaciones no lleva barra de estado
        if !matches!(self.view, SceneEvent::ShowHighscores { .. }) {
            status_bar(self, ctx, now);
        }

        bottom_panel(self, ctx);
        alert_panel(self, ctx);

        match self.view {
            SceneEvent::ShowWelcome { .. } => views::welcome::ui_welcome(self, ctx, now),
            SceneEvent::ShowQuestion { .. } => views::question::ui_question(self, ctx, now),
            SceneEvent::ShowFinalScore { .. } => {
                views::final_score::ui_final_score(self, ctx, now)
            }
            SceneEvent::ShowHighscores { .. } => views::highscores::ui_highscores(self, ctx, now),
            // Nunca se guarda como vista
            SceneEvent::TimeRemaining { .. } => {}
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
