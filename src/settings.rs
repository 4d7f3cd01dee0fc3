use std::time::Duration;

pub const START_TIME_SECS: i64 = 75;
pub const TIME_PENALTY_SECS: i64 = 10;
pub const ALERT_SECS: u64 = 5;
pub const HIGHSCORE_TABLE_STORAGE_KEY: &str = "highscores";

/// Tunables handed to [`crate::app::QuizSession`] at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    pub start_seconds: i64,
    pub penalty_seconds: i64,
    pub alert_duration: Duration,
    pub tick_interval: Duration,
    pub storage_key: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            start_seconds: START_TIME_SECS,
            penalty_seconds: TIME_PENALTY_SECS,
            alert_duration: Duration::from_secs(ALERT_SECS),
            tick_interval: Duration::from_secs(1),
            storage_key: HIGHSCORE_TABLE_STORAGE_KEY.to_owned(),
        }
    }
}
