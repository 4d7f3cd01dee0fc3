use thiserror::Error;

use crate::model::Scene;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question index {index} out of range (bank holds {count})")]
    OutOfRange { index: usize, count: usize },

    #[error("option {index} out of range (question has {options} options)")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("initials must not be empty")]
    InvalidInitials,

    #[error("countdown timer is already running")]
    AlreadyRunning,

    #[error("countdown timer is not running")]
    NotRunning,

    #[error("`{action}` is not allowed while in {scene:?}")]
    InvalidTransition { scene: Scene, action: &'static str },

    #[error("question bank is empty")]
    EmptyBank,

    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("could not parse question bank: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("could not encode scores: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
