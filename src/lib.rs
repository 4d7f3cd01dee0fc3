pub mod app;
pub mod data;
pub mod error;
pub mod model;
pub mod scores;
pub mod settings;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizSession;
pub use error::{QuizError, Result};
