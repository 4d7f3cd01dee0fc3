pub mod final_score;
pub mod highscores;
pub mod question;
pub mod welcome;
