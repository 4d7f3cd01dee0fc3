use coding_quiz::data::read_questions_embedded;
use coding_quiz::scores::FileStore;
use coding_quiz::settings::QuizSettings;
use coding_quiz::ui::QuizGui;
use coding_quiz::QuizSession;

const HIGHSCORES_FILE: &str = "quiz_highscores.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let bank = read_questions_embedded()?;
    let store = FileStore::new(HIGHSCORES_FILE);
    log::info!("highscores stored in {}", store.path().display());
    let session = QuizSession::with_wall_clock(bank, QuizSettings::default(), store);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Coding Quiz Challenge",
        options,
        Box::new(|cc| Ok(Box::new(QuizGui::new(cc, session)))),
    )?;
    Ok(())
}
