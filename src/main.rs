use futbol_quiz::QuizApp;
use futbol_quiz::config::GameConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load();
    let app = QuizApp::from_config(config);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "⚽ Adivina el futbolista",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
