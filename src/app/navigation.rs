use super::*;
use crate::model::DifficultyProfile;

impl QuizApp {
    /// Crea la sesión para la dificultad elegida y prepara la primera pregunta.
    pub fn empezar_partida(&mut self, difficulty: Difficulty) {
        if !self.is_playable(difficulty) {
            self.message = format!(
                "⚠ No hay jugadores para la dificultad {}.",
                difficulty.label()
            );
            return;
        }

        self.selected_difficulty = difficulty;
        self.session = Some(GameSession::new(DifficultyProfile::for_difficulty(
            difficulty,
        )));
        self.message.clear();
        self.input.clear();
        self.reveal_started = None;
        log::info!("nueva ronda ({})", difficulty.label());

        self.with_session(|s, pool, rng| s.pick_new_player(pool, rng));
        self.preparar_imagen();
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{all_photos, app_with};
    use super::*;

    #[test]
    fn start_picks_a_target_with_image() {
        let mut app = app_with(all_photos());
        app.empezar_partida(Difficulty::Easy);

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.target_name().is_some());
        assert!(app.target_image.is_some());
        let s = app.session.as_ref().unwrap();
        assert_eq!(s.question_index, 1);
        assert_eq!(s.played_names.len(), 1);
    }
}
