use super::*;
use crate::view_models::RoundView;

impl QuizApp {
    pub fn round_view(&self) -> Option<RoundView> {
        self.session
            .as_ref()
            .map(|s| RoundView::from_session(s, self.target_image.is_some()))
    }

    /// Etiqueta del botón de cada dificultad.
    pub fn difficulty_label(&self, difficulty: Difficulty) -> String {
        let multiplier = crate::model::DifficultyProfile::for_difficulty(difficulty).multiplier;
        if self.is_playable(difficulty) {
            format!("{} (x{multiplier})", difficulty.label())
        } else {
            format!("{} 🔒", difficulty.label())
        }
    }
}
