// src/rules.rs
//
// Reglas puras del juego: desenfoque, puntuación, acierto y pistas.

use crate::model::{DifficultyProfile, MAX_ATTEMPTS};

/// Intensidad de desenfoque para el número de intentos fallidos.
/// A partir del cuarto fallo la imagen se ve nítida.
pub fn blur_for(profile: &DifficultyProfile, attempts_used: u32) -> f32 {
    let idx = (attempts_used as usize).min(profile.blur_levels.len() - 1);
    profile.blur_levels[idx]
}

/// Puntos por acertar tras `attempts_used` fallos.
pub fn points_for(attempts_used: u32, multiplier: u32) -> u32 {
    MAX_ATTEMPTS.saturating_sub(attempts_used) * 20 * multiplier
}

/// Acierto si el texto (normalizado) tiene más de 3 caracteres y aparece
/// dentro del nombre correcto. Es permisivo a propósito: "messi" vale para
/// "Lionel Messi".
pub fn is_correct(guess: &str, correct_name: &str) -> bool {
    let guess = guess.trim().to_lowercase();
    if guess.is_empty() || guess.chars().count() <= 3 {
        return false;
    }
    correct_name.to_lowercase().contains(&guess)
}

/// Pistas desbloqueadas (acumulativas) según los fallos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintTier {
    pub nationality: bool,
    pub moment: bool,
}

pub fn hints_for(attempts_used: u32) -> HintTier {
    HintTier {
        nationality: attempts_used >= 1,
        moment: attempts_used >= 2,
    }
}
