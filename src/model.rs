use serde::{Deserialize, Serialize};

/// Número de preguntas de una ronda completa.
pub const QUESTIONS_PER_ROUND: u32 = 5;
/// Intentos por pregunta; el quinto fallo cierra la pregunta.
pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub nationality: String,
    pub moment: String, // momento icónico (segunda pista)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "Fácil", alias = "Facil", alias = "Kolay")]
    Easy,
    #[serde(alias = "medium", alias = "Media", alias = "Orta")]
    Medium,
    #[serde(alias = "hard", alias = "Difícil", alias = "Dificil", alias = "Zor")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

/// Curva de desenfoque + multiplicador, fija durante toda la ronda.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    pub blur_levels: [f32; 5],
    pub multiplier: u32,
}

impl DifficultyProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (blur_levels, multiplier) = match difficulty {
            Difficulty::Easy => ([12.0, 8.0, 5.0, 2.0, 0.0], 1),
            Difficulty::Medium => ([25.0, 15.0, 8.0, 3.0, 0.0], 2),
            Difficulty::Hard => ([45.0, 30.0, 15.0, 5.0, 0.0], 3),
        };
        Self {
            difficulty,
            blur_levels,
            multiplier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    DifficultySelect,
    Quiz,
    Finished,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::DifficultySelect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_have_five_non_increasing_steps_ending_sharp() {
        for d in Difficulty::ALL {
            let p = DifficultyProfile::for_difficulty(d);
            assert!(p.blur_levels.windows(2).all(|w| w[0] >= w[1]));
            assert!(p.blur_levels.iter().all(|b| *b >= 0.0));
            assert_eq!(p.blur_levels[4], 0.0);
        }
    }

    #[test]
    fn multiplier_grows_with_difficulty() {
        let m: Vec<u32> = Difficulty::ALL
            .iter()
            .map(|d| DifficultyProfile::for_difficulty(*d).multiplier)
            .collect();
        assert_eq!(m, vec![1, 2, 3]);
    }

    #[test]
    fn difficulty_accepts_localized_labels() {
        let d: Difficulty = serde_json::from_str("\"Kolay\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }
}
