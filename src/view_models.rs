// src/view_models.rs

use crate::model::QUESTIONS_PER_ROUND;
use crate::session::{GameSession, Phase, RevealKind};

#[derive(Clone, Debug, PartialEq)]
pub struct HintLine {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: String,
}

impl HintLine {
    pub fn label(&self) -> String {
        format!("{} {}: {}", self.icon, self.title, self.text)
    }
}

/// Todo lo que la interfaz necesita para dibujar una pregunta.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundView {
    pub question_number: u32,
    pub total_questions: u32,
    pub blur: f32,
    pub has_image: bool,
    pub hints: Vec<HintLine>,
    pub attempts_left: u32,
    pub reveal: Option<RevealKind>,
    pub answer: Option<String>,
    pub total_score: u32,
    pub finished: bool,
}

impl RoundView {
    pub fn from_session(session: &GameSession, has_image: bool) -> Self {
        let target = session.current_target.as_ref();
        let tier = session.hints();
        let mut hints = Vec::new();
        if let Some(t) = target {
            if tier.nationality {
                hints.push(HintLine {
                    icon: "🌍",
                    title: "Nacionalidad",
                    text: t.nationality.clone(),
                });
            }
            if tier.moment {
                hints.push(HintLine {
                    icon: "✨",
                    title: "Momento icónico",
                    text: t.moment.clone(),
                });
            }
        }

        let reveal = match session.phase {
            Phase::Revealing(kind) => Some(kind),
            _ => None,
        };

        Self {
            question_number: session.question_index.min(QUESTIONS_PER_ROUND),
            total_questions: QUESTIONS_PER_ROUND,
            blur: session.current_blur(),
            has_image,
            hints,
            attempts_left: session.remaining_attempts(),
            reveal,
            answer: reveal.and(target.map(|t| t.name.clone())),
            total_score: session.total_score,
            finished: session.finished,
        }
    }

    pub fn heading(&self) -> String {
        format!("Pregunta {}/{}", self.question_number, self.total_questions)
    }

    pub fn attempts_label(&self) -> String {
        match self.attempts_left {
            1 => "Te queda 1 intento".to_string(),
            n => format!("Te quedan {n} intentos"),
        }
    }

    /// Pie de foto al revelar la respuesta.
    pub fn caption(&self) -> Option<String> {
        let name = self.answer.as_deref()?;
        Some(match self.reveal? {
            RevealKind::Correct { points } => format!("¡ENHORABUENA! {name} (+{points})"),
            RevealKind::OutOfAttempts => format!("¡SIN INTENTOS! Era {name}"),
            RevealKind::Passed => format!("Respuesta: {name}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, DifficultyProfile, PlayerRecord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started() -> (GameSession, Vec<PlayerRecord>, StdRng) {
        let pool = vec![PlayerRecord {
            name: "Andrea Pirlo".into(),
            nationality: "Italia".into(),
            moment: "Panenka en la Euro 2012".into(),
        }];
        let mut rng = StdRng::seed_from_u64(4);
        let mut s = GameSession::new(DifficultyProfile::for_difficulty(Difficulty::Medium));
        s.pick_new_player(&pool, &mut rng);
        (s, pool, rng)
    }

    #[test]
    fn fresh_question_shows_no_hints_and_full_blur() {
        let (s, _, _) = started();
        let v = RoundView::from_session(&s, true);
        assert_eq!(v.heading(), "Pregunta 1/5");
        assert_eq!(v.blur, 25.0);
        assert!(v.hints.is_empty());
        assert_eq!(v.attempts_label(), "Te quedan 5 intentos");
        assert!(v.caption().is_none());
        assert!(v.answer.is_none());
    }

    #[test]
    fn hints_appear_after_failures() {
        let (mut s, _, _) = started();
        s.submit_guess("totti");
        s.submit_guess("nesta");
        let v = RoundView::from_session(&s, true);
        assert_eq!(v.hints.len(), 2);
        assert_eq!(v.hints[0].label(), "🌍 Nacionalidad: Italia");
        assert_eq!(v.attempts_left, 3);
    }

    #[test]
    fn reveal_shows_answer_sharp() {
        let (mut s, _, _) = started();
        s.submit_guess("pirlo");
        let v = RoundView::from_session(&s, true);
        assert_eq!(v.blur, 0.0);
        assert_eq!(v.caption().as_deref(), Some("¡ENHORABUENA! Andrea Pirlo (+200)"));
        assert_eq!(v.total_score, 200);
    }

    #[test]
    fn finished_round_caps_question_number() {
        let (mut s, pool, mut rng) = started();
        s.pass();
        s.advance(&pool, &mut rng);
        let v = RoundView::from_session(&s, false);
        assert!(v.finished);
        assert_eq!(v.question_number, 2);
    }
}
