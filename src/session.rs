// src/session.rs

use crate::model::{DifficultyProfile, MAX_ATTEMPTS, PlayerRecord, QUESTIONS_PER_ROUND};
use crate::rules::{HintTier, blur_for, hints_for, is_correct, points_for};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::time::Duration;

/// Cómo terminó la pregunta actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Correct { points: u32 },
    OutOfAttempts,
    Passed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Revealing(RevealKind),
    Finished,
}

impl Phase {
    /// Tiempo que el shell debe mantener la revelación en pantalla antes de
    /// despachar `advance`. `None` fuera de la revelación.
    pub fn hold(&self) -> Option<Duration> {
        match self {
            Phase::Revealing(RevealKind::Passed) => Some(Duration::from_millis(1500)),
            Phase::Revealing(_) => Some(Duration::from_secs(3)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { points: u32 },
    Incorrect { remaining: u32 },
    OutOfAttempts,
    /// No hay pregunta abierta (revelando o ronda terminada).
    Ignored,
}

/// Estado de una ronda. Lo posee el shell y sólo cambia a través de los
/// métodos de transición.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub profile: DifficultyProfile,
    pub total_score: u32,
    pub question_index: u32,
    pub played_names: HashSet<String>,
    pub current_target: Option<PlayerRecord>,
    pub attempts_used: u32,
    pub finished: bool,
    pub phase: Phase,
}

impl GameSession {
    pub fn new(profile: DifficultyProfile) -> Self {
        Self {
            profile,
            total_score: 0,
            question_index: 1,
            played_names: HashSet::new(),
            current_target: None,
            attempts_used: 0,
            finished: false,
            phase: Phase::AwaitingGuess,
        }
    }

    /// Elige un jugador no jugado todavía. Si no quedan, o ya se hicieron
    /// las 5 preguntas, la ronda termina.
    pub fn pick_new_player<R: Rng + ?Sized>(&mut self, pool: &[PlayerRecord], rng: &mut R) {
        let available: Vec<&PlayerRecord> = pool
            .iter()
            .filter(|p| !self.played_names.contains(&p.name))
            .collect();

        match available.choose(rng) {
            Some(target) if self.question_index <= QUESTIONS_PER_ROUND => {
                self.played_names.insert(target.name.clone());
                self.current_target = Some((*target).clone());
                self.attempts_used = 0;
                self.phase = Phase::AwaitingGuess;
            }
            _ => self.finish(),
        }
    }

    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        if self.phase != Phase::AwaitingGuess {
            return GuessOutcome::Ignored;
        }
        let Some(target) = &self.current_target else {
            return GuessOutcome::Ignored;
        };

        if is_correct(guess, &target.name) {
            let points = points_for(self.attempts_used, self.profile.multiplier);
            self.total_score += points;
            self.phase = Phase::Revealing(RevealKind::Correct { points });
            return GuessOutcome::Correct { points };
        }

        self.attempts_used += 1;
        if self.attempts_used >= MAX_ATTEMPTS {
            self.phase = Phase::Revealing(RevealKind::OutOfAttempts);
            GuessOutcome::OutOfAttempts
        } else {
            GuessOutcome::Incorrect {
                remaining: MAX_ATTEMPTS - self.attempts_used,
            }
        }
    }

    /// Pasar: se muestra la respuesta sin puntos.
    pub fn pass(&mut self) -> bool {
        if self.phase != Phase::AwaitingGuess || self.current_target.is_none() {
            return false;
        }
        self.phase = Phase::Revealing(RevealKind::Passed);
        true
    }

    /// Cierra la revelación y pasa a la siguiente pregunta.
    pub fn advance<R: Rng + ?Sized>(&mut self, pool: &[PlayerRecord], rng: &mut R) {
        if !matches!(self.phase, Phase::Revealing(_)) {
            return;
        }
        self.question_index += 1;
        self.current_target = None;
        self.pick_new_player(pool, rng);
    }

    /// Descarta el objetivo actual sin contar la pregunta (p. ej. no hay foto)
    /// y busca otro. El nombre descartado sigue en `played_names`.
    pub fn skip_target<R: Rng + ?Sized>(&mut self, pool: &[PlayerRecord], rng: &mut R) {
        if self.finished {
            return;
        }
        self.current_target = None;
        self.pick_new_player(pool, rng);
    }

    fn finish(&mut self) {
        self.current_target = None;
        self.finished = true;
        self.phase = Phase::Finished;
    }

    /// Desenfoque a aplicar ahora; al revelar la imagen se ve nítida.
    pub fn current_blur(&self) -> f32 {
        match self.phase {
            Phase::AwaitingGuess => blur_for(&self.profile, self.attempts_used),
            _ => 0.0,
        }
    }

    pub fn hints(&self) -> HintTier {
        hints_for(self.attempts_used)
    }

    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }
}
