use super::*;
use crate::session::{GuessOutcome, Phase};
use crate::sound::SoundEvent;
use std::time::Duration;

impl QuizApp {
    pub fn procesar_intento(&mut self, respuesta: &str) {
        self.input.clear();
        let Some(outcome) = self.with_session(|s, _, _| s.submit_guess(respuesta)) else {
            return;
        };
        let answer = self.target_name().unwrap_or_default().to_string();

        match outcome {
            GuessOutcome::Correct { points } => {
                log::info!("acierto: {answer} (+{points})");
                self.sounds.play(SoundEvent::Goal);
                self.message = format!("✅ ¡CORRECTO! +{points} puntos");
                self.reveal_started = Some(Instant::now());
            }
            GuessOutcome::Incorrect { remaining } => {
                self.message = format!("❌ Incorrecto. Quedan {remaining} intentos.");
            }
            GuessOutcome::OutOfAttempts => {
                log::info!("intentos agotados: {answer}");
                self.sounds.play(SoundEvent::Whistle);
                self.message = format!("⛔ ¡TE QUEDASTE SIN INTENTOS! La respuesta era {answer}");
                self.reveal_started = Some(Instant::now());
            }
            GuessOutcome::Ignored => {}
        }
    }

    pub fn pasar_pregunta(&mut self) {
        if self.with_session(|s, _, _| s.pass()) == Some(true) {
            let answer = self.target_name().unwrap_or_default().to_string();
            self.message = format!("⏭ Pregunta pasada. Era {answer}");
            self.reveal_started = Some(Instant::now());
        }
    }

    /// Cierra la revelación y carga la siguiente pregunta (o el resumen).
    pub fn siguiente_pregunta(&mut self) {
        let revealing = self
            .session
            .as_ref()
            .is_some_and(|s| matches!(s.phase, Phase::Revealing(_)));
        if !revealing {
            return;
        }
        self.reveal_started = None;
        self.message.clear();
        self.input.clear();
        self.with_session(|s, pool, rng| s.advance(pool, rng));
        self.preparar_imagen();
        if let Some(s) = self.session.as_ref().filter(|s| s.finished) {
            log::info!("ronda terminada: {} puntos", s.total_score);
        }
    }

    /// Avanza cuando se cumple el tiempo de revelación. Devuelve lo que falta
    /// para que el shell pida un repintado.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let hold = self.session.as_ref()?.phase.hold()?;
        let started = *self.reveal_started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= hold {
            self.siguiente_pregunta();
            None
        } else {
            Some(hold - elapsed)
        }
    }
}
