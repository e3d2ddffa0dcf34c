use super::*;
use crate::resolver::{ImageOutcome, acquire_image};

impl QuizApp {
    /// Busca la foto del objetivo actual. Si no hay foto o falla la descarga
    /// se descarta el jugador (sin gastar pregunta) y se prueba con otro,
    /// hasta tener imagen o agotar el pool.
    pub fn preparar_imagen(&mut self) {
        self.target_image = None;
        self.texture = None;

        while let Some(name) = self.target_name().map(str::to_owned) {
            match acquire_image(self.resolver.as_mut(), &name) {
                ImageOutcome::Ready(img) => {
                    self.target_image = Some(img);
                    break;
                }
                ImageOutcome::Skip(reason) => {
                    log::warn!("saltando a {name} ({reason:?})");
                    self.message = format!("No se pudo cargar la imagen de {name}. Saltando…");
                    self.with_session(|s, pool, rng| s.skip_target(pool, rng));
                }
            }
        }

        self.sync_state();
    }
}
