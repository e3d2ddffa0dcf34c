use super::*;

impl QuizApp {
    /// Descarta la sesión entera y vuelve a la selección de dificultad.
    pub fn jugar_de_nuevo(&mut self) {
        if let Some(s) = &self.session {
            log::info!("ronda descartada con {} puntos", s.total_score);
        }
        self.session = None;
        self.target_image = None;
        self.texture = None;
        self.reveal_started = None;
        self.input.clear();
        self.message.clear();
        self.confirm_abandon = false;
        self.sync_state();
    }

    pub fn confirm_abandon(&mut self, ctx: &egui::Context) {
        egui::Window::new("Abandonar ronda")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres abandonar? Se perderá la puntuación de esta ronda.");
                ui.horizontal(|ui| {
                    if ui.button("Sí, abandonar").clicked() {
                        self.jugar_de_nuevo();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_abandon = false;
                    }
                });
            });
    }
}
