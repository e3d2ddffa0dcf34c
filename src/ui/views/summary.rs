use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    let score = app.round_view().map(|v| v.total_score).unwrap_or(0);

    centered_panel(ctx, 260.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏆 ¡Ronda terminada!");
            ui.add_space(16.0);
            ui.label("Puntuación total");
            ui.label(RichText::new(score.to_string()).size(42.0).strong());
            ui.add_space(10.0);

            // Por ejemplo: el catálogo se quedó sin jugadores con foto
            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
                ui.add_space(10.0);
            }

            let button_width = (ui.available_width() * 0.7).max(160.0);
            if big_list_button(ui, "🔄 Jugar de nuevo".to_string(), button_width, 40.0, true) {
                app.jugar_de_nuevo();
            }
        });
    });
}
