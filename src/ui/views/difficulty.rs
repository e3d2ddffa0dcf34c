use crate::QuizApp;
use crate::model::Difficulty;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_difficulty_select(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 460.0, |ui| {
        ui.vertical_centered(|ui| {
            let content_width = ui.available_width();
            ui.heading("⚽ Maratón: adivina el futbolista");
            ui.add_space(18.0);
            ui.label("Elige la dificultad");
            ui.add_space(12.0);

            let button_width = (content_width * 0.8).clamp(120.0, 320.0);
            for difficulty in Difficulty::ALL {
                let label = app.difficulty_label(difficulty);
                let enabled = app.is_playable(difficulty);
                let selected = app.selected_difficulty == difficulty;
                let label = if selected && enabled { format!("● {label}") } else { label };
                if big_list_button(ui, label, button_width, 36.0, enabled) {
                    app.selected_difficulty = difficulty;
                }
                ui.add_space(5.0);
            }

            ui.add_space(10.0);
            let can_start = app.is_playable(app.selected_difficulty);
            if big_list_button(ui, "▶ Empezar partida".to_string(), button_width, 40.0, can_start) {
                app.empezar_partida(app.selected_difficulty);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.add_space(5.0);
                if big_list_button(ui, "Salir".to_string(), button_width, 36.0, true) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }

            // Mensaje de error / info
            if !app.message.is_empty() {
                ui.add_space(16.0);
                ui.label(
                    RichText::new(&app.message)
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
            }
        });
    });
}
