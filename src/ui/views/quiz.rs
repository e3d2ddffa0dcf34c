use crate::QuizApp;
use crate::app::TextureKey;
use crate::imaging::apply_blur;
use crate::session::RevealKind;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Color32, ColorImage, Context, RichText, TextEdit, TextureHandle, TextureOptions};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.round_view() else {
        return;
    };
    let texture = target_texture(app, ctx, view.blur);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 560.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.heading(view.heading());
            ui.add_space(8.0);

            // Foto (desenfocada mientras se adivina)
            match &texture {
                Some(tex) => {
                    ui.add(
                        egui::Image::new(tex)
                            .max_width(panel_width)
                            .max_height(360.0),
                    );
                }
                None => {
                    ui.add_space(120.0);
                    ui.label("Cargando imagen…");
                    ui.add_space(120.0);
                }
            }
            if let Some(caption) = view.caption() {
                let color = match view.reveal {
                    Some(RevealKind::Correct { .. }) => Color32::GREEN,
                    Some(RevealKind::OutOfAttempts) => Color32::RED,
                    _ => Color32::LIGHT_GRAY,
                };
                ui.label(RichText::new(caption).color(color).heading().strong());
            }
            ui.add_space(8.0);

            // Pistas
            egui::CollapsingHeader::new("💡 Pistas")
                .default_open(true)
                .show(ui, |ui| {
                    if view.hints.is_empty() {
                        ui.label("Falla un intento para desbloquear la primera pista.");
                    }
                    for hint in &view.hints {
                        ui.label(hint.label());
                    }
                });
            ui.add_space(8.0);

            let awaiting = view.reveal.is_none();
            if awaiting {
                ui.label(view.attempts_label());
                let resp = ui.add_sized(
                    [panel_width, 28.0],
                    TextEdit::singleline(&mut app.input).hint_text("Tu respuesta"),
                );
                let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let (adivinar, pasar) = two_button_row(ui, panel_width, "Adivinar", "Pasar");
                if adivinar || enter {
                    let input = app.input.clone();
                    app.procesar_intento(&input);
                    resp.request_focus();
                }
                if pasar {
                    app.pasar_pregunta();
                }
            } else if ui.button("Siguiente ➡").clicked() {
                app.siguiente_pregunta();
            }

            ui.add_space(8.0);
            if !app.message.is_empty() {
                ui.label(&app.message);
            }
        });
    });
}

/// Textura de la foto con el desenfoque actual; sólo se regenera cuando
/// cambia el jugador o la intensidad.
fn target_texture(app: &mut QuizApp, ctx: &Context, blur: f32) -> Option<TextureHandle> {
    let key = TextureKey {
        name: app.target_name()?.to_string(),
        blur_bits: blur.to_bits(),
    };
    if let Some((cached, tex)) = &app.texture {
        if *cached == key {
            return Some(tex.clone());
        }
    }

    let img = app.target_image.as_ref()?;
    let blurred = apply_blur(img, blur);
    let size = [blurred.width() as usize, blurred.height() as usize];
    let color = ColorImage::from_rgb(size, blurred.as_raw());
    let tex = ctx.load_texture("jugador", color, TextureOptions::LINEAR);
    app.texture = Some((key, tex.clone()));
    Some(tex)
}
