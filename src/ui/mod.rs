mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Instant;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE ABANDONAR (solo durante la ronda)
        if matches!(self.state, AppState::Quiz) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::DifficultySelect => views::difficulty::ui_difficulty_select(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Finished => views::summary::ui_summary(self, ctx),
        }

        if self.confirm_abandon {
            self.confirm_abandon(ctx);
        }

        // La revelación se mantiene en pantalla y luego se pasa sola a la siguiente
        if let Some(wait) = self.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
