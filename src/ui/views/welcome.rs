use crate::ui::QuizGui;
use crate::ui::helpers::button_width;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

const RULES: &str = "Try to answer the following code-related questions within the time limit. \
Keep in mind that incorrect answers will penalize your score/time by ten seconds!";

pub fn ui_welcome(app: &mut QuizGui, ctx: &Context, now: f64) {
    let max_width = 540.0;
    centered_panel(ctx, 230.0, max_width, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("Coding Quiz Challenge").strong());
            ui.add_space(18.0);

            // El texto de reglas usa la penalización configurada si difiere de la original
            let penalty = app.session.settings().penalty_seconds;
            if penalty == 10 {
                ui.label(RULES);
            } else {
                ui.label(RULES.replace("ten seconds", &format!("{penalty} seconds")));
            }
            ui.add_space(18.0);

            let btn_w = button_width(ui.available_width().min(max_width));
            if ui.add_sized([btn_w, 40.0], Button::new("Start Quiz")).clicked() {
                app.start_quiz(now);
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
