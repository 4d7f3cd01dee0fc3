use crate::ui::QuizGui;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;
use crate::view_models::SceneEvent;
use egui::{Align, Context, ScrollArea};

pub fn ui_highscores(app: &mut QuizGui, ctx: &Context, now: f64) {
    let SceneEvent::ShowHighscores { entries } = &app.view else {
        return;
    };
    let entries = entries.clone();

    let max_width = 480.0;
    centered_panel(ctx, 320.0, max_width, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
            ui.heading("Highscores");
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                if entries.is_empty() {
                    ui.weak("No highscores yet.");
                }
                for (rank, entry) in entries.iter().enumerate() {
                    ui.label(format!("{}. {} - {}", rank + 1, entry.initials, entry.best_value));
                }
            });
            ui.add_space(12.0);

            let width = ui.available_width().min(max_width);
            let (go_back, clear) = two_button_row(ui, width, "Go Back", "Clear Highscores");
            if go_back {
                app.go_back(now);
            } else if clear {
                app.clear_highscores(now);
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
