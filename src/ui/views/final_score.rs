use crate::ui::QuizGui;
use crate::ui::layout::centered_panel;
use crate::view_models::SceneEvent;
use egui::{Align, Context, Key, TextEdit};

pub fn ui_final_score(app: &mut QuizGui, ctx: &Context, now: f64) {
    let SceneEvent::ShowFinalScore { score, .. } = app.view else {
        return;
    };

    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
            ui.heading("All Done!");
            ui.add_space(8.0);
            ui.label(format!("Your final score is {score}"));
            ui.add_space(12.0);

            let mut submit = false;
            ui.horizontal(|ui| {
                ui.label("Enter Initials");
                let response = ui.add(
                    TextEdit::singleline(&mut app.initials)
                        .char_limit(8)
                        .desired_width(120.0),
                );
                // Enter en el campo equivale a enviar el formulario
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
                if ui.button("Submit").clicked() {
                    submit = true;
                }
            });
            if submit {
                app.submit_initials(now);
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
