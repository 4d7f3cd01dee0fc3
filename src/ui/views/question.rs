use crate::ui::QuizGui;
use crate::ui::helpers::{big_list_button, button_width};
use crate::ui::layout::centered_panel;
use crate::view_models::SceneEvent;
use egui::{Align, Context, RichText};

pub fn ui_question(app: &mut QuizGui, ctx: &Context, now: f64) {
    let SceneEvent::ShowQuestion {
        record,
        index,
        total,
        ..
    } = &app.view
    else {
        return;
    };
    // Copia local: los botones necesitan `app` mutable
    let record = record.clone();
    let (index, total) = (*index, *total);

    let max_width = 650.0;
    let est_height = 120.0 + 48.0 * record.options.len() as f32;
    centered_panel(ctx, est_height, max_width, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
            ui.label(RichText::new(format!("Question {} of {}", index + 1, total)).weak());
            ui.heading(&record.prompt);
            ui.add_space(12.0);

            let btn_w = button_width(ui.available_width().min(max_width));
            let mut selected = None;
            for (i, option) in record.options.iter().enumerate() {
                if big_list_button(ui, format!("{}. {option}", i + 1), btn_w, 36.0, true) {
                    selected = Some(i);
                }
                ui.add_space(4.0);
            }
            if let Some(i) = selected {
                app.answer(i, now);
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
