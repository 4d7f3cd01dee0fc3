use crate::ui::QuizGui;
use egui::{CentralPanel, Context, Frame, Ui, Visuals};

/// Barra superior: enlace a puntuaciones y tiempo restante.
pub fn status_bar(app: &mut QuizGui, ctx: &Context, now: f64) {
    egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.link("View Highscores").clicked() {
                app.view_highscores(now);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Time: {}", app.seconds_remaining));
            });
        });
    });
}

pub fn bottom_panel(app: &mut QuizGui, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                    app.prefs.dark_mode = true;
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                    app.prefs.dark_mode = false;
                }
            }
        );
    });
}

/// Aviso temporal debajo de la escena (Correct! / Incorrect...).
pub fn alert_panel(app: &QuizGui, ctx: &Context) {
    let Some(alert) = &app.alert else {
        return;
    };
    egui::TopBottomPanel::bottom("alert_panel").show(ctx, |ui| {
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&alert.text).italics().size(18.0));
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    // Ejecuta contenido
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
