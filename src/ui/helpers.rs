// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Ancho de botón proporcional al panel, con límites razonables.
pub fn button_width(content_width: f32) -> f32 {
    (content_width * 0.9).clamp(120.0, 400.0)
}

/// Devuelve (clic izquierdo, clic derecho) para dos botones en una fila.
pub fn two_button_row(ui: &mut Ui, width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
