use std::hash::Hash;

use eframe::egui;
use pf_content::portfolio::Accent;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(56, 189, 248);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(167, 139, 250);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
pub const CARD: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);

pub fn accent_color(accent: Accent) -> egui::Color32 {
    match accent {
        Accent::Primary => PRIMARY,
        Accent::Accent => ACCENT,
        Accent::Cyan => egui::Color32::from_rgb(6, 182, 212),
        Accent::Purple => egui::Color32::from_rgb(168, 85, 247),
        Accent::Green => egui::Color32::from_rgb(34, 197, 94),
        Accent::Orange => egui::Color32::from_rgb(249, 115, 22),
        Accent::Blue => egui::Color32::from_rgb(59, 130, 246),
    }
}

fn lerp_color(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

/// Large section heading
pub fn heading(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.label(egui::RichText::new(text).size(34.0).strong())
}

pub fn muted(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.label(egui::RichText::new(text).color(MUTED))
}

pub fn chip(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    egui::Frame::none()
        .fill(color.linear_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.4)))
        .rounding(999.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| ui.label(egui::RichText::new(text).size(13.0)))
        .response
}

/// A bordered card that highlights and lifts while hovered.
pub fn card<R>(
    ui: &mut egui::Ui,
    id_source: impl Hash,
    accent: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let id = ui.make_persistent_id(id_source);
    let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let t = ui.ctx().animate_bool(id.with("hover"), was_hovered);
    let lift = 4.0 * t;

    ui.add_space(4.0 - lift);
    let inner = egui::Frame::none()
        .fill(CARD)
        .stroke(egui::Stroke::new(1.0 + t, lerp_color(BORDER, accent, t)))
        .rounding(14.0)
        .inner_margin(egui::Margin::same(18.0))
        .show(ui, add_contents);
    ui.add_space(lift);

    let hovered = ui.rect_contains_pointer(inner.response.rect);
    if hovered != was_hovered {
        ui.ctx().data_mut(|d| d.insert_temp(id, hovered));
    }

    inner
}
