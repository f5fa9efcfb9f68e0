use eframe::egui;
use pf_navigation::section::SectionId;

use crate::app::App;
use crate::command_sender::UICommand;
use crate::theme;

/// Section list shown below the bar while the compact menu is open.
pub fn menu_drawer(ctx: &egui::Context, app: &mut App) {
    egui::TopBottomPanel::top("menu_drawer").show(ctx, |ui| {
        ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
            for section in SectionId::ALL {
                let text = egui::RichText::new(section.title()).color(theme::MUTED);
                if ui.selectable_label(false, text).clicked() {
                    app.command_sender.send_ui(UICommand::Navigate(section));
                }
            }
        });
    });
}
