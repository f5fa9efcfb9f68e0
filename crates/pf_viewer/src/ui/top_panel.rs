use eframe::egui;
use pf_navigation::section::SectionId;

use crate::app::App;
use crate::command_sender::UICommand;
use crate::layout::LayoutMode;
use crate::theme;

pub fn top_panel(ctx: &egui::Context, app: &mut App, layout: LayoutMode) {
    egui::TopBottomPanel::top("top_panel_nav")
        .min_height(52.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let brand = egui::RichText::new(&app.portfolio.profile.brand)
                    .size(22.0)
                    .strong()
                    .color(theme::PRIMARY);
                if ui.add(egui::Button::new(brand).frame(false)).clicked() {
                    app.command_sender
                        .send_ui(UICommand::Navigate(SectionId::Home));
                }

                if let Some(problem) = &app.content_error {
                    let color = ui.visuals().error_fg_color;
                    ui.label(egui::RichText::new(problem).color(color));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match layout {
                        LayoutMode::Compact => {
                            let icon = if app.page.menu().is_open() { "✖" } else { "☰" };
                            if ui.button(egui::RichText::new(icon).size(20.0)).clicked() {
                                app.command_sender.send_ui(UICommand::ToggleMenu);
                            }
                        }
                        LayoutMode::Wide => {
                            // Right to left, so walk the sections backwards
                            for section in SectionId::ALL.iter().rev() {
                                let active = app.page.navigation().is_active(*section);
                                if ui.selectable_label(active, section.title()).clicked() {
                                    app.command_sender.send_ui(UICommand::Navigate(*section));
                                }
                            }
                        }
                    }

                    ui.separator();

                    if ui.button("📂 Open content...").clicked() {
                        app.command_sender.send_ui(UICommand::OpenContent);
                    }
                });
            });
        });
}
