use eframe::egui;
use egui_extras::{Column, TableBuilder};
use pf_content::portfolio::{Education, Fact};
use pf_navigation::section::SectionId;
use pf_navigation::viewport::ScrollCommand;

use crate::app::App;
use crate::command_sender::UICommand;
use crate::layout::{self, LayoutMode};
use crate::theme;

const SECTION_GAP: f32 = 96.0;

/// The scrolling page with every section, in page order.
pub fn page(ctx: &egui::Context, app: &mut App, layout: LayoutMode) {
    let pending = app.viewport.take();

    egui::CentralPanel::default().show(ctx, |ui| {
        let mut scroll_area = egui::ScrollArea::vertical()
            .id_source("page_scroll")
            .auto_shrink([false; 2]);

        let target = match pending {
            Some(ScrollCommand::ToOffset(offset)) => {
                scroll_area = scroll_area.vertical_scroll_offset(offset as f32);
                None
            }
            Some(ScrollCommand::IntoView(section)) => Some(section),
            None => None,
        };

        let view = PageView {
            app: &*app,
            layout,
            target,
        };
        let output = scroll_area.show(ui, |ui| {
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(32.0, 0.0))
                .show(ui, |ui| view.show(ui));
        });

        app.report_scroll(output.state.offset.y);
    });
}

struct PageView<'a> {
    app: &'a App,
    layout: LayoutMode,
    // Section to bring into view during this frame
    target: Option<SectionId>,
}

impl PageView<'_> {
    fn show(&self, ui: &mut egui::Ui) {
        let anchors = self.app.portfolio.anchors();

        self.hero(ui);
        ui.add_space(SECTION_GAP);
        self.about(ui);
        ui.add_space(SECTION_GAP);
        self.skills(ui);

        if anchors.contains(&SectionId::Experience) {
            ui.add_space(SECTION_GAP);
            self.experience(ui);
        }
        if anchors.contains(&SectionId::Projects) {
            ui.add_space(SECTION_GAP);
            self.projects(ui);
        }

        ui.add_space(SECTION_GAP);
        self.contact(ui);
        ui.add_space(SECTION_GAP / 2.0);
    }

    fn navigate(&self, section: SectionId) {
        self.app
            .command_sender
            .send_ui(UICommand::Navigate(section));
    }

    /// Heading that doubles as the section's element.
    fn section_heading(&self, ui: &mut egui::Ui, section: SectionId, text: &str) {
        let response = theme::heading(ui, text);
        if self.target == Some(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.add_space(24.0);
    }

    fn hero(&self, ui: &mut egui::Ui) {
        let profile = &self.app.portfolio.profile;
        let offset_y = self.app.page.scroll().offset_y();

        // Background blobs drift with the scroll offset
        let top = ui.cursor().min;
        let width = ui.available_width();
        let drift = layout::parallax(offset_y, 0.3, 160.0);
        ui.painter().circle_filled(
            egui::pos2(top.x + width - 140.0, top.y + 120.0 + drift),
            140.0,
            theme::PRIMARY.linear_multiply(0.08),
        );
        ui.painter().circle_filled(
            egui::pos2(top.x + 140.0, top.y + 420.0 - drift),
            140.0,
            theme::ACCENT.linear_multiply(0.08),
        );

        ui.add_space(48.0);
        let columns = self.layout.columns(2);
        ui.columns(columns, |columns| {
            let (text_ui, rest) = columns.split_at_mut(1);
            let text_ui = &mut text_ui[0];

            text_ui.label(
                egui::RichText::new(profile.eyebrow.to_uppercase())
                    .color(theme::PRIMARY)
                    .strong(),
            );
            text_ui.add_space(8.0);
            text_ui.label(egui::RichText::new(&profile.greeting).size(44.0).strong());
            text_ui.label(
                egui::RichText::new(&profile.name)
                    .size(48.0)
                    .strong()
                    .color(theme::PRIMARY),
            );
            text_ui.add_space(12.0);
            text_ui.label(egui::RichText::new(&profile.tagline).size(18.0).color(theme::MUTED));
            theme::muted(text_ui, &profile.summary);
            text_ui.add_space(16.0);

            text_ui.horizontal_wrapped(|ui| {
                let work = egui::Button::new(
                    egui::RichText::new("View My Work →").color(egui::Color32::BLACK),
                )
                .fill(theme::PRIMARY);
                if ui.add(work).clicked() {
                    self.navigate(SectionId::Projects);
                }

                let contact = egui::Button::new(egui::RichText::new("Contact Me").color(theme::ACCENT))
                    .stroke(egui::Stroke::new(2.0, theme::ACCENT));
                if ui.add(contact).clicked() {
                    self.navigate(SectionId::Contact);
                }
            });

            let image_ui = match rest.first_mut() {
                Some(ui) => ui,
                None => text_ui,
            };
            self.profile_image(image_ui);
        });

        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            let alpha = layout::indicator_alpha(offset_y);
            let chevron = egui::RichText::new("⌄")
                .size(32.0)
                .color(theme::MUTED.linear_multiply(alpha));
            if ui.add(egui::Button::new(chevron).frame(false)).clicked() {
                self.navigate(SectionId::About);
            }
        });
    }

    fn profile_image(&self, ui: &mut egui::Ui) {
        let image = &self.app.portfolio.profile.image;

        ui.vertical_centered(|ui| {
            theme::card(ui, "profile_image", theme::PRIMARY, |ui| {
                ui.set_min_size(egui::vec2(240.0, 240.0));
                ui.vertical_centered(|ui| {
                    ui.add_space(56.0);
                    ui.label(egui::RichText::new("👤").size(72.0));
                    ui.label(egui::RichText::new(&image.alt).strong());
                    ui.label(egui::RichText::new(&image.path).small().color(theme::MUTED));
                });
            });
        });
    }

    fn about(&self, ui: &mut egui::Ui) {
        let about = &self.app.portfolio.about;
        self.section_heading(ui, SectionId::About, &about.heading);

        ui.columns(self.layout.columns(2), |columns| {
            let (story, rest) = columns.split_at_mut(1);
            let story = &mut story[0];

            for paragraph in &about.paragraphs {
                story.label(egui::RichText::new(paragraph).size(16.0).color(theme::MUTED));
                story.add_space(12.0);
            }

            if !about.journey.is_empty() {
                story.label(
                    egui::RichText::new("MY JOURNEY")
                        .small()
                        .strong()
                        .color(theme::PRIMARY),
                );
                for milestone in &about.journey {
                    story.horizontal(|ui| {
                        ui.label(egui::RichText::new("●").color(theme::ACCENT));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&milestone.title).strong());
                            theme::muted(ui, &milestone.detail);
                        });
                    });
                }
            }

            let details = match rest.first_mut() {
                Some(ui) => ui,
                None => story,
            };
            for (idx, education) in about.education.iter().enumerate() {
                education_card(details, idx, education);
            }

            if !about.stats.is_empty() {
                details.columns(about.stats.len(), |stat_columns| {
                    for (stat, ui) in about.stats.iter().zip(stat_columns.iter_mut()) {
                        let color = theme::accent_color(stat.accent);
                        theme::card(ui, ("stat", &stat.label), color, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(&stat.value)
                                        .size(30.0)
                                        .strong()
                                        .color(color),
                                );
                                theme::muted(ui, &stat.label);
                            });
                        });
                    }
                });
            }
        });
    }

    fn skills(&self, ui: &mut egui::Ui) {
        let skills = &self.app.portfolio.skills;
        if skills.groups.is_empty() {
            return;
        }

        // Not a navigation target
        theme::heading(ui, &skills.heading);
        ui.add_space(24.0);

        let count = self.layout.columns(3);
        ui.columns(count, |columns| {
            for (idx, group) in skills.groups.iter().enumerate() {
                let ui = &mut columns[idx % count];
                let color = theme::accent_color(group.accent);

                theme::card(ui, ("skill_group", idx), color, |ui| {
                    ui.label(egui::RichText::new(&group.icon).size(32.0));
                    ui.label(egui::RichText::new(&group.title).size(17.0).strong());
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for skill in &group.skills {
                            theme::chip(ui, skill, color);
                        }
                    });
                });
            }
        });
    }

    fn experience(&self, ui: &mut egui::Ui) {
        let experience = &self.app.portfolio.experience;
        self.section_heading(ui, SectionId::Experience, &experience.heading);

        let count = self.layout.columns(2);
        ui.columns(count, |columns| {
            for (idx, entry) in experience.entries.iter().enumerate() {
                let ui = &mut columns[idx % count];
                let color = theme::accent_color(entry.accent);

                theme::card(ui, ("experience", idx), color, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(entry.category.to_uppercase())
                                    .small()
                                    .strong()
                                    .color(color),
                            );
                            ui.label(egui::RichText::new(&entry.title).size(22.0).strong());
                            ui.label(egui::RichText::new(&entry.subtitle).size(16.0).color(color));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.label(egui::RichText::new(&entry.icon).size(32.0));
                        });
                    });
                    ui.add_space(8.0);
                    theme::muted(ui, &entry.organization);
                    ui.label(egui::RichText::new(&entry.date).small().color(theme::ACCENT));

                    if let Some(description) = &entry.description {
                        ui.add_space(8.0);
                        theme::muted(ui, description);
                    }
                    for highlight in &entry.highlights {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new("✓").color(theme::PRIMARY));
                            theme::muted(ui, highlight);
                        });
                    }
                });
            }
        });
    }

    fn projects(&self, ui: &mut egui::Ui) {
        let projects = &self.app.portfolio.projects;
        self.section_heading(ui, SectionId::Projects, &projects.heading);

        let count = self.layout.columns(2);
        ui.columns(count, |columns| {
            for (idx, project) in projects.entries.iter().enumerate() {
                let ui = &mut columns[idx % count];

                theme::card(ui, ("project", idx), theme::PRIMARY, |ui| {
                    egui::Frame::none()
                        .fill(theme::BORDER)
                        .rounding(10.0)
                        .show(ui, |ui| {
                            ui.set_min_size(egui::vec2(ui.available_width(), 160.0));
                            ui.centered_and_justified(|ui| {
                                ui.label(
                                    egui::RichText::new(&project.image_query)
                                        .small()
                                        .color(theme::MUTED),
                                );
                            });
                        });
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&project.title).size(19.0).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new("↗").color(theme::MUTED));
                        });
                    });
                    theme::muted(ui, &project.description);
                    ui.add_space(8.0);
                    theme::chip(ui, &project.status, theme::PRIMARY);
                });
            }
        });

        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            if let Some(note) = &projects.note {
                ui.label(egui::RichText::new(note).size(16.0).color(theme::MUTED));
                ui.add_space(12.0);
            }
            let button = egui::Button::new(
                egui::RichText::new("Want to discuss a project? Get in touch →")
                    .color(egui::Color32::BLACK),
            )
            .fill(theme::PRIMARY);
            if ui.add(button).clicked() {
                self.navigate(SectionId::Contact);
            }
        });
    }

    fn contact(&self, ui: &mut egui::Ui) {
        let contact = &self.app.portfolio.contact;

        ui.vertical_centered(|ui| {
            self.section_heading(ui, SectionId::Contact, &contact.heading);
            ui.label(egui::RichText::new(&contact.blurb).size(18.0).color(theme::MUTED));
        });
        ui.add_space(32.0);

        if !contact.cards.is_empty() {
            let count = self.layout.columns(contact.cards.len().min(3));
            ui.columns(count, |columns| {
                for (idx, card) in contact.cards.iter().enumerate() {
                    let ui = &mut columns[idx % count];

                    theme::card(ui, ("contact", idx), theme::ACCENT, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(card.kind.icon()).size(32.0));
                            ui.label(egui::RichText::new(&card.label).size(17.0).strong());
                            ui.hyperlink_to(card.value.as_str(), &card.href);
                        });
                    });
                }
            });
        }

        ui.add_space(32.0);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for social in &contact.socials {
                    ui.hyperlink_to(
                        format!("{} {}", social.kind.icon(), social.label),
                        &social.href,
                    );
                }
            });
            ui.add_space(12.0);
            theme::muted(ui, &contact.footer);
        });
    }
}

fn education_card(ui: &mut egui::Ui, idx: usize, education: &Education) {
    theme::card(ui, ("education", idx), theme::PRIMARY, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&education.degree)
                        .size(20.0)
                        .strong()
                        .color(theme::PRIMARY),
                );
                ui.label(egui::RichText::new(&education.institution).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.label(egui::RichText::new(&education.icon).size(30.0));
            });
        });

        if let Some(period) = &education.period {
            ui.label(egui::RichText::new(period).small().color(theme::ACCENT));
        }

        if !education.facts.is_empty() {
            ui.add_space(8.0);
            ui.push_id(idx, |ui| facts_table(ui, &education.facts));
        }
    });
}

fn facts_table(ui: &mut egui::Ui, facts: &[Fact]) {
    TableBuilder::new(ui)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::remainder())
        .body(|mut body| {
            for fact in facts {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        theme::muted(ui, &fact.label);
                    });
                    row.col(|ui| {
                        let value = egui::RichText::new(&fact.value).strong();
                        let value = if fact.emphasized {
                            value.color(theme::ACCENT)
                        } else {
                            value
                        };
                        ui.label(value);
                    });
                });
            }
        });
}
