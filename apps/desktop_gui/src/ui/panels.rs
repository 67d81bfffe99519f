//! Page sections: hero, skills grid, experience timeline, project gallery,
//! contact form, and footer. Rendering only; all state lives on the app.

use chrono::Datelike;
use egui::{pos2, vec2, Align, Color32, Layout, Margin, RichText, Stroke};
use shared::domain::{IconKey, Skill};
use shared::protocol::{Experience, Project};

use crate::content;
use crate::ui::app::PortfolioApp;
use crate::ui::theme;
use crate::ui::widgets::{badge, initials, section_heading};

impl PortfolioApp {
    pub(crate) fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let page_width = ui.available_width().min(1080.0);
                    ui.vertical_centered(|ui| {
                        ui.set_width(page_width);
                        self.show_hero(ui);
                        self.show_skills(ui);
                        self.show_experiences(ui);
                        self.show_projects(ui);
                        self.show_contact(ui);
                        self.show_footer(ui);
                    });
                });
        });
    }

    pub(crate) fn show_bottom_bar(&mut self, ctx: &egui::Context) {
        if self.notice.is_none() && self.status.is_empty() {
            return;
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if let Some(notice) = self.notice.clone() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&notice.text).color(theme::TEXT_PRIMARY));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.notice = None;
                        }
                    });
                });
            } else {
                ui.horizontal_wrapped(|ui| {
                    ui.small("Status:");
                    ui.small(RichText::new(&self.status).weak());
                });
            }
        });
    }

    fn show_hero(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.settings.owner_name)
                    .strong()
                    .size(44.0)
                    .color(theme::TEXT_PRIMARY),
            );

            let cursor = if (self.tick / 10) % 2 == 0 { "|" } else { " " };
            ui.label(
                RichText::new(format!("{}{cursor}", self.typewriter.line()))
                    .size(24.0)
                    .color(theme::ACCENT),
            );

            ui.add_space(10.0);
            ui.label(
                RichText::new(&self.settings.tagline)
                    .size(16.0)
                    .color(theme::TEXT_MUTED),
            );

            ui.add_space(22.0);
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 260.0).max(0.0) / 2.0);
                let hire = egui::Button::new(RichText::new("\u{2709}  Hire Me").strong())
                    .fill(theme::ACCENT)
                    .min_size(vec2(120.0, 36.0));
                if ui.add(hire).clicked() {
                    self.scroll_to_contact = true;
                }
                ui.add_space(8.0);
                ui.hyperlink_to("\u{2B07}  Resume", &self.settings.resume_url);
            });
        });
    }

    fn show_skills(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        section_heading(ui, "\u{1F680} Technical Expertise");
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = vec2(12.0, 12.0);
            for skill in content::SKILLS {
                skill_card(ui, skill);
            }
        });
    }

    fn show_experiences(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        section_heading(ui, "Professional Journey");
        if self.experiences.is_empty() {
            // Not yet loaded, or the load failed: the section stays empty.
            return;
        }

        let top = ui.next_widget_position().y;
        let mut marker_ys = Vec::with_capacity(self.experiences.len());
        for (index, experience) in self.experiences.iter().enumerate() {
            marker_ys.push(ui.next_widget_position().y + 18.0);
            ui.columns(2, |columns| {
                let column = if index % 2 == 0 { 0 } else { 1 };
                experience_card(&mut columns[column], experience);
            });
            ui.add_space(20.0);
        }

        let bottom = ui.next_widget_position().y;
        let x = ui.max_rect().center().x;
        let painter = ui.painter();
        painter.line_segment(
            [pos2(x, top), pos2(x, bottom)],
            Stroke::new(2.0, theme::TIMELINE_LINE),
        );
        for y in marker_ys {
            painter.circle_filled(pos2(x, y), 5.0, theme::ACCENT);
        }
    }

    fn show_projects(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        section_heading(ui, "Featured Projects");
        if self.projects.is_empty() {
            return;
        }

        for chunk in self.projects.chunks(3) {
            ui.columns(3, |columns| {
                for (offset, project) in chunk.iter().enumerate() {
                    project_card(&mut columns[offset], project);
                }
            });
            ui.add_space(14.0);
        }
    }

    fn show_contact(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        let section = ui.scope(|ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(560.0);
                card_frame().show(ui, |ui| {
                    ui.label(
                        RichText::new("Let's Work Together")
                            .strong()
                            .size(22.0)
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new("Have a project in mind? Reach out and let's discuss!")
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(12.0);

                    let name_edit = egui::TextEdit::singleline(&mut self.form.name)
                        .id_salt("contact_name")
                        .hint_text("Your Name")
                        .desired_width(f32::INFINITY);
                    ui.add_sized([ui.available_width(), 34.0], name_edit);
                    ui.add_space(6.0);

                    let email_edit = egui::TextEdit::singleline(&mut self.form.email)
                        .id_salt("contact_email")
                        .hint_text("Your Email")
                        .desired_width(f32::INFINITY);
                    ui.add_sized([ui.available_width(), 34.0], email_edit);
                    ui.add_space(6.0);

                    let text_edit = egui::TextEdit::multiline(&mut self.form.text)
                        .id_salt("contact_text")
                        .hint_text("Project Details")
                        .desired_rows(5)
                        .desired_width(f32::INFINITY);
                    ui.add(text_edit);
                    ui.add_space(12.0);

                    let label = if self.submitting {
                        "Submitting..."
                    } else {
                        "Send Message"
                    };
                    let send = egui::Button::new(RichText::new(label).strong())
                        .fill(theme::ACCENT)
                        .min_size(vec2(ui.available_width(), 38.0));
                    if ui.add_enabled(!self.submitting, send).clicked() {
                        self.submit_contact_form();
                    }
                });
            });
        });

        if self.scroll_to_contact {
            section.response.scroll_to_me(Some(Align::Min));
            self.scroll_to_contact = false;
        }
    }

    fn show_footer(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.separator();
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            egui::Frame::NONE
                .fill(theme::ACCENT.gamma_multiply(0.35))
                .corner_radius(18.0)
                .inner_margin(Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(initials(&self.settings.owner_name))
                            .strong()
                            .size(15.0)
                            .color(theme::TEXT_PRIMARY),
                    );
                });
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(self.settings.owner_name.to_uppercase())
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(&self.settings.owner_role)
                        .size(12.0)
                        .color(theme::TEXT_MUTED),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.hyperlink_to("LinkedIn", &self.settings.linkedin_url);
                ui.hyperlink_to("GitHub", &self.settings.github_url);
            });
        });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.small(
                RichText::new(format!(
                    "\u{00A9} {} {}",
                    chrono::Local::now().year(),
                    self.settings.owner_name
                ))
                .weak(),
            );
        });
        ui.add_space(18.0);
    }
}

fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(Margin::symmetric(16, 14))
}

fn skill_card(ui: &mut egui::Ui, skill: &Skill) {
    egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(108.0);
            ui.set_height(86.0);
            ui.vertical_centered(|ui| {
                let (r, g, b) = skill.tint;
                ui.label(
                    RichText::new(skill.glyph)
                        .size(30.0)
                        .color(Color32::from_rgb(r, g, b)),
                );
                ui.add_space(4.0);
                ui.label(RichText::new(skill.name).size(12.0).color(theme::TEXT_PRIMARY));
            });
        });
}

fn experience_card(ui: &mut egui::Ui, experience: &Experience) {
    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            // Unknown icon keys render no marker at all.
            if let Some(icon) = IconKey::parse(&experience.icon_key) {
                ui.label(RichText::new(icon.glyph()).size(18.0).color(theme::ACCENT));
            }
            ui.label(
                RichText::new(&experience.title)
                    .strong()
                    .size(16.0)
                    .color(theme::TEXT_PRIMARY),
            );
        });
        ui.label(RichText::new(&experience.company).color(theme::TEXT_MUTED));
        ui.label(
            RichText::new(&experience.description)
                .size(13.0)
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for tech in &experience.tech {
                badge(ui, tech);
            }
        });
        ui.add_space(4.0);
        ui.label(
            RichText::new(&experience.date)
                .size(12.0)
                .strong()
                .color(theme::ACCENT),
        );
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project) {
    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(IconKey::Briefcase.glyph())
                    .size(18.0)
                    .color(theme::ACCENT),
            );
            ui.label(
                RichText::new(&project.name)
                    .strong()
                    .size(16.0)
                    .color(theme::TEXT_PRIMARY),
            );
        });
        ui.label(
            RichText::new(&project.description)
                .size(13.0)
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for skill in &project.skills {
                badge(ui, skill);
            }
        });
        if project.link.is_some() || project.repository.is_some() {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if let Some(link) = &project.link {
                    ui.hyperlink_to("Live", link);
                }
                if let Some(repository) = &project.repository {
                    ui.hyperlink_to("Source", repository);
                }
            });
        }
    });
}
