//! Project detail modal with image gallery

use super::images::ImageSlot;
use super::App;
use crate::content::Project;
use crate::i18n::{tr, Text};
use crate::theme;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_project_modal(&mut self, ctx: &egui::Context) {
        let Some(project) = self.state.modal_project() else {
            return;
        };
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;

        let mut close = false;
        let modal_response = egui::Modal::new(egui::Id::new("project_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame(p))
            .show(ctx, |ui| {
                ui.set_width(theme::MODAL_WIDTH);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(project.title)
                            .size(theme::FONT_HERO)
                            .strong()
                            .color(p.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());
                        let color = if response.hovered() {
                            ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, p.bg_elevated);
                            theme::STATUS_ERROR
                        } else {
                            p.text_muted
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            icons::X,
                            egui::FontId::proportional(20.0),
                            color,
                        );
                        if response.clicked() {
                            close = true;
                        }
                    });
                });
                ui.add_space(theme::SPACING_MD);

                self.gallery(ui, ctx, project);

                egui::ScrollArea::vertical()
                    .max_height(260.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.add_space(theme::SPACING_LG);
                        let body = match &project.long_description {
                            Some(long) => long.get(lang).to_string(),
                            None => project.description.get(lang).join(" "),
                        };
                        ui.label(
                            egui::RichText::new(body)
                                .size(theme::FONT_BODY)
                                .color(p.text_secondary),
                        );

                        ui.add_space(theme::SPACING_LG);
                        ui.label(
                            egui::RichText::new(tr(Text::ModalTechStack, lang, t).to_uppercase())
                                .size(theme::FONT_LABEL)
                                .strong()
                                .color(p.accent),
                        );
                        ui.horizontal_wrapped(|ui| {
                            for tech in project.tech {
                                components::tech_chip(ui, p, tech);
                            }
                        });
                    });

                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    if let Some(url) = project.github_url {
                        if ui
                            .add(theme::button_accent(
                                p,
                                format!("{}  {}", icons::GITHUB_LOGO, tr(Text::ModalGithub, lang, t)),
                            ))
                            .clicked()
                        {
                            self.open_link(url);
                        }
                    }
                    if let Some(url) = project.live_url {
                        if ui
                            .add(theme::button(
                                p,
                                format!("{}  {}", icons::ARROW_SQUARE_OUT, tr(Text::ModalLive, lang, t)),
                            ))
                            .clicked()
                        {
                            self.open_link(url);
                        }
                    }
                });
            });

        if close || modal_response.should_close() {
            self.state.close_modal();
        }
    }

    fn gallery(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, project: &'static Project) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), theme::GALLERY_HEIGHT),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, theme::RADIUS_LARGE, p.bg_input);

        let Some(url) = project.images.get(self.state.image_index).copied() else {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{}  {}", icons::IMAGE, tr(Text::NoImages, lang, t)),
                egui::FontId::proportional(theme::FONT_HEADING),
                p.text_muted,
            );
            return;
        };

        match self.image(ctx, url) {
            ImageSlot::Ready(tex) => {
                // Fit inside the frame, preserving aspect ratio
                let size = tex.size_vec2();
                let scale = (rect.width() / size.x).min(rect.height() / size.y);
                let draw = egui::Rect::from_center_size(rect.center(), size * scale);
                egui::Image::new(egui::load::SizedTexture::new(tex.id(), draw.size()))
                    .corner_radius(theme::RADIUS_LARGE)
                    .paint_at(ui, draw);
            }
            ImageSlot::Loading => {
                egui::Spinner::new()
                    .size(32.0)
                    .color(p.accent)
                    .paint_at(ui, egui::Rect::from_center_size(rect.center(), egui::vec2(32.0, 32.0)));
            }
            ImageSlot::Failed => {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    icons::IMAGE_BROKEN,
                    egui::FontId::proportional(48.0),
                    p.text_muted,
                );
            }
        }

        let count = project.images.len();
        if count < 2 {
            return;
        }

        let side = egui::vec2(40.0, 40.0);
        let left = egui::Rect::from_center_size(rect.left_center() + egui::vec2(32.0, 0.0), side);
        let right = egui::Rect::from_center_size(rect.right_center() - egui::vec2(32.0, 0.0), side);
        for (area, icon, forward) in [(left, icons::CARET_LEFT, false), (right, icons::CARET_RIGHT, true)] {
            let response = ui.interact(area, ui.id().with(("gallery_nav", forward)), egui::Sense::click());
            let (fill, draw) =
                theme::button_visual(&response, egui::Color32::from_black_alpha(140), area);
            ui.painter().circle_filled(draw.center(), draw.width() / 2.0, fill);
            ui.painter().text(
                draw.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
            if response.clicked() {
                if forward {
                    self.state.next_image();
                } else {
                    self.state.prev_image();
                }
            }
        }

        // Counter badge, bottom-right
        let counter = format!("{} / {}", self.state.image_index + 1, count);
        let badge = egui::Rect::from_min_size(
            rect.right_bottom() - egui::vec2(72.0, 36.0),
            egui::vec2(60.0, 24.0),
        );
        ui.painter()
            .rect_filled(badge, theme::RADIUS_PILL, egui::Color32::from_black_alpha(160));
        ui.painter().text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            counter,
            egui::FontId::proportional(theme::FONT_SMALL),
            egui::Color32::WHITE,
        );
    }
}
