//! Portfolio page: header, summary with the assistant, experience timeline,
//! skill tree and footer.

use super::images::ImageSlot;
use super::App;
use crate::content::{self, SkillItem};
use crate::i18n::{tr, Text};
use crate::theme;
use crate::ui::components;
use crate::utils::current_year;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_header(&mut self, ctx: &egui::Context) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;
        let info = content::personal_info();

        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(p.bg_base)
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, p.border))
                    .inner_margin(egui::Margin::symmetric(24, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if components::pill_button(ui, p, icons::ARROW_LEFT, tr(Text::BackToSelection, lang, t))
                        .clicked()
                    {
                        self.state.back_to_selection();
                    }
                    ui.add_space(theme::SPACING_LG);
                    ui.label(
                        egui::RichText::new(if t.is_coffee() { icons::COFFEE } else { icons::CPU })
                            .size(theme::FONT_TITLE)
                            .color(p.accent),
                    );
                    ui.label(egui::RichText::new(info.name).size(theme::FONT_HEADING).strong());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if components::theme_toggle(ui, t) {
                            self.state.toggle_theme();
                        }
                        ui.label(
                            egui::RichText::new(tr(Text::ThemeMode, lang, t).to_uppercase())
                                .size(theme::FONT_CAPTION)
                                .strong()
                                .color(p.accent),
                        );
                        ui.add_space(theme::SPACING_MD);
                        if components::pill_button(ui, p, icons::GLOBE, tr(Text::LanguageName, lang, t))
                            .clicked()
                        {
                            self.state.toggle_lang();
                        }
                    });
                });
            });
    }

    pub fn render_hero(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;
        let info = content::personal_info();

        ui.add_space(theme::SPACING_SECTION);
        ui.label(
            egui::RichText::new(info.name)
                .size(theme::FONT_DISPLAY)
                .strong()
                .color(p.text_primary),
        );
        ui.label(
            egui::RichText::new(if t.is_coffee() {
                "JAVA BACKEND DEVELOPER"
            } else {
                "EMBEDDED SYSTEMS ENGINEER"
            })
            .size(theme::FONT_TITLE)
            .color(p.accent),
        );
        ui.add_space(theme::SPACING_LG);
        ui.horizontal_wrapped(|ui| {
            if ui
                .add(theme::button_accent(p, format!("{}  {}", icons::ENVELOPE, tr(Text::Contact, lang, t))))
                .clicked()
            {
                self.open_link(&format!("mailto:{}", info.email));
            }
            if ui.add(theme::button(p, format!("{}  GitHub", icons::GITHUB_LOGO))).clicked() {
                self.open_link(info.github);
            }
            if ui.add(theme::button(p, format!("{}  LinkedIn", icons::LINKEDIN_LOGO))).clicked() {
                self.open_link(info.linkedin);
            }
            ui.label(
                egui::RichText::new(format!("{}  {}", icons::PHONE, info.phone))
                    .size(theme::FONT_LABEL)
                    .color(p.text_muted),
            );
        });
    }

    pub fn render_summary(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;
        let info = content::personal_info();

        components::section_header(ui, p, t, tr(Text::Summary, lang, t));
        ui.label(
            egui::RichText::new(*info.summary_for(t).get(lang))
                .size(theme::FONT_HEADING)
                .color(p.text_secondary),
        );
        ui.add_space(theme::SPACING_XL);

        theme::card_frame(p).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!(
                    "{}  {}:",
                    icons::SPARKLE,
                    tr(Text::AssistantLabel, lang, t)
                ))
                .size(theme::FONT_HEADING)
                .strong()
                .color(p.accent),
            );
            ui.add_space(theme::SPACING_MD);

            let mut submit = false;
            ui.horizontal(|ui| {
                let loading = self.state.is_loading;
                let button_w = 56.0;
                theme::input_frame(p).show(ui, |ui| {
                    let edit = ui.add_enabled(
                        !loading,
                        egui::TextEdit::singleline(&mut self.state.question)
                            .hint_text(tr(Text::AssistantPlaceholder, lang, t))
                            .frame(false)
                            .desired_width(ui.available_width() - button_w - theme::SPACING_XL),
                    );
                    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                });
                let can_send = !loading && !self.state.question.trim().is_empty();
                let label = if loading { icons::HOURGLASS } else { icons::PAPER_PLANE_RIGHT };
                let send = ui.add_enabled(
                    can_send,
                    theme::button_accent(p, label).min_size(egui::vec2(button_w, theme::BUTTON_HEIGHT_LARGE)),
                );
                if send.clicked() {
                    submit = true;
                }
                if loading {
                    ui.add(egui::Spinner::new().color(p.accent));
                }
            });
            if submit {
                self.submit_question(ctx);
            }

            if !self.state.answer.is_empty() {
                ui.add_space(theme::SPACING_MD);
                egui::Frame::new()
                    .fill(theme::with_alpha(p.accent, 16))
                    .corner_radius(theme::RADIUS_DEFAULT)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        let color = if self.state.answer_is_error {
                            theme::STATUS_ERROR
                        } else {
                            p.text_primary
                        };
                        ui.label(
                            egui::RichText::new(&self.state.answer)
                                .size(theme::FONT_BODY)
                                .italics()
                                .color(color),
                        );
                    });
            }
        });
    }

    pub fn render_experience(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;

        components::section_header(ui, p, t, tr(Text::Path, lang, t));
        for exp in content::experiences() {
            ui.horizontal(|ui| {
                // Timeline rail
                let (rail, _) = ui.allocate_exact_size(egui::vec2(16.0, 120.0), egui::Sense::hover());
                ui.painter().line_segment(
                    [rail.center_top(), rail.center_bottom()],
                    egui::Stroke::new(theme::STROKE_THICK, theme::with_alpha(p.accent, 90)),
                );
                ui.painter()
                    .circle_filled(rail.center_top() + egui::vec2(0.0, 10.0), 6.0, p.accent);

                ui.vertical(|ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(*exp.role.get(lang))
                                .size(theme::FONT_TITLE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(format!("@ {}", exp.company))
                                .size(theme::FONT_TITLE)
                                .color(p.accent),
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}  {}", icons::CALENDAR, exp.period.get(lang)))
                                .size(theme::FONT_SMALL)
                                .color(p.text_muted),
                        );
                        ui.label(
                            egui::RichText::new(format!("{}  {}", icons::MAP_PIN, exp.location))
                                .size(theme::FONT_SMALL)
                                .color(p.text_muted),
                        );
                    });
                    ui.add_space(theme::SPACING_SM);
                    for line in exp.description.get(lang).iter() {
                        components::bullet(ui, p, line);
                    }
                });
            });
            ui.add_space(theme::SPACING_XL);
        }
    }

    pub fn render_skills(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;

        components::section_header(ui, p, t, tr(Text::TechStack, lang, t));

        let mut popover_pos: Option<egui::Pos2> = None;
        for category in content::skills_for(t) {
            theme::card_frame(p).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    egui::RichText::new(category.category.get(lang).to_uppercase())
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(p.accent),
                );
                ui.add_space(theme::SPACING_MD);
                ui.horizontal_wrapped(|ui| {
                    for item in category.items {
                        let open = self.state.is_skill_open(item.name);
                        let response = self.skill_tile(ui, ctx, item, open);
                        if response.clicked() {
                            self.state.toggle_skill(item.name);
                        }
                        if self.state.is_skill_open(item.name) {
                            popover_pos = Some(response.rect.left_bottom() + egui::vec2(0.0, 6.0));
                        }
                    }
                });
            });
            ui.add_space(theme::SPACING_LG);
        }

        let open_item = self
            .state
            .active_skill
            .and_then(|name| content::find_skill(t, name));
        if let (Some(item), Some(pos)) = (open_item, popover_pos) {
            self.render_skill_popover(ctx, item, pos);
        }
    }

    fn skill_tile(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        item: &'static SkillItem,
        open: bool,
    ) -> egui::Response {
        let p = self.palette();
        let size = egui::vec2(120.0, 96.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let base = if open {
            theme::with_alpha(p.accent, 40)
        } else {
            p.bg_input
        };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        let stroke_color = if open { p.accent } else { p.border };
        ui.painter().rect(
            draw_rect,
            theme::RADIUS_LARGE,
            fill,
            egui::Stroke::new(theme::STROKE_MEDIUM, stroke_color),
            egui::StrokeKind::Inside,
        );

        let icon_rect = egui::Rect::from_center_size(
            draw_rect.center() - egui::vec2(0.0, 12.0),
            egui::vec2(theme::SKILL_ICON_SIZE, theme::SKILL_ICON_SIZE),
        );
        match self.image(ctx, item.icon) {
            ImageSlot::Ready(tex) => {
                egui::Image::new(egui::load::SizedTexture::new(tex.id(), icon_rect.size()))
                    .paint_at(ui, icon_rect);
            }
            ImageSlot::Loading => {
                egui::Spinner::new()
                    .color(p.text_muted)
                    .paint_at(ui, icon_rect.shrink(8.0));
            }
            ImageSlot::Failed => {
                ui.painter().text(
                    icon_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    icons::CODE,
                    egui::FontId::proportional(28.0),
                    p.accent,
                );
            }
        }

        ui.painter().text(
            egui::pos2(draw_rect.center().x, draw_rect.bottom() - 16.0),
            egui::Align2::CENTER_CENTER,
            item.name,
            egui::FontId::proportional(theme::FONT_LABEL),
            p.text_primary,
        );
        response
    }

    fn render_skill_popover(&mut self, ctx: &egui::Context, item: &'static SkillItem, pos: egui::Pos2) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;

        egui::Area::new(egui::Id::new("skill_popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                theme::modal_frame(p).show(ui, |ui| {
                    ui.set_width(theme::POPOVER_WIDTH);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(item.name).size(theme::FONT_HEADING).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(egui::Button::new(icons::X).frame(false))
                                .clicked()
                            {
                                self.state.close_skill();
                            }
                        });
                    });
                    if let Some(level) = item.level {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}: {}",
                                    tr(Text::StatLevel, lang, t),
                                    level.label()
                                ))
                                .size(theme::FONT_CAPTION)
                                .strong()
                                .color(p.accent),
                            );
                            components::level_meter(ui, p, level);
                        });
                    }
                    ui.add_space(theme::SPACING_SM);
                    if let Some(details) = &item.details {
                        for detail in details.get(lang).iter() {
                            components::bullet(ui, p, detail);
                        }
                    }
                });
            });
    }

    pub fn render_footer(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;
        let info = content::personal_info();

        ui.add_space(theme::SPACING_SECTION * 1.5);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(tr(Text::FooterCollab, lang, t))
                    .size(theme::FONT_HERO)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(tr(Text::FooterDiscuss, lang, t))
                    .size(theme::FONT_BODY)
                    .color(p.text_muted),
            );
            ui.add_space(theme::SPACING_XL);
            if ui
                .add(
                    theme::button_accent(p, format!("{}  {}", icons::ENVELOPE, info.email))
                        .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT_LARGE)),
                )
                .clicked()
            {
                self.open_link(&format!("mailto:{}", info.email));
            }
            ui.add_space(theme::SPACING_SECTION);
            ui.label(
                egui::RichText::new(format!(
                    "© {} {} · {}",
                    current_year(),
                    info.name,
                    tr(Text::FooterNote, lang, t)
                ))
                .size(theme::FONT_CAPTION)
                .color(p.text_muted),
            );
            ui.add_space(theme::SPACING_XL);
        });
    }
}
