//! Character-select screen shown before the portfolio

use super::App;
use crate::i18n::{tr, Text};
use crate::theme;
use crate::types::Theme;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_selection(&mut self, ctx: &egui::Context) {
        let lang = self.state.lang;
        let mut chosen: Option<Theme> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::SELECT_BG))
            .show(ctx, |ui| {
                let full = ui.max_rect();
                let half_w = full.width() / 2.0;

                for (i, persona) in [Theme::Coffee, Theme::Hardware].into_iter().enumerate() {
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(full.left() + half_w * i as f32, full.top()),
                        egui::vec2(half_w, full.height()),
                    );
                    let response = ui.interact(
                        rect,
                        ui.id().with(("persona", i)),
                        egui::Sense::click(),
                    );
                    if self.persona_card(ui, rect, persona, response.hovered()) || response.clicked() {
                        chosen = Some(persona);
                    }
                }

                // Divider and VS badge
                let mid = full.center().x;
                ui.painter().line_segment(
                    [egui::pos2(mid, full.top()), egui::pos2(mid, full.bottom())],
                    egui::Stroke::new(theme::STROKE_DEFAULT, theme::SELECT_DIVIDER),
                );
                let vs_rect = egui::Rect::from_center_size(full.center(), egui::vec2(64.0, 40.0));
                ui.painter().rect_filled(vs_rect, theme::RADIUS_SMALL, egui::Color32::WHITE);
                ui.painter().text(
                    vs_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    tr(Text::Versus, lang, Theme::Coffee),
                    egui::FontId::proportional(theme::FONT_TITLE),
                    egui::Color32::BLACK,
                );

                // Language pill, top-left
                let pill_rect = egui::Rect::from_min_size(
                    full.min + egui::vec2(24.0, 24.0),
                    egui::vec2(120.0, 32.0),
                );
                ui.scope_builder(egui::UiBuilder::new().max_rect(pill_rect), |ui| {
                    let p = theme::palette(Theme::Hardware);
                    if components::pill_button(ui, p, icons::GLOBE, lang.code()).clicked() {
                        self.state.toggle_lang();
                    }
                });
            });

        if let Some(persona) = chosen {
            self.state.start_portfolio(persona);
        }
    }

    /// Paint one half of the selection screen. Returns true if its select
    /// button was pressed.
    fn persona_card(&self, ui: &mut egui::Ui, rect: egui::Rect, persona: Theme, hovered: bool) -> bool {
        let lang = self.state.lang;
        let p = theme::palette(persona);
        let painter = ui.painter_at(rect);

        let glow = if hovered { 70 } else { 35 };
        painter.rect_filled(rect, 0.0, theme::with_alpha(p.accent, glow));

        let (title, role, icon) = match persona {
            Theme::Coffee => (tr(Text::Barista, lang, persona), "JAVA BACKEND DEVELOPER", icons::COFFEE),
            Theme::Hardware => (
                tr(Text::Architect, lang, persona),
                "EMBEDDED SYSTEMS ENGINEER",
                icons::CPU,
            ),
        };

        let center = rect.center();
        let ring_r = if hovered { 66.0 } else { 60.0 };
        let icon_center = center - egui::vec2(0.0, 120.0);
        if hovered {
            painter.circle_filled(icon_center, ring_r, p.accent);
        }
        painter.circle_stroke(icon_center, ring_r, egui::Stroke::new(4.0, p.accent));
        painter.text(
            icon_center,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(64.0),
            if hovered { p.on_accent } else { p.accent },
        );

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            title.to_uppercase(),
            egui::FontId::proportional(theme::FONT_DISPLAY),
            egui::Color32::from_rgb(0xfd, 0xf6, 0xe3),
        );
        painter.text(
            center + egui::vec2(0.0, 44.0),
            egui::Align2::CENTER_CENTER,
            role,
            egui::FontId::proportional(theme::FONT_TITLE),
            p.accent,
        );

        let button_rect =
            egui::Rect::from_center_size(center + egui::vec2(0.0, 120.0), egui::vec2(240.0, 44.0));
        let mut pressed = false;
        ui.scope_builder(egui::UiBuilder::new().max_rect(button_rect), |ui| {
            let button = egui::Button::new(
                egui::RichText::new(tr(Text::SelectCharacter, lang, persona))
                    .strong()
                    .color(p.on_accent),
            )
            .fill(p.accent)
            .corner_radius(0.0)
            .min_size(button_rect.size());
            pressed = ui.add(button).clicked();
        });
        pressed
    }
}
