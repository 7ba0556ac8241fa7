//! Reusable UI components
//!
//! Standalone widgets shared by the selection screen, the portfolio
//! sections and the project modal.

use crate::theme::{self, Palette};
use crate::types::{QuestLevel, SkillLevel, Theme};
use eframe::egui;
use egui_phosphor::regular as icons;

/// Section title prefix for the active persona
pub fn section_title(theme: Theme, title: &str) -> String {
    match theme {
        Theme::Coffee => format!("// {}", title),
        Theme::Hardware => format!("0x_{}", title),
    }
}

/// Large section heading followed by a hairline that fills the row
pub fn section_header(ui: &mut egui::Ui, p: &Palette, theme: Theme, title: &str) {
    ui.add_space(theme::SPACING_SECTION);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(section_title(theme, &title.to_uppercase()))
                .size(theme::FONT_HERO)
                .strong()
                .color(if theme.is_coffee() { p.text_secondary } else { p.accent }),
        );
        let avail = ui.available_rect_before_wrap();
        let y = avail.center().y;
        ui.painter().line_segment(
            [egui::pos2(avail.left() + 8.0, y), egui::pos2(avail.right(), y)],
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::with_alpha(p.accent, 80)),
        );
    });
    ui.add_space(theme::SPACING_XL);
}

/// Sliding coffee/chip switch. Returns true when clicked.
pub fn theme_toggle(ui: &mut egui::Ui, current: Theme) -> bool {
    let p = theme::palette(current);
    let size = egui::vec2(80.0, 40.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let radius = rect.height() / 2.0;
        painter.rect(
            rect,
            radius,
            p.bg_base,
            egui::Stroke::new(theme::STROKE_THICK, p.accent),
            egui::StrokeKind::Inside,
        );

        // Faint background icons on both ends
        let dim = theme::with_alpha(p.text_muted, 70);
        painter.text(
            egui::pos2(rect.left() + 18.0, rect.center().y),
            egui::Align2::CENTER_CENTER,
            icons::COFFEE,
            egui::FontId::proportional(12.0),
            dim,
        );
        painter.text(
            egui::pos2(rect.right() - 18.0, rect.center().y),
            egui::Align2::CENTER_CENTER,
            icons::CPU,
            egui::FontId::proportional(12.0),
            dim,
        );

        // Knob slides between the two ends
        let t = ui.ctx().animate_bool(response.id, !current.is_coffee());
        let knob_r = radius - 6.0;
        let x = egui::lerp(
            (rect.left() + 6.0 + knob_r)..=(rect.right() - 6.0 - knob_r),
            t,
        );
        let center = egui::pos2(x, rect.center().y);
        painter.circle_filled(center, knob_r, p.accent);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            if current.is_coffee() { icons::COFFEE } else { icons::CPU },
            egui::FontId::proportional(14.0),
            p.on_accent,
        );
    }

    response.clicked()
}

/// Rounded outlined pill button (language switch, back)
pub fn pill_button(ui: &mut egui::Ui, p: &Palette, icon: &str, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(format!("{}  {}", icon, label))
                .size(theme::FONT_SMALL)
                .strong()
                .color(p.text_primary),
        )
        .fill(theme::with_alpha(p.accent, 20))
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::with_alpha(p.accent, 120)))
        .corner_radius(theme::RADIUS_PILL),
    )
}

/// Small tech tag
pub fn tech_chip(ui: &mut egui::Ui, p: &Palette, text: &str) {
    egui::Frame::new()
        .fill(theme::with_alpha(p.accent, 24))
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::with_alpha(p.accent, 90)))
        .corner_radius(theme::RADIUS_SMALL)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(theme::FONT_CAPTION)
                    .monospace()
                    .color(p.text_secondary),
            );
        });
}

/// Bullet line with a themed marker
pub fn bullet(ui: &mut egui::Ui, p: &Palette, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("▹").color(p.accent));
        ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(p.text_secondary));
    });
}

/// Colored difficulty badge
pub fn quest_badge(ui: &mut egui::Ui, level: QuestLevel) {
    let color = theme::quest_level_color(level);
    egui::Frame::new()
        .fill(theme::with_alpha(color, 30))
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, color))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{} {}", icons::STAR, level.label().to_uppercase()))
                    .size(theme::FONT_CAPTION)
                    .strong()
                    .color(color),
            );
        });
}

/// One RPG stat tile: icon + caption on top, value below
pub fn stat_tile(ui: &mut egui::Ui, p: &Palette, icon: &str, caption: &str, value: &str) {
    egui::Frame::new()
        .fill(theme::with_alpha(p.accent, 14))
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, p.border))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).color(p.accent));
                ui.label(
                    egui::RichText::new(caption.to_uppercase())
                        .size(theme::FONT_CAPTION)
                        .strong()
                        .color(p.text_muted),
                );
            });
            ui.label(egui::RichText::new(value).size(theme::FONT_HEADING).strong());
        });
}

/// Four-pip proficiency meter
pub fn level_meter(ui: &mut egui::Ui, p: &Palette, level: SkillLevel) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(4.0 * 14.0, 6.0), egui::Sense::hover());
    let painter = ui.painter();
    for i in 0..4 {
        let pip = egui::Rect::from_min_size(
            egui::pos2(rect.left() + i as f32 * 14.0, rect.top()),
            egui::vec2(11.0, 6.0),
        );
        let fill = if i < level.pips() {
            p.accent
        } else {
            theme::with_alpha(p.text_muted, 50)
        };
        painter.rect_filled(pip, theme::RADIUS_SMALL, fill);
    }
}

/// Carousel position dots. Returns the index clicked, if any.
pub fn carousel_dots(ui: &mut egui::Ui, p: &Palette, count: usize, active: usize) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for i in 0..count {
            let width = if i == active { 28.0 } else { 10.0 };
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(width, 10.0), egui::Sense::click());
            let base = if i == active {
                p.accent
            } else {
                theme::with_alpha(p.text_muted, 90)
            };
            let (fill, rect) = theme::button_visual(&response, base, rect);
            ui.painter().rect_filled(rect, 5.0, fill);
            if response.clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}

/// Full-width progress bar at 100%, drawn in the accent color
pub fn completion_bar(ui: &mut egui::Ui, p: &Palette) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 6.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, p.accent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title_prefix() {
        assert_eq!(section_title(Theme::Coffee, "RESUMO"), "// RESUMO");
        assert_eq!(section_title(Theme::Hardware, "SUMMARY"), "0x_SUMMARY");
    }
}
