//! Quest Log: cyclic project carousel with RPG stat tiles

use super::App;
use crate::content::Project;
use crate::i18n::{tr, Text};
use crate::theme;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular as icons;

/// Width reserved for each side arrow
const ARROW_WIDTH: f32 = 44.0;

impl App {
    pub fn render_quest_log(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;

        components::section_header(ui, p, t, tr(Text::QuestLog, lang, t));

        let Some(project) = self.state.active_project() else {
            return;
        };
        let count = self.state.project_count();

        ui.horizontal(|ui| {
            let arrow = |ui: &mut egui::Ui, icon: &str| {
                ui.add_enabled(
                    count > 1,
                    theme::button(p, icon).min_size(egui::vec2(ARROW_WIDTH, 120.0)),
                )
                .clicked()
            };

            if arrow(ui, icons::CARET_LEFT) {
                self.state.prev_project();
            }

            let card_width = ui.available_width() - ARROW_WIDTH - theme::SPACING_MD;
            ui.allocate_ui(egui::vec2(card_width, 0.0), |ui| {
                ui.set_width(card_width);
                if self.project_card(ui, project) {
                    self.state.open_project_modal();
                }
            });

            if arrow(ui, icons::CARET_RIGHT) {
                self.state.next_project();
            }
        });

        ui.add_space(theme::SPACING_LG);
        ui.vertical_centered(|ui| {
            // Centre the dot row under the card
            let dots_width = (count.saturating_sub(1)) as f32 * 16.0 + 28.0;
            ui.allocate_ui(egui::vec2(dots_width, 10.0), |ui| {
                if let Some(i) =
                    components::carousel_dots(ui, p, count, self.state.active_project)
                {
                    self.state.select_project(i);
                }
            });
        });
    }

    /// Paint the active quest card. Returns true when inspect was pressed.
    fn project_card(&self, ui: &mut egui::Ui, project: &'static Project) -> bool {
        let p = self.palette();
        let lang = self.state.lang;
        let t = self.state.theme;
        let stats = &project.rpg_stats;

        theme::card_frame(p)
            .stroke(egui::Stroke::new(theme::STROKE_THICK, theme::with_alpha(p.accent, 140)))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    components::quest_badge(ui, stats.quest_level);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}  {}", icons::CALENDAR, project.date.get(lang)))
                                .size(theme::FONT_SMALL)
                                .color(p.text_muted),
                        );
                    });
                });
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(project.title)
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(p.text_primary),
                );
                ui.add_space(theme::SPACING_MD);
                for line in project.description.get(lang).iter() {
                    components::bullet(ui, p, line);
                }

                ui.add_space(theme::SPACING_MD);
                ui.horizontal_wrapped(|ui| {
                    for tech in project.tech {
                        components::tech_chip(ui, p, tech);
                    }
                });

                ui.add_space(theme::SPACING_LG);
                let tiles = [
                    (icons::TROPHY, Text::StatXp, *stats.xp_gained.get(lang)),
                    (icons::LIGHTNING, Text::StatMana, *stats.mana_cost.get(lang)),
                    (icons::SWORD, Text::StatDifficulty, stats.quest_level.label()),
                    (icons::SHIELD, Text::StatClass, *stats.tech_class.get(lang)),
                ];
                ui.columns(2, |cols| {
                    for (i, (icon, caption, value)) in tiles.iter().enumerate() {
                        components::stat_tile(&mut cols[i % 2], p, icon, tr(*caption, lang, t), value);
                    }
                });

                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(tr(Text::StatCompletion, lang, t).to_uppercase())
                            .size(theme::FONT_CAPTION)
                            .strong()
                            .color(p.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new("100%")
                                .size(theme::FONT_CAPTION)
                                .strong()
                                .color(p.accent),
                        );
                    });
                });
                components::completion_bar(ui, p);

                ui.add_space(theme::SPACING_LG);
                ui.add(theme::button_accent(p, format!("{}  {}", icons::MAGNIFYING_GLASS, tr(Text::StatInspect, lang, t))))
                    .clicked()
            })
            .inner
    }
}
