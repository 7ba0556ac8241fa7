//! Centralized theme constants for the two personas
//! All colors, sizes, and styling should reference these constants

use crate::types::{QuestLevel, Theme};
use egui::Color32;

// =============================================================================
// COLORS - Selection screen (persona independent)
// =============================================================================
pub const SELECT_BG: Color32 = Color32::from_rgb(0x05, 0x05, 0x05);
pub const SELECT_DIVIDER: Color32 = Color32::from_rgba_premultiplied(0x1a, 0x1a, 0x1a, 0x1a);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

/// Per-persona color set
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub dark: bool,
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_input: Color32,
    pub accent: Color32,
    pub accent_muted: Color32,
    /// Text drawn on top of an accent fill
    pub on_accent: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
}

// Barista: cream paper, roasted browns
const COFFEE: Palette = Palette {
    dark: false,
    bg_base: Color32::from_rgb(0xfd, 0xf6, 0xe3),
    bg_elevated: Color32::from_rgb(0xf5, 0xe6, 0xc8),
    bg_input: Color32::from_rgb(0xff, 0xfb, 0xf0),
    accent: Color32::from_rgb(0x8b, 0x45, 0x13),
    accent_muted: Color32::from_rgb(0xc8, 0xa2, 0x7c),
    on_accent: Color32::WHITE,
    text_primary: Color32::from_rgb(0x3e, 0x27, 0x14),
    text_secondary: Color32::from_rgb(0x5c, 0x3c, 0x21),
    text_muted: Color32::from_rgb(0x8a, 0x6d, 0x55),
    border: Color32::from_rgb(0xe0, 0xcd, 0xb0),
};

// Architect: navy board, terminal mint
const HARDWARE: Palette = Palette {
    dark: true,
    bg_base: Color32::from_rgb(0x0a, 0x19, 0x2f),
    bg_elevated: Color32::from_rgb(0x11, 0x22, 0x40),
    bg_input: Color32::from_rgb(0x0d, 0x1d, 0x36),
    accent: Color32::from_rgb(0x64, 0xff, 0xda),
    accent_muted: Color32::from_rgb(0x2a, 0x6f, 0x66),
    on_accent: Color32::from_rgb(0x0a, 0x19, 0x2f),
    text_primary: Color32::from_rgb(0xcc, 0xd6, 0xf6),
    text_secondary: Color32::from_rgb(0xa8, 0xb2, 0xd1),
    text_muted: Color32::from_rgb(0x88, 0x92, 0xb0),
    border: Color32::from_rgb(0x23, 0x35, 0x54),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Coffee => &COFFEE,
        Theme::Hardware => &HARDWARE,
    }
}

/// Badge color for a quest difficulty
pub fn quest_level_color(level: QuestLevel) -> Color32 {
    match level {
        QuestLevel::Common => Color32::from_rgb(0xa1, 0xa1, 0xaa),
        QuestLevel::Rare => Color32::from_rgb(0x38, 0xbd, 0xf8),
        QuestLevel::Epic => Color32::from_rgb(0xc0, 0x84, 0xfc),
        QuestLevel::Legendary => Color32::from_rgb(0xfb, 0xbf, 0x24),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 44.0;
pub const FONT_HERO: f32 = 32.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 960.0;
pub const HEADER_HEIGHT: f32 = 56.0;
pub const MODAL_WIDTH: f32 = 720.0;
pub const GALLERY_HEIGHT: f32 = 300.0;
pub const SKILL_ICON_SIZE: f32 = 40.0;
pub const POPOVER_WIDTH: f32 = 260.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_PILL: f32 = 999.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_SECTION: f32 = 48.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, theme: Theme) {
    let p = palette(theme);
    let base = if p.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    let widget = |bg_fill: Color32, weak_bg_fill: Color32, fg: Color32, expansion: f32| {
        egui::style::WidgetVisuals {
            bg_fill,
            weak_bg_fill,
            bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border),
            fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
            corner_radius: RADIUS_DEFAULT.into(),
            expansion,
        }
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: p.dark,
        panel_fill: p.bg_base,
        window_fill: p.bg_elevated,
        extreme_bg_color: p.bg_input,
        faint_bg_color: p.bg_elevated,
        hyperlink_color: p.accent,
        override_text_color: Some(p.text_primary),
        selection: egui::style::Selection {
            bg_fill: p.accent_muted,
            stroke: egui::Stroke::new(STROKE_DEFAULT, p.accent),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(p.bg_elevated, p.bg_elevated, p.text_primary, 0.0),
            inactive: widget(p.bg_elevated, p.bg_elevated, p.text_secondary, 0.0),
            hovered: widget(lighten(p.bg_elevated, 0.08), lighten(p.bg_elevated, 0.08), p.text_primary, 0.0),
            active: widget(p.accent_muted, p.accent_muted, p.text_primary, -1.0),
            open: widget(p.bg_elevated, p.bg_elevated, p.text_primary, 0.0),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        menu_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = true;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn modal_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_base)
        .stroke(egui::Stroke::new(STROKE_THICK, p.accent))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

pub fn input_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_input)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Neutral outlined button
pub fn button(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.text_primary))
        .fill(p.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button for primary actions (ask, contact)
pub fn button_accent(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.on_accent).strong())
        .fill(p.accent)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Same color at a given alpha (0-255), unmultiplied
pub fn with_alpha(c: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
}
