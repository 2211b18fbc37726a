//! Centralized theme constants for Daybreak
//! All colors live in two palettes, switched at the day/night boundary

use egui::Color32;

/// One full color set. The active palette follows the local time of the
/// last world time payload.
#[derive(Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark: bool,

    // Backgrounds
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_card: Color32,
    pub bg_hover: Color32,

    // Accent
    pub accent: Color32,
    pub accent_text: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,

    // Borders
    pub border_subtle: Color32,
    pub border_default: Color32,

    // Status
    pub status_error: Color32,
}

/// Nighttime palette
pub const NIGHT: Palette = Palette {
    dark: true,
    bg_base: Color32::from_rgb(0x09, 0x09, 0x0b),     // zinc-950
    bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    bg_card: Color32::from_rgb(0x12, 0x12, 0x16),
    bg_hover: Color32::from_rgb(0x1f, 0x1f, 0x22),
    accent: Color32::from_rgb(0x81, 0x8c, 0xf8),      // indigo-400
    accent_text: Color32::from_rgb(0x1e, 0x1b, 0x4b), // indigo-950
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
    text_dim: Color32::from_rgb(0x71, 0x71, 0x7a),       // zinc-500
    border_subtle: Color32::from_rgb(0x27, 0x27, 0x2a),  // zinc-800
    border_default: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    status_error: Color32::from_rgb(0xf8, 0x71, 0x71),   // red-400
};

/// Daytime palette
pub const DAY: Palette = Palette {
    dark: false,
    bg_base: Color32::from_rgb(0xf0, 0xf9, 0xff),     // sky-50
    bg_elevated: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_card: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_hover: Color32::from_rgb(0xe0, 0xf2, 0xfe),    // sky-100
    accent: Color32::from_rgb(0xf5, 0x9e, 0x0b),      // amber-500
    accent_text: Color32::from_rgb(0x45, 0x1a, 0x03), // amber-950
    text_primary: Color32::from_rgb(0x0f, 0x17, 0x2a),   // slate-900
    text_secondary: Color32::from_rgb(0x33, 0x41, 0x55), // slate-700
    text_muted: Color32::from_rgb(0x64, 0x74, 0x8b),     // slate-500
    text_dim: Color32::from_rgb(0x94, 0xa3, 0xb8),       // slate-400
    border_subtle: Color32::from_rgb(0xe2, 0xe8, 0xf0),  // slate-200
    border_default: Color32::from_rgb(0xcb, 0xd5, 0xe1), // slate-300
    status_error: Color32::from_rgb(0xdc, 0x26, 0x26),   // red-600
};

pub fn palette(daytime: bool) -> &'static Palette {
    if daytime {
        &DAY
    } else {
        &NIGHT
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_CLOCK: f32 = 56.0;
pub const FONT_GREETING: f32 = 20.0;
pub const FONT_QUOTE: f32 = 15.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const WINDOW_DEFAULT: (f32, f32) = (460.0, 620.0);
pub const WINDOW_MIN: (f32, f32) = (380.0, 480.0);
pub const DETAILS_ROW_HEIGHT: f32 = 26.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, p: &Palette) {
    let base = if p.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(egui::Visuals {
        dark_mode: p.dark,
        panel_fill: p.bg_base,
        window_fill: p.bg_elevated,
        extreme_bg_color: p.bg_base,
        faint_bg_color: p.bg_elevated,
        hyperlink_color: p.accent,
        override_text_color: Some(p.text_secondary),
        selection: egui::style::Selection {
            bg_fill: p.bg_hover,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: p.bg_elevated,
                weak_bg_fill: p.bg_card,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_secondary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: p.bg_hover,
                weak_bg_fill: p.bg_hover,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: p.bg_hover,
                weak_bg_fill: p.bg_hover,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: p.bg_elevated,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, p.border_subtle),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_card)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border_subtle))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent button (for primary actions like the settings Apply)
pub fn button_accent(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.accent_text))
        .fill(p.accent)
        .corner_radius(RADIUS_DEFAULT)
}
