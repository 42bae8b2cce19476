//! Centralized theme constants for Coffee Board
//! All colors, sizes, and styling should reference these constants

use egui::{Color32, Theme};

// =============================================================================
// COLORS - Accent (Coffee yellow)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xfd, 0xce, 0x2a);
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x2b, 0x1d, 0x0e); // dark roast, readable on accent

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xb2, 0x22, 0x22); // firebrick

// =============================================================================
// COLORS - Per-scheme palette
// =============================================================================
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg: Color32,
    pub surface: Color32,
    pub input: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_dim: Color32,
}

pub const DARK: Palette = Palette {
    bg: Color32::BLACK,
    surface: Color32::from_rgb(0x18, 0x18, 0x1b),
    input: Color32::from_rgb(0x14, 0x14, 0x18),
    border: Color32::from_rgb(0x27, 0x27, 0x2a),
    text: Color32::WHITE,
    text_dim: Color32::from_rgb(0x71, 0x71, 0x7a),
};

pub const LIGHT: Palette = Palette {
    bg: Color32::WHITE,
    surface: Color32::from_rgb(0xf4, 0xf4, 0xf5),
    input: Color32::from_rgb(0xfa, 0xfa, 0xfa),
    border: Color32::from_rgb(0xe4, 0xe4, 0xe7),
    text: Color32::BLACK,
    text_dim: Color32::from_rgb(0x71, 0x71, 0x7a),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_BODY: f32 = 14.0;
pub const FONT_ERROR: f32 = 15.0;
pub const FONT_CAPTION: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const IMAGE_SIZE: (f32, f32) = (270.0, 200.0);
pub const INPUT_PADDING: f32 = 10.0;
pub const ENTRY_GAP: f32 = 15.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals_of(Theme::Dark, visuals_for(Theme::Dark));
    ctx.set_visuals_of(Theme::Light, visuals_for(Theme::Light));

    ctx.all_styles_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

fn visuals_for(theme: Theme) -> egui::Visuals {
    let p = palette(theme);
    let base = match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };
    egui::Visuals {
        panel_fill: p.bg,
        window_fill: p.surface,
        extreme_bg_color: p.input,
        faint_bg_color: p.surface,
        hyperlink_color: ACCENT,
        error_fg_color: STATUS_ERROR,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    }
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn input_frame(p: Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.input)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(INPUT_PADDING as i8))
}

pub fn image_frame(p: Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.surface)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(4))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Full-width accent button (the publish action)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT).size(FONT_BODY))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Context menu item with icon. Returns true if clicked.
pub fn menu_item(ui: &mut egui::Ui, icon: &str, label: &str) -> bool {
    let p = palette(ui.ctx().theme());
    let text = format!("{}  {}", icon, label);
    let w = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, 24.0), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter().rect_filled(rect, RADIUS_DEFAULT, p.border);
    }
    ui.painter().text(
        rect.left_center() + egui::vec2(8.0, 0.0),
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::proportional(13.0),
        p.text,
    );
    response.clicked()
}

/// Sets context menu width to 1.5x the widest label.
pub fn set_menu_width(ui: &mut egui::Ui, labels: &[&str]) {
    let max_text = labels
        .iter()
        .map(|l| {
            ui.fonts(|f| {
                f.layout_no_wrap(l.to_string(), egui::FontId::proportional(13.0), Color32::WHITE)
                    .rect
                    .width()
            })
        })
        .fold(0.0_f32, f32::max);
    let w = (max_text + 16.0) * 1.5;
    ui.set_min_width(w);
    ui.set_max_width(w);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_follows_scheme() {
        assert_eq!(palette(Theme::Dark).bg, Color32::BLACK);
        assert_eq!(palette(Theme::Light).bg, Color32::WHITE);
    }
}
