use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Color set for one visual mode
struct Palette {
    bg: Color32,
    panel_bg: Color32,
    widget_bg: Color32,
    hover: Color32,
    active: Color32,
    accent: Color32,
    text: Color32,
    outline_faint: Color32,
    outline: Color32,
    outline_strong: Color32,
    code_bg: Color32,
}

impl Palette {
    fn dark() -> Self {
        Self {
            bg: Color32::from_rgb(23, 23, 23),
            panel_bg: Color32::from_rgb(31, 31, 31),
            widget_bg: Color32::from_rgb(40, 40, 40),
            hover: Color32::from_rgb(50, 50, 50),
            active: Color32::from_rgb(60, 60, 60),
            accent: Color32::from_rgb(100, 150, 250),
            text: Color32::from_rgb(220, 220, 220),
            outline_faint: Color32::from_rgb(60, 60, 60),
            outline: Color32::from_rgb(70, 70, 70),
            outline_strong: Color32::from_rgb(80, 80, 80),
            code_bg: Color32::from_rgb(35, 35, 35),
        }
    }

    fn light() -> Self {
        Self {
            bg: Color32::from_rgb(252, 252, 252),
            panel_bg: Color32::from_rgb(244, 244, 244),
            widget_bg: Color32::from_rgb(232, 232, 232),
            hover: Color32::from_rgb(220, 220, 220),
            active: Color32::from_rgb(205, 205, 205),
            accent: Color32::from_rgb(66, 120, 220),
            text: Color32::from_rgb(35, 35, 35),
            outline_faint: Color32::from_rgb(210, 210, 210),
            outline: Color32::from_rgb(195, 195, 195),
            outline_strong: Color32::from_rgb(175, 175, 175),
            code_bg: Color32::from_rgb(238, 238, 238),
        }
    }
}

/// Apply the gallery theme for the given mode.
///
/// Both modes share the same spacing and font sizes, so switching the
/// mode at runtime only swaps colors and never reflows the layout.
pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    let mut style = Style::default();
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    let palette = if dark_mode {
        Palette::dark()
    } else {
        Palette::light()
    };

    // Window and panel styling
    visuals.window_fill = palette.panel_bg;
    visuals.panel_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.bg;
    visuals.faint_bg_color = palette.widget_bg;

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = palette.widget_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.outline_faint);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = palette.widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette.outline);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.outline_strong);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = palette.active;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    // Selection and highlighting
    visuals.selection.bg_fill = palette.accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);

    // Hyperlinks
    visuals.hyperlink_color = palette.accent;

    // Code highlighting
    visuals.code_bg_color = palette.code_bg;

    // Shadows
    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);
    style.spacing.indent = 20.0;

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(
        TextStyle::Heading,
        FontId::new(18.0, FontFamily::Proportional),
    );
    font_sizes.insert(
        TextStyle::Monospace,
        FontId::new(12.0, FontFamily::Monospace),
    );

    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Accent color shared by both modes' widgets
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_visuals_match_requested_mode() {
        let ctx = Context::default();

        apply_theme(&ctx, true);
        assert!(ctx.style().visuals.dark_mode);

        apply_theme(&ctx, false);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn modes_share_font_sizes_and_spacing() {
        let ctx = Context::default();

        apply_theme(&ctx, true);
        let dark = ctx.style();

        apply_theme(&ctx, false);
        let light = ctx.style();

        assert_eq!(dark.text_styles, light.text_styles);
        assert_eq!(dark.spacing.item_spacing, light.spacing.item_spacing);
        assert_eq!(dark.spacing.indent, light.spacing.indent);
    }
}
