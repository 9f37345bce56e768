//! Color palette: dark green card surfaces with orange accents.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 26, 19); // Page background
pub const INPUT_BG: Color = Color::Rgb(30, 64, 48); // Slider/control panels
pub const POPUP_BG: Color = Color::Rgb(250, 250, 249); // Quote modal (light card)

// --- Brand ---
pub const BRAND_ORANGE: Color = Color::Rgb(255, 84, 0);
pub const BRAND_GREEN: Color = Color::Rgb(22, 51, 37);
pub const ORANGE_TINT: Color = Color::Rgb(255, 237, 213); // Selected smoker option

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(52, 84, 68);
pub const BORDER_ACTIVE: Color = BRAND_ORANGE;
pub const BORDER_LIGHT: Color = Color::Rgb(209, 213, 219); // Form inputs on the light modal

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const TEXT_DARK: Color = Color::Rgb(31, 41, 55); // Text on the light modal
pub const TEXT_DARK_MUTED: Color = Color::Rgb(75, 85, 99);

// --- Slider track ---
pub const TRACK_EMPTY: Color = Color::Rgb(60, 90, 75);
pub const TRACK_FILL: Color = BRAND_ORANGE;

// --- Chart ---
pub const CHART_AREA: Color = BRAND_ORANGE;
pub const CHART_CURSOR: Color = Color::White;
pub const GRID_LINE: Color = Color::Rgb(52, 84, 68);

// --- Status ---
pub const STATUS_RED: Color = Color::Rgb(220, 38, 38);

// --- Effects ---
pub const SHADOW: Color = Color::Black;
pub const CONTRAST_FG: Color = Color::White;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_colors_are_rgb() {
        assert_eq!(BRAND_ORANGE, Color::Rgb(255, 84, 0));
        assert_eq!(BORDER_ACTIVE, BRAND_ORANGE);
        assert!(matches!(POPUP_BG, Color::Rgb(_, _, _)));
    }
}
