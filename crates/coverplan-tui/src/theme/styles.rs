//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Large figure, e.g. slider readouts and the coverage total
pub fn value_emphasis() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Uppercase orange control labels
pub fn control_label() -> Style {
    Style::default()
        .fg(palette::BRAND_ORANGE)
        .add_modifier(Modifier::BOLD)
}

// --- Light modal text ---
pub fn modal_text() -> Style {
    Style::default().fg(palette::TEXT_DARK).bg(palette::POPUP_BG)
}

pub fn modal_text_muted() -> Style {
    Style::default()
        .fg(palette::TEXT_DARK_MUTED)
        .bg(palette::POPUP_BG)
}

pub fn modal_heading() -> Style {
    Style::default()
        .fg(palette::BRAND_GREEN)
        .bg(palette::POPUP_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_error() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .bg(palette::POPUP_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Buttons ---

/// Filled button; focus adds bold + underline
pub fn button(bg: ratatui::style::Color, focused: bool) -> Style {
    let style = Style::default().fg(palette::CONTRAST_FG).bg(bg);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

// --- Key hints ---
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::BRAND_ORANGE)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Rounded card with an orange border when focused
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::INPUT_BG))
}

/// Light rounded container used by the quote modal
pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(modal_heading())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_LIGHT))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Single-line form input frame on the light modal
pub fn input_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(modal_text_muted().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_LIGHT
        }))
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BRAND_ORANGE));
    }

    #[test]
    fn test_button_focus_adds_modifiers() {
        let idle = button(palette::BRAND_ORANGE, false);
        let focused = button(palette::BRAND_ORANGE, true);
        assert_eq!(idle.bg, Some(palette::BRAND_ORANGE));
        assert!(!idle.add_modifier.contains(Modifier::BOLD));
        assert!(focused.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_control_label_is_bold_orange() {
        let style = control_label();
        assert_eq!(style.fg, Some(palette::BRAND_ORANGE));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
