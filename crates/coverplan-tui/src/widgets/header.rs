//! Page header

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "Plan for the Unexpected";
pub const SUBTITLE: &str = "Use our calculator to estimate how much coverage you actually need.";

/// Title and subtitle above the calculator
#[derive(Default)]
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));
        if area.height == 0 || area.width < 2 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("▍", Style::default().fg(palette::BRAND_ORANGE)),
            Span::styled(
                TITLE,
                styles::text_primary().add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x + 1, area.y, &title, area.width - 1);

        if area.height >= 2 {
            let subtitle = Line::styled(SUBTITLE, styles::text_secondary());
            buf.set_line(area.x + 2, area.y + 1, &subtitle, area.width.saturating_sub(2));
        }
    }
}
