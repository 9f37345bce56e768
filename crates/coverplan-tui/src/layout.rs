//! Screen layout for the calculator view
//!
//! Wide terminals put the calculator panel and chart side by side; narrow
//! ones stack them.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: title, subtitle and a spacer
const HEADER_HEIGHT: u16 = 3;

/// Key hint bar rows
const HINTS_HEIGHT: u16 = 1;

/// Below this width the panels are stacked
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Calculator panel height when stacked
const STACKED_PANEL_HEIGHT: u16 = 16;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub calculator: Rect,
    pub chart: Rect,
    pub hints: Rect,
}

/// Split the full terminal area
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, hints] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(HINTS_HEIGHT),
    ])
    .areas(area);

    let [calculator, chart] = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
    } else {
        Layout::vertical([Constraint::Length(STACKED_PANEL_HEIGHT), Constraint::Min(4)])
            .areas(body)
    };

    ScreenAreas {
        header,
        calculator,
        chart,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.hints.y, 39);
        assert_eq!(layout.calculator.y, layout.chart.y);
        assert_eq!(layout.calculator.width, 48);
        assert_eq!(layout.chart.x, 48);
        assert_eq!(layout.chart.width, 72);
    }

    #[test]
    fn test_narrow_layout_is_stacked() {
        let layout = create(Rect::new(0, 0, 80, 40));

        assert_eq!(layout.calculator.width, 80);
        assert_eq!(layout.chart.width, 80);
        assert_eq!(layout.calculator.height, 16);
        assert_eq!(layout.chart.y, layout.calculator.bottom());
        assert_eq!(layout.chart.bottom(), layout.hints.y);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = create(Rect::new(0, 0, 10, 5));
        assert!(layout.header.height <= 5);
    }
}
