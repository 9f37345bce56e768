//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widgets and full frames can be rendered
//! and inspected without a real terminal.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(Header::new(), term.area());
//! assert!(term.buffer_contains("Plan for the Unexpected"));
//! ```

use coverplan_app::config::Settings;
use coverplan_app::AppState;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Wide enough for the side-by-side calculator and chart
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 36;

/// Narrow terminal for the stacked layout
pub const NARROW_WIDTH: u16 = 80;
pub const NARROW_HEIGHT: u16 = 40;

/// `TestBackend` terminal with buffer inspection helpers
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn narrow() -> Self {
        Self::with_size(NARROW_WIDTH, NARROW_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal is infallible");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw into TestBackend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Every row of the buffer as a string, top to bottom
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.buffer();
        (0..buffer.area.height).map(|y| row_text(buffer, y)).collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.rows()
            .get(usize::from(line))
            .is_some_and(|row| row.contains(text))
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        self.rows()
            .iter()
            .position(|row| row.contains(text))
            .map(|y| y as u16)
    }

    /// Position of the first cell where `text` starts (single-width text)
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        let len = text.chars().count() as u16;
        let last_x = buffer.area.width.checked_sub(len)?;
        (0..buffer.area.height).find_map(|y| {
            (0..=last_x)
                .find(|&x| {
                    let found: String = (x..x + len).map(|cx| buffer[(cx, y)].symbol()).collect();
                    found == text
                })
                .map(|x| (x, y))
        })
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        self.buffer().cell((x, y)).map(|cell| cell.symbol())
    }

    /// Whole buffer as text, handy in assertion messages
    pub fn content(&self) -> String {
        self.rows().join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// AppState with default settings (RM 5,000 for 5 years)
pub fn create_test_state() -> AppState {
    AppState::with_settings(Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 120, 36));
        assert_eq!(TestTerminal::narrow().area(), Rect::new(0, 0, 80, 40));
    }

    #[test]
    fn test_buffer_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
        assert_eq!(term.find_line("World"), Some(0));
        assert_eq!(term.find_text("World"), Some((6, 0)));
        assert_eq!(term.find_text("Moon"), None);
        assert_eq!(term.cell_at(0, 0), Some("H"));
        assert_eq!(term.cell_at(50, 0), None);
        assert_eq!(term.content().lines().count(), 3);
    }
}
