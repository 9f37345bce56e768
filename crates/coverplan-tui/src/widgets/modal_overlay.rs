//! Modal overlay helpers: centering, dimming, shadow and clearing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, shrinking it to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Restyle every cell in `area` with muted text on the page background,
/// so the calculator reads as inactive behind the modal.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Draw a one-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal.right();
    let bottom_y = modal.bottom();

    let right_edge = (modal.y.saturating_add(1)..=bottom_y).map(|y| (right_x, y));
    let bottom_edge = (modal.x.saturating_add(1)..=right_x).map(|x| (x, bottom_y));

    for pos in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset the cells of `area` before drawing modal content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 30, 10);
        assert_eq!(centered_rect(60, 20, area), area);
    }

    #[test]
    fn test_dim_background_restyles_cells() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area);

        assert_eq!(buf[(3, 1)].fg, palette::TEXT_MUTED);
        assert_eq!(buf[(0, 0)].bg, palette::DEEPEST_BG);
    }

    #[test]
    fn test_shadow_on_right_and_bottom_edges() {
        let area = Rect::new(0, 0, 12, 8);
        let mut buf = Buffer::empty(area);
        let modal = Rect::new(2, 2, 5, 3);

        render_shadow(&mut buf, modal);

        assert_eq!(buf[(7, 3)].bg, palette::SHADOW);
        assert_eq!(buf[(4, 5)].bg, palette::SHADOW);
        assert_ne!(buf[(2, 2)].bg, palette::SHADOW);
    }

    #[test]
    fn test_shadow_at_buffer_edge_is_clipped() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, area);
    }
}
