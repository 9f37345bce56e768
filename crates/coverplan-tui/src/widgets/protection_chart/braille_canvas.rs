//! Braille dot canvas: each cell holds a 2x4 grid of dots.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Dot bits within a cell, indexed `[y % 4][x % 2]`.
///
/// ```text
/// 0x01 0x08
/// 0x02 0x10
/// 0x04 0x20
/// 0x40 0x80
/// ```
pub(super) const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

const BRAILLE_BASE: u32 = 0x2800;

/// Canvas addressed in dot space: `x` in `0..width*2`, `y` in `0..height*4`
/// with `y = 0` at the top.
pub(super) struct BrailleCanvas {
    pub(super) cells: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl BrailleCanvas {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    pub(super) fn dot_width(&self) -> usize {
        self.width * 2
    }

    pub(super) fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Set one dot. Out-of-bounds dots are ignored.
    pub(super) fn set(&mut self, x: usize, y: usize) {
        let (col, row) = (x / 2, y / 4);
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row][col] |= BRAILLE_BIT_MAP[y % 4][x % 2];
    }

    /// Fill dot column `x` from `top` down to the bottom edge.
    pub(super) fn fill_below(&mut self, x: usize, top: usize) {
        for y in top..self.dot_height() {
            self.set(x, y);
        }
    }

    /// Write non-empty cells into `buf`; empty cells keep whatever is there.
    pub(super) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, color: Color) {
        let style = Style::default().fg(color);
        for (row, cells) in self.cells.iter().enumerate().take(area.height as usize) {
            let y = area.y + row as u16;
            for (col, &bits) in cells.iter().enumerate().take(area.width as usize) {
                if bits == 0 {
                    continue;
                }
                let ch = char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ');
                if let Some(cell) = buf.cell_mut((area.x + col as u16, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}
