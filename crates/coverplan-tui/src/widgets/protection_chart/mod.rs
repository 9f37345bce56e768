//! Projected coverage chart.
//!
//! A braille area plot of the cumulative coverage per year, with value-axis
//! labels, `Year N` ticks, a tooltip for the point under the cursor and a
//! persistent total overlay.
//!
//! ```text
//! ╭ Projected Income Visualization ─────────────────────╮
//! │Total income needed to cover living expenses ...     │
//! │         Coverage: RM 180,000.00 · Duration: 3 years │
//! │  RM 300k ┈TOTAL COVERAGE NEEDED┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈⣠⣾⣿ │
//! │           RM 300,000         │         ⣀⣴⣾⣿⣿⣿⣿⣿ │
//! │  RM 100k ┈┈┈┈┈┈┈┈┈┈┈┈⣀⣤⣶⣾⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿ │
//! │     RM 0 ⣀⣤⣶⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿ │
//! │          Year 0        Year 2         Year 4  Year 5│
//! ╰─────────────────────────────────────────────────────╯
//! ```

mod braille_canvas;

use braille_canvas::BrailleCanvas;
use coverplan_core::{
    format_axis_label, format_currency, format_currency_precise, format_duration_tooltip,
    format_year_tick, AxisScale, ChartPoint,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub const TITLE: &str = " Projected Income Visualization ";
pub const SUBTITLE: &str =
    "Total income needed to cover living expenses in the event of loss of income.";
pub const OVERLAY_LABEL: &str = "TOTAL COVERAGE NEEDED";
/// Name of the plotted series in the tooltip
pub const SERIES_LABEL: &str = "Coverage";

/// Width of the value-axis label column, e.g. `RM 24.0M `
const Y_AXIS_WIDTH: u16 = 10;
/// Smallest inner area that still fits a plot
const MIN_INNER_HEIGHT: u16 = 6;
const MIN_PLOT_WIDTH: u16 = 12;
/// Blank columns kept between x-axis labels
const X_LABEL_GAP: u16 = 2;

const GRID_CHAR: char = '┈';
const CURSOR_CHAR: char = '│';

/// Area chart of the projection points
pub struct ProtectionChart<'a> {
    points: &'a [ChartPoint],
    cursor: u32,
}

impl<'a> ProtectionChart<'a> {
    /// `cursor` is the year index under the tooltip; it is clamped to the data.
    pub fn new(points: &'a [ChartPoint], cursor: u32) -> Self {
        Self { points, cursor }
    }

    fn total(&self) -> u64 {
        self.points.last().map_or(0, |p| p.cumulative_value)
    }

    fn cursor_index(&self) -> usize {
        (self.cursor as usize).min(self.points.len().saturating_sub(1))
    }
}

impl Widget for ProtectionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false)
            .title(TITLE)
            .title_style(styles::control_label());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        buf.set_line(
            inner.x,
            inner.y,
            &Line::styled(SUBTITLE, styles::text_muted()),
            inner.width,
        );

        if inner.height < MIN_INNER_HEIGHT
            || inner.width < Y_AXIS_WIDTH + MIN_PLOT_WIDTH
            || self.points.is_empty()
        {
            render_compact_summary(self.total(), inner, buf);
            return;
        }

        // Rows: subtitle, tooltip, plot..., x-axis
        let tooltip_y = inner.y + 1;
        let x_axis_y = inner.bottom() - 1;
        let plot = Rect {
            x: inner.x + Y_AXIS_WIDTH,
            y: inner.y + 2,
            width: inner.width - Y_AXIS_WIDTH,
            height: inner.height - 3,
        };

        let max_value = self
            .points
            .iter()
            .map(|p| p.cumulative_value)
            .max()
            .unwrap_or(0);
        let scale = AxisScale::for_max(max_value);

        render_value_axis(&scale, inner.x, plot, buf);
        render_area(self.points, &scale, plot, buf);
        render_year_axis(self.points, plot, x_axis_y, buf);

        let cursor = self.cursor_index();
        let cursor_x = plot.x + (point_dot_x(cursor, self.points.len(), plot) / 2) as u16;
        render_cursor(cursor_x, plot, buf);
        render_tooltip(&self.points[cursor], cursor_x, plot, tooltip_y, buf);

        render_total_overlay(self.total(), plot, buf);
    }
}

/// Dot-space x of point `index` out of `count`
fn point_dot_x(index: usize, count: usize, plot: Rect) -> usize {
    let dot_w = plot.width as usize * 2;
    if count <= 1 {
        return dot_w.saturating_sub(1);
    }
    index * (dot_w - 1) / (count - 1)
}

/// Row of a value-axis ratio; 0.0 is the bottom row
fn ratio_to_row(ratio: f64, plot: Rect) -> u16 {
    let span = f64::from(plot.height.saturating_sub(1));
    plot.bottom() - 1 - (ratio * span).round() as u16
}

/// Linear interpolation between neighbouring points at dot column `dx`
fn value_at(points: &[ChartPoint], dx: usize, dot_w: usize) -> f64 {
    let last = points.len() - 1;
    if last == 0 || dot_w <= 1 {
        return points[last].cumulative_value as f64;
    }
    let t = dx as f64 * last as f64 / (dot_w - 1) as f64;
    let i = (t.floor() as usize).min(last);
    let next = (i + 1).min(last);
    let v0 = points[i].cumulative_value as f64;
    let v1 = points[next].cumulative_value as f64;
    v0 + (v1 - v0) * (t - i as f64)
}

fn render_value_axis(scale: &AxisScale, x: u16, plot: Rect, buf: &mut Buffer) {
    let label_style = styles::text_secondary();
    let grid_style = Style::default().fg(palette::GRID_LINE);
    let label_width = (Y_AXIS_WIDTH - 1) as usize;

    for &tick in &scale.ticks {
        let y = ratio_to_row(scale.ratio(tick), plot);
        let label = format!("{:>label_width$} ", format_axis_label(tick));
        buf.set_stringn(x, y, label, Y_AXIS_WIDTH as usize, label_style);

        for gx in plot.left()..plot.right() {
            if let Some(cell) = buf.cell_mut((gx, y)) {
                cell.set_char(GRID_CHAR).set_style(grid_style);
            }
        }
    }
}

fn render_area(points: &[ChartPoint], scale: &AxisScale, plot: Rect, buf: &mut Buffer) {
    let mut canvas = BrailleCanvas::new(plot.width as usize, plot.height as usize);
    let dot_w = canvas.dot_width();
    let bottom = canvas.dot_height() - 1;

    for dx in 0..dot_w {
        let ratio = (value_at(points, dx, dot_w) / scale.upper as f64).clamp(0.0, 1.0);
        let top = bottom - (ratio * bottom as f64).round() as usize;
        canvas.fill_below(dx, top);
    }

    canvas.render_to_buffer(buf, plot, palette::CHART_AREA);
}

/// Year labels spread evenly from flush left to flush right.
///
/// Every `step`-th year is labelled, and the final year always is; a stepped
/// label that would crowd the final one is dropped.
fn render_year_axis(points: &[ChartPoint], plot: Rect, y: u16, buf: &mut Buffer) {
    let Some(last) = points.len().checked_sub(1) else {
        return;
    };
    let labels: Vec<String> = points
        .iter()
        .map(|p| format_year_tick(p.year_index))
        .collect();
    let widest = labels.iter().map(|l| l.width() as u16).max().unwrap_or(0);
    let max_labels = (plot.width / (widest + X_LABEL_GAP)).max(1) as usize;
    let step = points.len().div_ceil(max_labels).max(1);
    let style = styles::text_muted();

    let last_width = labels[last].width() as u16;
    let last_x = plot.right().saturating_sub(last_width).max(plot.x);
    buf.set_stringn(last_x, y, &labels[last], last_width as usize, style);
    if last == 0 {
        return;
    }

    let span = usize::from(plot.width.saturating_sub(widest));
    for index in (0..last).step_by(step) {
        let label = &labels[index];
        let width = label.width() as u16;
        let x = plot.x + (span * index / last) as u16;
        if x + width + X_LABEL_GAP > last_x {
            break;
        }
        buf.set_stringn(x, y, label, width as usize, style);
    }
}

fn is_braille(symbol: &str) -> bool {
    symbol
        .chars()
        .next()
        .is_some_and(|c| ('\u{2800}'..='\u{28FF}').contains(&c))
}

/// Highlight the cursor column: recolor the area, draw a guide elsewhere
fn render_cursor(x: u16, plot: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(palette::CHART_CURSOR);
    for y in plot.top()..plot.bottom() {
        if let Some(cell) = buf.cell_mut((x, y)) {
            if !is_braille(cell.symbol()) {
                cell.set_char(CURSOR_CHAR);
            }
            cell.set_style(style);
        }
    }
}

fn render_tooltip(point: &ChartPoint, cursor_x: u16, plot: Rect, y: u16, buf: &mut Buffer) {
    let text = format!(
        " {}: {} · {} ",
        SERIES_LABEL,
        format_currency_precise(point.cumulative_value),
        format_duration_tooltip(point.year_index)
    );
    let width = (text.width() as u16).min(plot.width);
    let x = cursor_x
        .saturating_sub(width / 2)
        .clamp(plot.x, plot.right() - width);

    let style = Style::default().fg(palette::TEXT_DARK).bg(palette::POPUP_BG);
    buf.set_stringn(x, y, &text, width as usize, style);
}

fn render_total_overlay(total: u64, plot: Rect, buf: &mut Buffer) {
    if plot.height < 2 {
        return;
    }
    let x = plot.x + 1;
    let width = plot.width.saturating_sub(1);
    let bg = Style::default().bg(palette::INPUT_BG);

    let label = Line::from(Span::styled(
        OVERLAY_LABEL,
        styles::text_secondary().patch(bg),
    ));
    let value = Line::from(Span::styled(
        format_currency(total),
        styles::value_emphasis().patch(bg),
    ));
    buf.set_line(x, plot.y, &label, width);
    buf.set_line(x, plot.y + 1, &value, width);
}

/// Single-line fallback when the chart does not fit
fn render_compact_summary(total: u64, inner: Rect, buf: &mut Buffer) {
    if inner.height < 2 {
        return;
    }
    let line = Line::from(vec![
        Span::styled(OVERLAY_LABEL, styles::text_secondary()),
        Span::raw("  "),
        Span::styled(format_currency(total), styles::value_emphasis()),
    ]);
    buf.set_line(inner.x, inner.y + 1, &line, inner.width);
}
