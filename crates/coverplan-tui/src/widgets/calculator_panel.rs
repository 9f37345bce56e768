//! Calculator panel: the two sliders, the rule-of-thumb hint and the
//! "Calculate & Get Quote" button.

use coverplan_app::CalculatorFocus;
use coverplan_core::{format_axis_label, format_currency, format_years, CalculatorState, Slider};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub const TITLE: &str = " Income Protection Calculator ";
pub const SUBTITLE: &str = "Adjust the dials to visualize your coverage needs.";
pub const RULE_OF_THUMB: &str =
    "Rule of thumb: Experts recommend 3-6 years of income protection.";
pub const BUTTON_LABEL: &str = "Calculate & Get Quote";

const TRACK_FILLED: char = '━';
const TRACK_EMPTY: char = '─';
const KNOB: char = '●';
const FOCUS_MARKER: &str = "▸ ";

/// Left-hand calculator card
pub struct CalculatorPanel<'a> {
    calculator: &'a CalculatorState,
    focus: CalculatorFocus,
    show_rule_of_thumb: bool,
}

impl<'a> CalculatorPanel<'a> {
    pub fn new(calculator: &'a CalculatorState, focus: CalculatorFocus) -> Self {
        Self {
            calculator,
            focus,
            show_rule_of_thumb: true,
        }
    }

    pub fn show_rule_of_thumb(mut self, show: bool) -> Self {
        self.show_rule_of_thumb = show;
        self
    }

    fn readout(&self, slider: Slider) -> String {
        match slider {
            Slider::MonthlyAmount => format_currency(self.calculator.monthly_amount()),
            Slider::Years => format_years(self.calculator.years()),
        }
    }
}

/// Labels printed under each end of a track
fn range_labels(slider: Slider) -> (String, String) {
    let bounds = slider.range();
    match slider {
        Slider::MonthlyAmount => (format_axis_label(bounds.min), format_axis_label(bounds.max)),
        Slider::Years => (
            format_years(bounds.min as u32),
            format_years(bounds.max as u32),
        ),
    }
}

impl Widget for CalculatorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false)
            .title(TITLE)
            .title_style(styles::control_label());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let rule_height = if self.show_rule_of_thumb { 2 } else { 0 };
        let [subtitle, _, monthly, _, years, _, rule, _, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(rule_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        buf.set_line(
            subtitle.x,
            subtitle.y,
            &Line::styled(SUBTITLE, styles::text_muted()),
            subtitle.width,
        );

        for (slider, slot) in [(Slider::MonthlyAmount, monthly), (Slider::Years, years)] {
            let focused = self.focus.slider() == Some(slider);
            render_slider(
                slider,
                &self.readout(slider),
                self.calculator.fill_ratio(slider),
                focused,
                slot,
                buf,
            );
        }

        if self.show_rule_of_thumb {
            Paragraph::new(Line::from(vec![
                Span::styled("ⓘ ", Style::default().fg(palette::BRAND_ORANGE)),
                Span::styled(RULE_OF_THUMB, styles::text_secondary()),
            ]))
            .wrap(Wrap { trim: true })
            .render(rule, buf);
        }

        render_button(self.focus == CalculatorFocus::GetQuote, button, buf);
    }
}

/// Label and readout, track, then range labels
fn render_slider(
    slider: Slider,
    readout: &str,
    fill_percent: f64,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 3 {
        return;
    }

    let marker = if focused { FOCUS_MARKER } else { "" };
    let label = Line::from(vec![
        Span::styled(marker, Style::default().fg(palette::BRAND_ORANGE)),
        Span::styled(slider.label(), styles::control_label()),
    ]);
    buf.set_line(area.x, area.y, &label, area.width);

    let readout_width = readout.width() as u16;
    if readout_width < area.width {
        buf.set_stringn(
            area.right() - readout_width,
            area.y,
            readout,
            readout_width as usize,
            styles::value_emphasis(),
        );
    }

    render_track(fill_percent, focused, area.x, area.y + 1, area.width, buf);

    let (low, high) = range_labels(slider);
    let muted = styles::text_muted();
    buf.set_stringn(area.x, area.y + 2, &low, area.width as usize, muted);
    let high_width = high.width() as u16;
    if high_width + low.width() as u16 + 1 <= area.width {
        buf.set_stringn(
            area.right() - high_width,
            area.y + 2,
            &high,
            high_width as usize,
            muted,
        );
    }
}

/// Column of the knob for a fill percentage over `width` cells
fn knob_offset(fill_percent: f64, width: u16) -> u16 {
    let span = f64::from(width.saturating_sub(1));
    ((fill_percent / 100.0).clamp(0.0, 1.0) * span).round() as u16
}

fn render_track(fill_percent: f64, focused: bool, x: u16, y: u16, width: u16, buf: &mut Buffer) {
    let knob = knob_offset(fill_percent, width);
    let filled = Style::default().fg(palette::TRACK_FILL);
    let empty = Style::default().fg(palette::TRACK_EMPTY);
    let knob_style = Style::default().fg(if focused {
        palette::CHART_CURSOR
    } else {
        palette::BRAND_ORANGE
    });

    for offset in 0..width {
        let (ch, style) = match offset.cmp(&knob) {
            std::cmp::Ordering::Less => (TRACK_FILLED, filled),
            std::cmp::Ordering::Equal => (KNOB, knob_style),
            std::cmp::Ordering::Greater => (TRACK_EMPTY, empty),
        };
        if let Some(cell) = buf.cell_mut((x + offset, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn render_button(focused: bool, area: Rect, buf: &mut Buffer) {
    let text = if focused {
        format!("▸ {} ◂", BUTTON_LABEL)
    } else {
        BUTTON_LABEL.to_string()
    };
    let style = styles::button(palette::BRAND_ORANGE, focused);
    buf.set_style(area, style);
    Paragraph::new(Line::styled(text, style))
        .alignment(Alignment::Center)
        .render(area, buf);
}
