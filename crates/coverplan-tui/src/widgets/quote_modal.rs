//! Quote modal: lead form, submitting spinner and success screen.

use coverplan_app::{QuoteModalState, SubmissionStatus};
use coverplan_core::{LeadField, SmokerStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::modal_overlay;
use crate::theme::{palette, styles};

pub const TITLE: &str = " Save Your Quote ";
pub const SUCCESS_DETAIL: &str = "We've sent the detailed breakdown to your email.";
pub const CLOSE_LABEL: &str = "Close";

const MODAL_WIDTH: u16 = 64;
const FORM_HEIGHT: u16 = 22;
const SUCCESS_HEIGHT: u16 = 12;

const CURSOR: char = '▏';

fn placeholder(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "Andrew Yap",
        LeadField::Birthday => "dd/mm/yyyy",
        LeadField::Gender => "Male",
        LeadField::Phone => "+60 12-345 6789",
        LeadField::Email => "you@example.com",
        LeadField::Smoker | LeadField::Submit => "",
    }
}

/// Centered modal over a dimmed screen
pub struct QuoteModal<'a> {
    modal: &'a QuoteModalState,
}

impl<'a> QuoteModal<'a> {
    pub fn new(modal: &'a QuoteModalState) -> Self {
        Self { modal }
    }

    /// Focus is only drawn while the form accepts input
    fn is_focused(&self, field: LeadField) -> bool {
        self.modal.is_editing() && self.modal.focus == field
    }

    fn render_form(&self, inner: Rect, buf: &mut Buffer) {
        let [summary, _, name, row2, row3, email, error, _, button] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.modal.summary_text())
            .style(styles::modal_text())
            .wrap(Wrap { trim: true })
            .render(summary, buf);

        let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1);
        let [birthday, gender] = halves.areas(row2);
        let [smoker, phone] = halves.areas(row3);

        let form = &self.modal.form;
        for (field, area) in [
            (LeadField::Name, name),
            (LeadField::Birthday, birthday),
            (LeadField::Gender, gender),
            (LeadField::Phone, phone),
            (LeadField::Email, email),
        ] {
            let value = form.text(field).unwrap_or_default();
            render_input(field, value, self.is_focused(field), area, buf);
        }
        render_smoker(form.is_smoker, self.is_focused(LeadField::Smoker), smoker, buf);

        if let Some(message) = &self.modal.error {
            Paragraph::new(message.as_str())
                .style(styles::modal_error())
                .wrap(Wrap { trim: true })
                .render(error, buf);
        }

        let (label, style) = match self.modal.status {
            SubmissionStatus::Submitting => (
                format!("{} Sending...", self.modal.spinner()),
                styles::button(palette::BRAND_GREEN, false),
            ),
            _ => {
                let focused = self.is_focused(LeadField::Submit);
                let label = LeadField::Submit.label();
                let label = if focused {
                    format!("▸ {} ◂", label)
                } else {
                    label.to_string()
                };
                (label, styles::button(palette::BRAND_ORANGE, focused))
            }
        };
        render_button(&label, style, button, buf);
    }

    fn render_success(&self, inner: Rect, buf: &mut Buffer) {
        let [body, button] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let lines = vec![
            Line::default(),
            Line::styled("✓", styles::modal_heading()),
            Line::default(),
            Line::styled(self.modal.success_heading(), styles::modal_heading()),
            Line::styled(SUCCESS_DETAIL, styles::modal_text_muted()),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        render_button(
            &format!("▸ {} ◂", CLOSE_LABEL),
            styles::button(palette::BRAND_GREEN, true),
            button,
            buf,
        );
    }
}

impl Widget for QuoteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let height = match self.modal.status {
            SubmissionStatus::Success => SUCCESS_HEIGHT,
            SubmissionStatus::Editing | SubmissionStatus::Submitting => FORM_HEIGHT,
        };
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, height, area);
        modal_overlay::render_shadow(buf, modal_area);
        modal_overlay::clear_area(buf, modal_area);

        let block = styles::modal_block(TITLE);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.width < 8 || inner.height < 3 {
            return;
        }

        match self.modal.status {
            SubmissionStatus::Success => self.render_success(inner, buf),
            SubmissionStatus::Editing | SubmissionStatus::Submitting => {
                self.render_form(inner, buf)
            }
        }
    }
}

/// Longest suffix of `value` that fits in `max_width` cells
fn visible_tail(value: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &value[start..]
}

fn render_input(field: LeadField, value: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let block = styles::input_block(field.label(), focused);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let cursor_width = usize::from(focused);
    let available = (inner.width as usize).saturating_sub(cursor_width);
    let cursor = Span::styled(
        CURSOR.to_string(),
        Style::default()
            .fg(palette::BRAND_ORANGE)
            .bg(palette::POPUP_BG),
    );

    let line = if value.is_empty() {
        let hint = Span::styled(placeholder(field), styles::modal_text_muted());
        if focused {
            Line::from(vec![cursor, hint])
        } else {
            Line::from(hint)
        }
    } else {
        let text = Span::styled(visible_tail(value, available), styles::modal_text());
        if focused {
            Line::from(vec![text, cursor])
        } else {
            Line::from(text)
        }
    };
    buf.set_line(inner.x, inner.y, &line, inner.width);

    if focused && field == LeadField::Gender {
        let hint = "◂ ▸";
        let hint_width = hint.width() as u16;
        let used = line.width() as u16;
        if used + hint_width < inner.width {
            buf.set_stringn(
                inner.right() - hint_width,
                inner.y,
                hint,
                hint_width as usize,
                styles::modal_text_muted(),
            );
        }
    }
}

fn render_smoker(selected: SmokerStatus, focused: bool, area: Rect, buf: &mut Buffer) {
    let block = styles::input_block(LeadField::Smoker.label(), focused);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let chosen = Style::default()
        .fg(palette::BRAND_ORANGE)
        .bg(palette::ORANGE_TINT)
        .add_modifier(Modifier::BOLD);
    let option = |status: SmokerStatus| {
        let style = if status == selected {
            chosen
        } else {
            styles::modal_text_muted()
        };
        Span::styled(format!(" {} ", status.label()), style)
    };

    let line = Line::from(vec![
        option(SmokerStatus::Yes),
        Span::styled("  ", styles::modal_text()),
        option(SmokerStatus::No),
    ]);
    buf.set_line(inner.x, inner.y, &line, inner.width);
}

fn render_button(label: &str, style: Style, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, style);
    Paragraph::new(Line::styled(label, style))
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use coverplan_core::CalculatorState;
    use ratatui::widgets::Paragraph;

    fn modal() -> QuoteModalState {
        QuoteModalState::new(1, CalculatorState::new(5_000, 5).snapshot())
    }

    fn filled_modal() -> QuoteModalState {
        let mut modal = modal();
        modal.form.name = "Andrew".to_string();
        modal.form.birthday = "01/02/1990".to_string();
        modal.form.phone = "+60 12-345 6789".to_string();
        modal.form.email = "andrew@example.com".to_string();
        modal
    }

    fn render(modal: &QuoteModalState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(QuoteModal::new(modal), term.area());
        term
    }

    #[test]
    fn test_form_renders_title_summary_and_fields() {
        let term = render(&modal());

        assert!(term.buffer_contains("Save Your Quote"));
        assert!(term.buffer_contains("you need approximately RM 300,000"));
        for field in LeadField::ALL {
            assert!(
                term.buffer_contains(field.label()),
                "missing {}:\n{}",
                field.label(),
                term.content()
            );
        }
    }

    #[test]
    fn test_empty_fields_show_placeholders() {
        let term = render(&modal());

        assert!(term.buffer_contains("Andrew Yap"));
        assert!(term.buffer_contains("dd/mm/yyyy"));
        assert!(term.buffer_contains("you@example.com"));
    }

    #[test]
    fn test_focused_field_shows_cursor_after_text() {
        let mut modal = modal();
        modal.insert_char('A');
        modal.insert_char('y');
        let term = render(&modal);

        assert!(term.buffer_contains("Ay▏"));
        assert!(!term.buffer_contains("Andrew Yap"));
    }

    #[test]
    fn test_smoker_selection_is_highlighted() {
        let mut modal = modal();
        modal.set_smoker(SmokerStatus::Yes);
        let term = render(&modal);

        let (x, y) = term.find_text(" Yes ").expect("yes option");
        assert_eq!(term.buffer()[(x + 1, y)].bg, palette::ORANGE_TINT);

        let (x, y) = term.find_text(" No ").expect("no option");
        assert_eq!(term.buffer()[(x + 1, y)].bg, palette::POPUP_BG);
    }

    #[test]
    fn test_error_message_is_shown() {
        let mut modal = modal();
        modal.begin_submit();
        let term = render(&modal);

        assert!(term.buffer_contains("Please fill in: Full Name"));
    }

    #[test]
    fn test_submit_button_focus_marker() {
        let mut modal = modal();
        let term = render(&modal);
        assert!(term.buffer_contains("Get Detailed Quote"));
        assert!(!term.buffer_contains("▸ Get Detailed Quote ◂"));

        modal.focus = LeadField::Submit;
        let term = render(&modal);
        assert!(term.buffer_contains("▸ Get Detailed Quote ◂"));
    }

    #[test]
    fn test_submitting_shows_spinner_and_hides_cursor() {
        let mut modal = filled_modal();
        modal.begin_submit();
        let term = render(&modal);

        assert!(term.buffer_contains("⠋ Sending..."));
        assert!(!term.buffer_contains("▏"));
        assert!(term.buffer_contains("andrew@example.com"));

        modal.tick();
        let term = render(&modal);
        assert!(term.buffer_contains("⠙ Sending..."));
    }

    #[test]
    fn test_success_screen() {
        let mut modal = filled_modal();
        modal.begin_submit();
        modal.complete_submit();
        let term = render(&modal);

        assert!(term.buffer_contains("Thank you, Andrew!"));
        assert!(term.buffer_contains(SUCCESS_DETAIL));
        assert!(term.buffer_contains("▸ Close ◂"));
        assert!(!term.buffer_contains("Full Name"));
    }

    #[test]
    fn test_failed_submit_shows_retry_message() {
        let mut modal = filled_modal();
        modal.begin_submit();
        modal.fail_submit("webhook returned 503");
        let term = render(&modal);

        assert!(term.buffer_contains("Could not send your quote"));
        assert!(term.buffer_contains("▸ Get Detailed Quote ◂"));
    }

    #[test]
    fn test_background_is_dimmed() {
        let modal = modal();
        let mut term = TestTerminal::new();
        term.draw_with(|frame| {
            let area = frame.area();
            frame.render_widget(Paragraph::new("behind"), area);
            frame.render_widget(QuoteModal::new(&modal), area);
        });

        assert!(term.buffer_contains("behind"));
        assert_eq!(term.buffer()[(0, 0)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let modal = filled_modal();
        for (w, h) in [(10, 4), (30, 10), (64, 22)] {
            let mut term = TestTerminal::with_size(w, h);
            term.render_widget(QuoteModal::new(&modal), term.area());
        }
    }

    #[test]
    fn test_visible_tail_keeps_end_of_long_values() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("", 5), "");
    }
}
