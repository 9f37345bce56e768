//! Bottom bar listing the keys that apply to the current screen

use coverplan_app::{AppState, SubmissionStatus, UiMode};
use coverplan_core::LeadField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

type Hint = (&'static str, &'static str);

const CALCULATOR_HINTS: &[Hint] = &[
    ("←/→", "adjust"),
    ("PgUp/PgDn", "±10 steps"),
    ("Home/End", "min/max"),
    ("Tab", "next control"),
    ("[/]", "chart cursor"),
    ("c", "get quote"),
    ("q", "quit"),
];

const FORM_HINTS: &[Hint] = &[
    ("Tab/↑↓", "move"),
    ("Ctrl+U", "clear"),
    ("Ctrl+S", "submit"),
    ("Esc", "close"),
];

const SMOKER_HINTS: &[Hint] = &[("←/→/Space", "toggle"), ("y/n", "choose")];
const GENDER_HINTS: &[Hint] = &[("←/→", "suggest")];
const SUBMIT_HINTS: &[Hint] = &[("Enter", "submit")];
const SUBMITTING_HINTS: &[Hint] = &[("Esc", "close")];
const SUCCESS_HINTS: &[Hint] = &[("Enter/Esc", "close")];

/// One-line key reference for the active mode
pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<Hint> {
        let modal = match (self.state.ui_mode, self.state.quote_modal.as_ref()) {
            (UiMode::QuoteModal, Some(modal)) => modal,
            _ => return CALCULATOR_HINTS.to_vec(),
        };

        match modal.status {
            SubmissionStatus::Submitting => SUBMITTING_HINTS.to_vec(),
            SubmissionStatus::Success => SUCCESS_HINTS.to_vec(),
            SubmissionStatus::Editing => {
                let focused: &[Hint] = match modal.focus {
                    LeadField::Smoker => SMOKER_HINTS,
                    LeadField::Gender => GENDER_HINTS,
                    LeadField::Submit => SUBMIT_HINTS,
                    _ => &[],
                };
                focused.iter().chain(FORM_HINTS).copied().collect()
            }
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(KeyHints::new(state), term.area());
        term
    }

    #[test]
    fn test_calculator_hints() {
        let state = create_test_state();
        let term = render(&state);

        assert!(term.buffer_contains("←/→ adjust"));
        assert!(term.buffer_contains("c get quote"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_form_hints_depend_on_focus() {
        let mut state = create_test_state();
        state.open_quote_modal();

        let term = render(&state);
        assert!(term.buffer_contains("Ctrl+S submit"));
        assert!(!term.buffer_contains("toggle"));

        if let Some(modal) = state.quote_modal.as_mut() {
            modal.focus = LeadField::Smoker;
        }
        let term = render(&state);
        assert!(term.buffer_contains("y/n choose"));
    }

    #[test]
    fn test_success_hints() {
        let mut state = create_test_state();
        state.open_quote_modal();
        if let Some(modal) = state.quote_modal.as_mut() {
            modal.status = SubmissionStatus::Success;
        }

        let term = render(&state);
        assert!(term.buffer_contains("Enter/Esc close"));
        assert!(!term.buffer_contains("quit"));
    }
}
