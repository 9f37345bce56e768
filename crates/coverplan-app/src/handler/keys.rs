//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::quote::{QuoteModalState, SubmissionStatus};
use crate::state::{AppState, CalculatorFocus, UiMode};
use coverplan_core::{LeadField, SmokerStatus};

/// Steps moved by PageUp/PageDown
const PAGE_STEPS: i64 = 10;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Calculator => handle_key_calculator(state, key),
        UiMode::QuoteModal => match state.quote_modal.as_ref() {
            Some(modal) => handle_key_quote_modal(modal, key),
            None => Some(Message::CloseQuoteModal),
        },
    }
}

/// Handle key events on the calculator screen
fn handle_key_calculator(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.calculator_focus;

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Down => Some(Message::CalculatorFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::CalculatorFocusPrev),

        InputKey::Char('c') => Some(Message::OpenQuoteModal),
        InputKey::Enter if focus == CalculatorFocus::GetQuote => Some(Message::OpenQuoteModal),

        InputKey::Char('[') => Some(Message::MoveChartCursor(-1)),
        InputKey::Char(']') => Some(Message::MoveChartCursor(1)),

        InputKey::Left | InputKey::Char('h') => slider_step(focus, -1),
        InputKey::Right | InputKey::Char('l') => slider_step(focus, 1),
        InputKey::PageDown => slider_step(focus, -PAGE_STEPS),
        InputKey::PageUp => slider_step(focus, PAGE_STEPS),
        InputKey::Home => focus.slider().map(|slider| Message::JumpSlider {
            slider,
            to_max: false,
        }),
        InputKey::End => focus.slider().map(|slider| Message::JumpSlider {
            slider,
            to_max: true,
        }),

        _ => None,
    }
}

fn slider_step(focus: CalculatorFocus, steps: i64) -> Option<Message> {
    focus
        .slider()
        .map(|slider| Message::AdjustSlider { slider, steps })
}

/// Handle key events while the quote modal is open
fn handle_key_quote_modal(modal: &QuoteModalState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match modal.status {
        SubmissionStatus::Success => match key {
            InputKey::Enter | InputKey::Esc => Some(Message::CloseQuoteModal),
            _ => None,
        },
        SubmissionStatus::Submitting => match key {
            InputKey::Esc => Some(Message::CloseQuoteModal),
            _ => None,
        },
        SubmissionStatus::Editing => handle_key_quote_form(modal.focus, key),
    }
}

/// Handle key events on the editable quote form
fn handle_key_quote_form(focus: LeadField, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => return Some(Message::CloseQuoteModal),
        InputKey::Tab | InputKey::Down => return Some(Message::QuoteFocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::QuoteFocusPrev),
        InputKey::CharCtrl('s') => return Some(Message::SubmitQuote),
        _ => {}
    }

    match focus {
        LeadField::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::SubmitQuote),
            _ => None,
        },
        LeadField::Smoker => match key {
            InputKey::Left | InputKey::Right | InputKey::Char(' ') => Some(Message::ToggleSmoker),
            InputKey::Char('y' | 'Y') => Some(Message::SetSmoker(SmokerStatus::Yes)),
            InputKey::Char('n' | 'N') => Some(Message::SetSmoker(SmokerStatus::No)),
            InputKey::Enter => Some(Message::QuoteFocusNext),
            _ => None,
        },
        LeadField::Gender => match key {
            InputKey::Left => Some(Message::CycleGender { forward: false }),
            InputKey::Right => Some(Message::CycleGender { forward: true }),
            _ => handle_key_text_field(key),
        },
        LeadField::Name | LeadField::Birthday | LeadField::Phone | LeadField::Email => {
            handle_key_text_field(key)
        }
    }
}

fn handle_key_text_field(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::QuoteInput(c)),
        InputKey::Backspace => Some(Message::QuoteBackspace),
        InputKey::CharCtrl('u') => Some(Message::QuoteClearField),
        InputKey::Enter => Some(Message::QuoteFocusNext),
        _ => None,
    }
}
