//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use coverplan_core::AppPhase;
use tracing::debug;

use super::{keys::handle_key, quote, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if let Some(modal) = state.quote_modal.as_mut() {
                modal.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Calculator Messages
        // ─────────────────────────────────────────────────────────
        Message::AdjustSlider { slider, steps } => {
            state.calculator.adjust(slider, steps);
            debug!(
                monthly_amount = state.calculator.monthly_amount(),
                years = state.calculator.years(),
                "Calculator adjusted"
            );
            UpdateResult::none()
        }

        Message::JumpSlider { slider, to_max } => {
            state.calculator.jump_to_bound(slider, to_max);
            UpdateResult::none()
        }

        Message::CalculatorFocusNext => {
            state.calculator_focus = state.calculator_focus.next();
            UpdateResult::none()
        }

        Message::CalculatorFocusPrev => {
            state.calculator_focus = state.calculator_focus.prev();
            UpdateResult::none()
        }

        Message::MoveChartCursor(delta) => {
            state.move_chart_cursor(delta);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Quote Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenQuoteModal => quote::handle_open(state),
        Message::CloseQuoteModal => quote::handle_close(state),
        Message::SubmitQuote => quote::handle_submit(state),
        Message::QuoteSubmitted { modal_id } => quote::handle_submitted(state, modal_id),
        Message::QuoteSubmitFailed { modal_id, error } => {
            quote::handle_submit_failed(state, modal_id, &error)
        }

        Message::QuoteFocusNext => quote::with_modal(state, |m| m.focus_next()),
        Message::QuoteFocusPrev => quote::with_modal(state, |m| m.focus_prev()),
        Message::QuoteInput(c) => quote::with_modal(state, |m| m.insert_char(c)),
        Message::QuoteBackspace => quote::with_modal(state, |m| m.backspace()),
        Message::QuoteClearField => quote::with_modal(state, |m| m.clear_field()),
        Message::ToggleSmoker => quote::with_modal(state, |m| m.toggle_smoker()),
        Message::SetSmoker(status) => quote::with_modal(state, |m| m.set_smoker(status)),
        Message::CycleGender { forward } => {
            quote::with_modal(state, |m| m.cycle_gender(forward))
        }
    }
}
