//! Quote modal handlers: open/close and the submission round trip

use crate::quote::{ModalId, QuoteModalState, SubmitOutcome};
use crate::state::{AppState, UiMode};
use tracing::{debug, info, warn};

use super::{UpdateAction, UpdateResult};

/// Apply an edit to the open modal, if any
pub(super) fn with_modal(
    state: &mut AppState,
    edit: impl FnOnce(&mut QuoteModalState),
) -> UpdateResult {
    if let Some(modal) = state.quote_modal.as_mut() {
        edit(modal);
    }
    UpdateResult::none()
}

pub(super) fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::QuoteModal {
        return UpdateResult::none();
    }
    let id = state.open_quote_modal();
    info!(
        modal_id = id,
        total = state.calculator.totals().total_protection,
        "Quote modal opened"
    );
    UpdateResult::none()
}

pub(super) fn handle_close(state: &mut AppState) -> UpdateResult {
    if let Some(modal) = state.quote_modal.as_ref() {
        info!(modal_id = modal.id, status = ?modal.status, "Quote modal closed");
    }
    state.close_quote_modal();
    UpdateResult::none()
}

pub(super) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(modal) = state.quote_modal.as_mut() else {
        return UpdateResult::none();
    };

    match modal.begin_submit() {
        SubmitOutcome::Started(payload) => {
            info!(modal_id = modal.id, "Submitting quote request");
            UpdateResult::action(UpdateAction::SubmitLead {
                modal_id: modal.id,
                payload,
            })
        }
        SubmitOutcome::Incomplete(missing) => {
            debug!(?missing, "Quote form incomplete");
            UpdateResult::none()
        }
        SubmitOutcome::Ignored => UpdateResult::none(),
    }
}

pub(super) fn handle_submitted(state: &mut AppState, modal_id: ModalId) -> UpdateResult {
    match state.quote_modal_for(modal_id) {
        Some(modal) => {
            if modal.complete_submit() {
                info!(modal_id, "Quote request delivered");
            }
        }
        None => debug!(modal_id, "Dropping delivery result for a closed quote modal"),
    }
    UpdateResult::none()
}

pub(super) fn handle_submit_failed(
    state: &mut AppState,
    modal_id: ModalId,
    error: &str,
) -> UpdateResult {
    match state.quote_modal_for(modal_id) {
        Some(modal) => {
            if modal.fail_submit(error) {
                warn!(modal_id, "Quote request failed: {}", error);
            }
        }
        None => debug!(
            modal_id,
            "Dropping delivery failure for a closed quote modal: {}", error
        ),
    }
    UpdateResult::none()
}
