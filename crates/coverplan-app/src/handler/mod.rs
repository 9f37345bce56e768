//! State transitions for coverplan
//!
//! `update` dispatches every [`Message`]; `keys` turns key presses into
//! messages for the calculator screen or the quote modal; `quote` owns the
//! modal lifecycle and the submission round trip.

pub(crate) mod keys;
pub(crate) mod quote;
pub(crate) mod update;


use crate::message::Message;
use crate::quote::ModalId;
use coverplan_core::QuotePayload;

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects requested by `update`, run outside of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver a lead to the sink in a background task, reporting back
    /// with `QuoteSubmitted` / `QuoteSubmitFailed` for `modal_id`
    SubmitLead {
        modal_id: ModalId,
        payload: QuotePayload,
    },
}

/// What a single `update` call asks for next
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Fed straight back into `update`
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
