//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::sink::LeadSink;
use crate::state::AppState;

/// Process a message through the TEA update function, following up
/// messages until none remain and spawning any resulting actions
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    sink: &Arc<S>,
) where
    S: LeadSink + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(sink));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
