//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::sink::LeadSink;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, sink: Arc<S>)
where
    S: LeadSink + Sync + 'static,
{
    match action {
        UpdateAction::SubmitLead { modal_id, payload } => {
            tokio::spawn(async move {
                let message = match sink.submit(&payload).await {
                    Ok(()) => Message::QuoteSubmitted { modal_id },
                    Err(e) => {
                        if e.is_recoverable() {
                            warn!(modal_id, "Lead delivery failed: {}", e);
                        } else {
                            error!(modal_id, "Lead delivery failed: {:?}", e);
                        }
                        Message::QuoteSubmitFailed {
                            modal_id,
                            error: e.user_message(),
                        }
                    }
                };

                // The loop is gone once the app has quit
                if msg_tx.send(message).await.is_err() {
                    debug!(modal_id, "Message channel closed before lead result arrived");
                }
            });
        }
    }
}
