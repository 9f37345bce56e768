//! coverplan-app - Application state and orchestration for coverplan
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, configuration loading, the quote submission state machine and
//! the lead sinks that receive submissions.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod quote;
pub mod sink;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use quote::{ModalId, QuoteModalState, SubmissionStatus};
pub use sink::{ConfiguredSink, LeadSink, SimulatedSink, WebhookSink};
pub use state::{AppState, CalculatorFocus, UiMode};
