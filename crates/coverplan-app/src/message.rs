//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::quote::ModalId;
use coverplan_core::{Slider, SmokerStatus};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (submitting spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Calculator Messages
    // ─────────────────────────────────────────────────────────
    /// Move a slider by a number of steps (negative moves down)
    AdjustSlider { slider: Slider, steps: i64 },

    /// Jump a slider to its minimum or maximum
    JumpSlider { slider: Slider, to_max: bool },

    /// Move calculator focus forward
    CalculatorFocusNext,

    /// Move calculator focus backward
    CalculatorFocusPrev,

    /// Move the chart tooltip cursor by a number of years
    MoveChartCursor(i32),

    // ─────────────────────────────────────────────────────────
    // Quote Modal Messages
    // ─────────────────────────────────────────────────────────
    /// Snapshot the calculator and open a fresh quote modal
    OpenQuoteModal,

    /// Close the modal, discarding the form
    CloseQuoteModal,

    QuoteFocusNext,
    QuoteFocusPrev,

    /// Append a character to the focused text field
    QuoteInput(char),

    QuoteBackspace,

    /// Clear the focused text field
    QuoteClearField,

    ToggleSmoker,
    SetSmoker(SmokerStatus),

    /// Step the gender field through the suggestions
    CycleGender { forward: bool },

    /// Submit the quote form
    SubmitQuote,

    /// The sink acknowledged the submission from modal session `modal_id`
    QuoteSubmitted { modal_id: ModalId },

    /// The sink failed the submission from modal session `modal_id`
    QuoteSubmitFailed { modal_id: ModalId, error: String },
}
