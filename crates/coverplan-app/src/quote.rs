//! Quote modal state: the lead form and its submission state machine
//!
//! ```text
//! Editing ──submit (complete form)──▶ Submitting ──ack──▶ Success
//!    ▲                                    │
//!    └────────────── sink failure ────────┘
//! ```
//!
//! `Success` is terminal for the session; closing the modal drops the whole
//! [`QuoteModalState`] and the next open starts from an empty form.

use coverplan_core::{
    format_currency, CalculationData, LeadField, LeadForm, QuotePayload, SmokerStatus,
};

/// Identifies one open→close lifetime of the modal
pub type ModalId = u64;

/// Submission lifecycle of the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Success,
}

/// Result of asking the form to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form moved to `Submitting`; the payload should go to the sink
    Started(QuotePayload),
    /// Required fields are empty; status unchanged
    Incomplete(Vec<LeadField>),
    /// Not in `Editing`, nothing happens
    Ignored,
}

/// Spinner frames shown while submitting
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// State of one open quote modal
#[derive(Debug, Clone)]
pub struct QuoteModalState {
    pub id: ModalId,
    /// Copied from the calculator when the modal opened
    pub calculation: CalculationData,
    pub form: LeadForm,
    pub focus: LeadField,
    pub status: SubmissionStatus,
    /// Missing-field or delivery error shown above the submit button
    pub error: Option<String>,
    spinner_frame: usize,
}

impl QuoteModalState {
    pub fn new(id: ModalId, calculation: CalculationData) -> Self {
        Self {
            id,
            calculation,
            form: LeadForm::new(),
            focus: LeadField::default(),
            status: SubmissionStatus::Editing,
            error: None,
            spinner_frame: 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.status == SubmissionStatus::Editing
    }

    pub fn summary_text(&self) -> String {
        format!(
            "Based on your inputs, you need approximately {} in protection.",
            format_currency(self.calculation.total_protection_needed)
        )
    }

    pub fn success_heading(&self) -> String {
        format!("Thank you, {}!", self.form.name.trim())
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn tick(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        if self.is_editing() {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.is_editing() {
            self.focus = self.focus.prev();
        }
    }

    /// Append a character to the focused text field.
    pub fn insert_char(&mut self, c: char) {
        if !self.is_editing() {
            return;
        }
        if let Some(value) = self.form.text_mut(self.focus) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        if let Some(value) = self.form.text_mut(self.focus) {
            value.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if !self.is_editing() {
            return;
        }
        if let Some(value) = self.form.text_mut(self.focus) {
            value.clear();
        }
    }

    pub fn toggle_smoker(&mut self) {
        if self.is_editing() {
            self.form.is_smoker = self.form.is_smoker.toggle();
        }
    }

    pub fn set_smoker(&mut self, status: SmokerStatus) {
        if self.is_editing() {
            self.form.is_smoker = status;
        }
    }

    pub fn cycle_gender(&mut self, forward: bool) {
        if self.is_editing() {
            self.form.cycle_gender(forward);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Try to move `Editing → Submitting`.
    ///
    /// An incomplete form stays in `Editing` with a message naming the
    /// missing fields and focus on the first of them.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if !self.is_editing() {
            return SubmitOutcome::Ignored;
        }

        let missing = self.form.missing_required();
        if let Some(first) = missing.first() {
            self.focus = *first;
            let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            self.error = Some(format!("Please fill in: {}", names.join(", ")));
            return SubmitOutcome::Incomplete(missing);
        }

        self.status = SubmissionStatus::Submitting;
        self.error = None;
        self.spinner_frame = 0;
        SubmitOutcome::Started(QuotePayload::new(self.form.clone(), self.calculation))
    }

    /// `Submitting → Success`. Returns false if not submitting.
    pub fn complete_submit(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Success;
        true
    }

    /// `Submitting → Editing`, keeping every entered value.
    pub fn fail_submit(&mut self, error: &str) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Editing;
        self.focus = LeadField::Submit;
        self.error = Some(format!(
            "Could not send your quote: {}. Press Enter to retry.",
            error
        ));
        true
    }
}
