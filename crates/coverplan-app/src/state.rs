//! Application state (Model in TEA pattern)

use coverplan_core::{AppPhase, CalculatorState, ChartPoint, ProjectionCache, Slider};

use crate::config::Settings;
use crate::quote::{ModalId, QuoteModalState};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Calculator and chart, sliders receive input
    #[default]
    Calculator,

    /// Quote modal open, all input goes to the form
    QuoteModal,
}

/// Focusable elements of the calculator panel, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorFocus {
    #[default]
    MonthlyAmount,
    Years,
    GetQuote,
}

impl CalculatorFocus {
    pub fn next(self) -> Self {
        match self {
            Self::MonthlyAmount => Self::Years,
            Self::Years => Self::GetQuote,
            Self::GetQuote => Self::MonthlyAmount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::MonthlyAmount => Self::GetQuote,
            Self::Years => Self::MonthlyAmount,
            Self::GetQuote => Self::Years,
        }
    }

    /// The slider under focus, if any
    pub fn slider(self) -> Option<Slider> {
        match self {
            Self::MonthlyAmount => Some(Slider::MonthlyAmount),
            Self::Years => Some(Slider::Years),
            Self::GetQuote => None,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    pub calculator: CalculatorState,
    pub calculator_focus: CalculatorFocus,

    /// Year index under the chart tooltip; `None` follows the last point
    chart_cursor: Option<u32>,

    /// Open quote modal. Dropped on close.
    pub quote_modal: Option<QuoteModalState>,

    projection: ProjectionCache,
    next_modal_id: ModalId,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState, seeding the calculator from settings
    pub fn with_settings(settings: Settings) -> Self {
        let calculator = CalculatorState::new(
            settings.calculator.initial_monthly_amount,
            settings.calculator.initial_years,
        );

        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Calculator,
            settings,
            calculator,
            calculator_focus: CalculatorFocus::default(),
            chart_cursor: None,
            quote_modal: None,
            projection: ProjectionCache::new(),
            next_modal_id: 1,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Chart
    // ─────────────────────────────────────────────────────────

    /// Projection for the current calculator values (memoised)
    pub fn projection_points(&mut self) -> &[ChartPoint] {
        self.projection
            .points(self.calculator.monthly_amount(), self.calculator.years())
    }

    pub fn projection_computations(&self) -> usize {
        self.projection.computations()
    }

    /// Year index under the tooltip, always within `0..=years`
    pub fn chart_cursor(&self) -> u32 {
        let years = self.calculator.years();
        self.chart_cursor.map_or(years, |c| c.min(years))
    }

    pub fn move_chart_cursor(&mut self, delta: i32) {
        let years = i64::from(self.calculator.years());
        let next = (i64::from(self.chart_cursor()) + i64::from(delta)).clamp(0, years);
        // next is within 0..=u32::MAX after the clamp
        self.chart_cursor = Some(next as u32);
    }

    // ─────────────────────────────────────────────────────────
    // Quote modal
    // ─────────────────────────────────────────────────────────

    /// Open a fresh modal with a copy of the current calculation.
    pub fn open_quote_modal(&mut self) -> ModalId {
        let id = self.next_modal_id;
        self.next_modal_id += 1;

        self.quote_modal = Some(QuoteModalState::new(id, self.calculator.snapshot()));
        self.ui_mode = UiMode::QuoteModal;
        id
    }

    pub fn close_quote_modal(&mut self) {
        self.quote_modal = None;
        self.ui_mode = UiMode::Calculator;
    }

    /// The open modal, if it belongs to session `modal_id`
    pub fn quote_modal_for(&mut self, modal_id: ModalId) -> Option<&mut QuoteModalState> {
        self.quote_modal.as_mut().filter(|m| m.id == modal_id)
    }
}
