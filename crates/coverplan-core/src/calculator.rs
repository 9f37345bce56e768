//! Calculator model: bounded slider values and the derived protection total

use serde::{Deserialize, Serialize};

/// Closed range with a step, mirroring range-input semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl SliderRange {
    pub const fn new(min: u64, max: u64, step: u64) -> Self {
        Self { min, max, step }
    }

    /// Clamp `value` into `[min, max]` and snap it to the nearest step.
    pub fn clamp(&self, value: u64) -> u64 {
        let clamped = value.clamp(self.min, self.max);
        if self.step == 0 {
            return clamped;
        }
        let offset = clamped - self.min;
        let snapped = self.min + ((offset + self.step / 2) / self.step) * self.step;
        snapped.min(self.max)
    }

    /// Move `value` by `steps` steps (negative moves down), staying in range.
    pub fn step_by(&self, value: u64, steps: i64) -> u64 {
        let delta = self.step.saturating_mul(steps.unsigned_abs());
        let moved = if steps < 0 {
            value.saturating_sub(delta)
        } else {
            value.saturating_add(delta)
        };
        self.clamp(moved)
    }

    /// Fill percentage of the visual track, in `[0, 100]`.
    ///
    /// A degenerate range (`min == max`) reports an empty track.
    pub fn fill_ratio(&self, value: u64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let value = value.clamp(self.min, self.max);
        let ratio = (value - self.min) as f64 * 100.0 / (self.max - self.min) as f64;
        ratio.clamp(0.0, 100.0)
    }
}

/// Monthly income/expenses control: RM 0 to RM 100,000 in RM 500 steps.
pub const MONTHLY_AMOUNT: SliderRange = SliderRange::new(0, 100_000, 500);

/// Protection duration control: 1 to 20 years.
pub const YEARS: SliderRange = SliderRange::new(1, 20, 1);

pub const DEFAULT_MONTHLY_AMOUNT: u64 = 5_000;
pub const DEFAULT_YEARS: u32 = 5;

/// Identifies one of the two calculator controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    MonthlyAmount,
    Years,
}

impl Slider {
    pub fn range(self) -> SliderRange {
        match self {
            Slider::MonthlyAmount => MONTHLY_AMOUNT,
            Slider::Years => YEARS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slider::MonthlyAmount => "MONTHLY INCOME / EXPENSES",
            Slider::Years => "PROTECTION DURATION",
        }
    }
}

/// `monthly_amount × 12 × years`
pub fn total_protection(monthly_amount: u64, years: u32) -> u64 {
    monthly_amount * 12 * u64::from(years)
}

/// Values derived from the calculator on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTotals {
    pub total_protection: u64,
}

/// Snapshot of a calculation handed to the quote modal and the lead sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationData {
    pub monthly_amount: u64,
    pub years: u32,
    pub total_protection_needed: u64,
}

/// The two source numbers of the calculator.
///
/// Fields are private so every write goes through the clamping setters;
/// both values are always inside their [`SliderRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorState {
    monthly_amount: u64,
    years: u32,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHLY_AMOUNT, DEFAULT_YEARS)
    }
}

impl CalculatorState {
    pub fn new(monthly_amount: u64, years: u32) -> Self {
        Self {
            monthly_amount: MONTHLY_AMOUNT.clamp(monthly_amount),
            years: clamp_years(u64::from(years)),
        }
    }

    pub fn monthly_amount(&self) -> u64 {
        self.monthly_amount
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn value(&self, slider: Slider) -> u64 {
        match slider {
            Slider::MonthlyAmount => self.monthly_amount,
            Slider::Years => u64::from(self.years),
        }
    }

    pub fn set_monthly_amount(&mut self, value: u64) {
        self.monthly_amount = MONTHLY_AMOUNT.clamp(value);
    }

    /// Step a slider by `steps` increments.
    pub fn adjust(&mut self, slider: Slider, steps: i64) {
        match slider {
            Slider::MonthlyAmount => {
                self.monthly_amount = MONTHLY_AMOUNT.step_by(self.monthly_amount, steps);
            }
            Slider::Years => {
                self.years = clamp_years(YEARS.step_by(u64::from(self.years), steps));
            }
        }
    }

    /// Jump a slider to its minimum or maximum.
    pub fn jump_to_bound(&mut self, slider: Slider, to_max: bool) {
        let bounds = slider.range();
        let target = if to_max { bounds.max } else { bounds.min };
        match slider {
            Slider::MonthlyAmount => self.set_monthly_amount(target),
            Slider::Years => self.years = clamp_years(target),
        }
    }

    pub fn fill_ratio(&self, slider: Slider) -> f64 {
        slider.range().fill_ratio(self.value(slider))
    }

    pub fn totals(&self) -> DerivedTotals {
        DerivedTotals {
            total_protection: total_protection(self.monthly_amount, self.years),
        }
    }

    /// Capture the current values by copy for the quote modal.
    pub fn snapshot(&self) -> CalculationData {
        CalculationData {
            monthly_amount: self.monthly_amount,
            years: self.years,
            total_protection_needed: self.totals().total_protection,
        }
    }
}

fn clamp_years(value: u64) -> u32 {
    // YEARS.max fits in u32
    YEARS.clamp(value) as u32
}
