//! Cumulative coverage projection for the chart
//!
//! The chart plots one point per year index, starting from a zero baseline:
//! point `i` is `(i, monthly_amount × 12 × i)` for `i` in `0..=years`.

use crate::calculator::total_protection;

/// One point of the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub year_index: u32,
    pub cumulative_value: u64,
}

/// Build the `years + 1` projection points.
pub fn project(monthly_amount: u64, years: u32) -> Vec<ChartPoint> {
    (0..=years)
        .map(|year_index| ChartPoint {
            year_index,
            cumulative_value: total_protection(monthly_amount, year_index),
        })
        .collect()
}

/// Memoised projection keyed on the `(monthly_amount, years)` pair.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    key: Option<(u64, u32)>,
    points: Vec<ChartPoint>,
    computations: usize,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the projection, recomputing only when the inputs changed.
    pub fn points(&mut self, monthly_amount: u64, years: u32) -> &[ChartPoint] {
        if self.key != Some((monthly_amount, years)) {
            self.points = project(monthly_amount, years);
            self.key = Some((monthly_amount, years));
            self.computations += 1;
        }
        &self.points
    }

    /// How many times the projection has been built.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

/// Target number of intervals on the value axis
pub const AXIS_INTERVALS: u64 = 4;

/// Value-axis scale with evenly spaced "nice" ticks.
///
/// Derived from the maximum value only. A zero maximum produces a single
/// `0` tick and an upper bound of 1, so ratios never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisScale {
    pub upper: u64,
    pub ticks: Vec<u64>,
}

impl AxisScale {
    pub fn for_max(max_value: u64) -> Self {
        if max_value == 0 {
            return Self {
                upper: 1,
                ticks: vec![0],
            };
        }

        let step = nice_step(max_value.div_ceil(AXIS_INTERVALS));
        let upper = max_value.div_ceil(step) * step;
        let ticks = (0..=upper / step).map(|i| i * step).collect();
        Self { upper, ticks }
    }

    /// Position of `value` on the axis in `[0.0, 1.0]`.
    pub fn ratio(&self, value: u64) -> f64 {
        (value as f64 / self.upper as f64).clamp(0.0, 1.0)
    }
}

/// Smallest of 1, 2, 5 or 10 times a power of ten that is `>= raw`.
fn nice_step(raw: u64) -> u64 {
    let raw = raw.max(1);
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1u64, 2, 5, 10]
        .iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= raw)
        .unwrap_or(magnitude * 10)
}
