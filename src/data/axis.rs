//! Secondary y-axis support.
//!
//! egui_plot draws every item in a single coordinate system. A trace assigned
//! to the secondary axis is rescaled linearly into the primary y range before
//! drawing, and the right-hand axis labels apply the inverse mapping.
//!
//! Both ranges are widened to whole multiples of a 1-2-5 step and to the same
//! number of steps, so a grid line on the left axis lands on a round value
//! on the right axis too.

/// Number of steps aimed for when picking a range's step size.
const TARGET_STEPS: f64 = 5.0;

/// Linear map between the primary and secondary y ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryAxisMap {
    pub primary: (f64, f64),
    pub secondary: (f64, f64),
}

impl Default for SecondaryAxisMap {
    fn default() -> Self {
        Self {
            primary: (0.0, 1.0),
            secondary: (0.0, 1.0),
        }
    }
}

impl SecondaryAxisMap {
    /// Fit both ranges to the finite values of each side, snapped to
    /// aligned round bounds.
    pub fn fit<'a>(
        primary: impl IntoIterator<Item = &'a f64>,
        secondary: impl IntoIterator<Item = &'a f64>,
    ) -> Self {
        let (p_lo, p_step, p_steps) = snap(finite_range(primary));
        let (s_lo, s_step, s_steps) = snap(finite_range(secondary));
        let steps = p_steps.max(s_steps);
        Self {
            primary: (p_lo, p_lo + steps * p_step),
            secondary: (s_lo, s_lo + steps * s_step),
        }
    }

    /// Secondary value to the position it is drawn at.
    pub fn to_primary(&self, value: f64) -> f64 {
        let (p0, p1) = self.primary;
        let (s0, s1) = self.secondary;
        p0 + (value - s0) * (p1 - p0) / (s1 - s0)
    }

    /// Drawn position back to the secondary value it represents.
    pub fn to_secondary(&self, value: f64) -> f64 {
        let (p0, p1) = self.primary;
        let (s0, s1) = self.secondary;
        s0 + (value - p0) * (s1 - s0) / (p1 - p0)
    }
}

/// Min/max over finite values. Empty input gives `(0, 1)` and a single
/// distinct value is widened by 0.5 on both sides so the span is never zero.
pub fn finite_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

/// Round step of the form 1, 2 or 5 times a power of ten, giving roughly
/// `TARGET_STEPS` steps over `span`.
pub fn nice_step(span: f64) -> f64 {
    let raw = span / TARGET_STEPS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let factor = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Lower bound, step and step count of `range` widened to step multiples.
fn snap((lo, hi): (f64, f64)) -> (f64, f64, f64) {
    let step = nice_step(hi - lo);
    let lo = (lo / step).floor() * step;
    let steps = ((hi - lo) / step - 1e-9).ceil().max(1.0);
    (lo, step, steps)
}

/// Tick label for the secondary axis: up to four decimals, trailing zeros dropped.
pub fn format_tick(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
