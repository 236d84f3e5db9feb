// File: crates/spectrum-core/src/axis.rs
// Summary: Axis model with title, bounds and tick spacing.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Fixed distance between ticks; `None` picks a "nice" step from the range.
    pub tick_step: Option<f64>,
    /// Force zero into the visible range.
    pub begin_at_zero: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_step: None, begin_at_zero: false }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.tick_step = Some(step);
        self
    }

    pub fn begin_at_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self.min = self.min.min(0.0);
        self.max = self.max.max(0.0);
        self
    }
}
