// File: crates/spectrum-core/src/types.rs
// Summary: Shared surface constants, margins and the plot rectangle derived from them.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
/// Room is left for the y tick labels and title (left), the x tick labels
/// and title (bottom) and the legend (top).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(84, 24, 44, 64)
    }
}

/// Plot area in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Inset a `width`×`height` surface; degenerate surfaces collapse to a 1px plot.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
