// File: crates/spectrum-core/src/theme.rs
// Summary: Light/Dark theming for the spectrum bar chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub bar_fill: skia::Color,
    pub bar_stroke: skia::Color,
}

impl Theme {
    /// White page with 50%/80% black bars.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            axis_line: skia::Color::from_argb(64, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 102, 102, 102),
            tick: skia::Color::from_argb(255, 102, 102, 102),
            bar_fill: skia::Color::from_argb(128, 0, 0, 0),
            bar_stroke: skia::Color::from_argb(204, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_fill: skia::Color::from_argb(128, 255, 255, 255),
            bar_stroke: skia::Color::from_argb(204, 255, 255, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
