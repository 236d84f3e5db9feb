// File: crates/spectrum-core/src/text.rs
// Summary: Text shaper for axis titles, tick labels and the legend using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const SANS: &[&str] = &["Helvetica Neue", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"];

/// Horizontal anchor of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(SANS);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }

        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, false).longest_line()
    }

    /// Draw `text` with its vertical middle on `y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let mut p = self.layout(text, size, color, false);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        p.paint(canvas, (left, y - p.height() * 0.5));
    }

    /// Axis title: bold, centered on (`x`, `y`), optionally rotated a quarter turn counter-clockwise.
    pub fn draw_title(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, vertical: bool) {
        let mut p = self.layout(text, size, color, true);
        let (w, h) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate((x, y));
        if vertical {
            canvas.rotate(-90.0, None);
        }
        p.paint(canvas, (-w * 0.5, -h * 0.5));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
