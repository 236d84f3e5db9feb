// File: crates/spectrum-core/src/chart.rs
// Summary: Bar chart model and headless rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;

use base64::Engine as _;
use skia_safe as skia;

use crate::densify::{DenseAxis, MASS_STEP};
use crate::error::{Result, SpectrumError};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::ticks::{autoskip_stride, format_tick, nice_bounds, nice_step, ticks};
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::Axis;

pub const MASS_AXIS_TITLE: &str = "Massa (m/z)";
pub const INTENSITY_AXIS_TITLE: &str = "Intensidade";
pub const DATASET_LABEL: &str = "Intensidade";

/// Share of a category slot covered by its bar.
const BAR_FRACTION: f32 = 0.72;
/// Aim for about this many value ticks on the y axis.
const Y_TICK_TARGET: usize = 8;
const TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 14.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text depends on host fonts; turn off for byte-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// The single dataset of a spectrum chart.
#[derive(Clone, Debug)]
pub struct BarDataset {
    pub label: String,
    /// (mass, intensity), one bar per category.
    pub data: Vec<(f64, f64)>,
    pub fill: skia::Color,
    pub stroke: skia::Color,
    pub border_width: f32,
}

#[derive(Clone, Debug)]
pub struct BarChart {
    pub dataset: BarDataset,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

/// Rasterized chart, tightly packed unpremultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn row_bytes(&self) -> usize { self.width as usize * 4 }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| SpectrumError::Render("pixel buffer does not match frame size".into()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// PNG encoded as a `data:image/png;base64,` URL.
    pub fn to_base64_image(&self) -> Result<String> {
        let png = self.to_png_bytes()?;
        Ok(format!("data:image/png;base64,{}", base64::engine::general_purpose::STANDARD.encode(png)))
    }
}

impl BarChart {
    /// Bar chart over a dense mass axis: categories are the mass ticks, the
    /// value axis starts at zero.
    pub fn from_dense(axis: &DenseAxis, theme: &Theme) -> Self {
        let data: Vec<(f64, f64)> = axis.iter().map(|(m, i)| (m as f64, i)).collect();
        let (x_min, x_max) = match (axis.min_mass(), axis.max_mass()) {
            (Some(lo), Some(hi)) => (lo as f64, hi as f64),
            _ => (0.0, 0.0),
        };
        let (y_lo, y_hi) = axis.intensity_range().unwrap_or((0.0, 0.0));

        let chart = Self {
            dataset: BarDataset {
                label: DATASET_LABEL.to_string(),
                data,
                fill: theme.bar_fill,
                stroke: theme.bar_stroke,
                border_width: 1.0,
            },
            x_axis: Axis::new(MASS_AXIS_TITLE, x_min, x_max).with_step(MASS_STEP as f64),
            y_axis: Axis::new(INTENSITY_AXIS_TITLE, y_lo, y_hi).begin_at_zero(),
        };
        debug_assert_eq!(chart.category_count(), axis.len().max(1), "x layout must match the dense axis");
        chart
    }

    /// Number of category slots between the x bounds.
    pub fn category_count(&self) -> usize {
        let step = self.x_axis.tick_step.unwrap_or(1.0);
        (((self.x_axis.max - self.x_axis.min) / step).round().max(0.0) as usize) + 1
    }

    /// Value-axis bounds and tick step after rounding out to nice numbers.
    pub fn value_ticks(&self) -> (f64, f64, f64) {
        let step = self
            .y_axis
            .tick_step
            .unwrap_or_else(|| nice_step(self.y_axis.max - self.y_axis.min, Y_TICK_TARGET));
        let (lo, hi) = nice_bounds(self.y_axis.min, self.y_axis.max, step);
        (lo, hi, step)
    }

    /// Rasterize into an RGBA8 frame using a CPU surface.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Frame> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| SpectrumError::Render(format!("failed to create {w}x{h} raster surface")))?;

        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            let plot = PlotRect::inset(w, h, &opts.insets);
            let layout = Layout::new(self, plot);
            let shaper = opts.draw_labels.then(TextShaper::new);

            draw_grid(canvas, &layout, &opts.theme);
            draw_bars(canvas, &layout, &self.dataset);
            draw_axes(canvas, &layout, &opts.theme);
            draw_legend(canvas, shaper.as_ref(), w, &self.dataset, &opts.theme);
            if let Some(shaper) = &shaper {
                draw_labels(canvas, shaper, &layout, self, &opts.theme);
            }
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(SpectrumError::Render("reading back surface pixels failed".into()));
        }
        Ok(Frame { pixels, width: w as u32, height: h as u32 })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_rgba8(opts)?.to_png_bytes()
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Data-to-pixel mapping shared by every drawing pass.
struct Layout {
    plot: PlotRect,
    x_min: f64,
    step: f64,
    slot_px: f32,
    categories: usize,
    y_lo: f64,
    y_hi: f64,
    y_step: f64,
}

impl Layout {
    fn new(chart: &BarChart, plot: PlotRect) -> Self {
        let categories = chart.category_count();
        let (y_lo, y_hi, y_step) = chart.value_ticks();
        Self {
            plot,
            x_min: chart.x_axis.min,
            step: chart.x_axis.tick_step.unwrap_or(1.0),
            slot_px: plot.width() / categories as f32,
            categories,
            y_lo,
            y_hi,
            y_step,
        }
    }

    /// Center of the category slot holding `x`.
    fn sx(&self, x: f64) -> f32 {
        let k = ((x - self.x_min) / self.step) as f32;
        self.plot.left + (k + 0.5) * self.slot_px
    }

    fn sy(&self, y: f64) -> f32 {
        // Halved so the span of bounds near f64::MAX stays finite.
        let span = (self.y_hi * 0.5 - self.y_lo * 0.5).max(1e-12);
        self.plot.bottom - ((y * 0.5 - self.y_lo * 0.5) / span) as f32 * self.plot.height()
    }

    fn label_stride(&self, max_chars: usize) -> usize {
        autoskip_stride(self.categories, max_chars, self.plot.width())
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn mass_label_chars(layout: &Layout) -> usize {
    let last = layout.x_min + layout.step * (layout.categories.saturating_sub(1)) as f64;
    format_tick(layout.x_min).len().max(format_tick(last).len())
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let p = &layout.plot;

    for v in ticks(layout.y_lo, layout.y_hi, layout.y_step) {
        let y = layout.sy(v);
        canvas.draw_line((p.left, y), (p.right, y), &paint);
    }

    let stride = layout.label_stride(mass_label_chars(layout));
    for k in (0..layout.categories).step_by(stride) {
        let x = p.left + (k as f32 + 0.5) * layout.slot_px;
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, layout: &Layout, dataset: &BarDataset) {
    let fill = fill_paint(dataset.fill);
    let stroke = stroke_paint(dataset.stroke, dataset.border_width);
    let half = (layout.slot_px * BAR_FRACTION * 0.5).max(0.5);
    let base = layout.sy(0.0_f64.clamp(layout.y_lo, layout.y_hi));

    for &(x, y) in &dataset.data {
        if y == 0.0 {
            continue;
        }
        let cx = layout.sx(x);
        let top = layout.sy(y);
        let rect = skia::Rect::from_ltrb(cx - half, top.min(base), cx + half, top.max(base));
        canvas.draw_rect(rect, &fill);
        if dataset.border_width > 0.0 {
            canvas.draw_rect(rect, &stroke);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    let p = &layout.plot;
    let zero = layout.sy(0.0_f64.clamp(layout.y_lo, layout.y_hi));
    canvas.draw_line((p.left, zero), (p.right, zero), &paint);
    canvas.draw_line((p.left, p.top), (p.left, p.bottom), &paint);
}

fn draw_legend(canvas: &skia::Canvas, shaper: Option<&TextShaper>, width: i32, dataset: &BarDataset, theme: &Theme) {
    const BOX_W: f32 = 40.0;
    const BOX_H: f32 = 12.0;
    const GAP: f32 = 10.0;
    let y = 20.0;

    let text_w = shaper.map(|s| s.measure_width(&dataset.label, TICK_FONT)).unwrap_or(0.0);
    let left = (width as f32 - (BOX_W + GAP + text_w)) * 0.5;
    let rect = skia::Rect::from_xywh(left, y - BOX_H * 0.5, BOX_W, BOX_H);
    canvas.draw_rect(rect, &fill_paint(dataset.fill));
    canvas.draw_rect(rect, &stroke_paint(dataset.stroke, dataset.border_width.max(1.0)));

    if let Some(shaper) = shaper {
        shaper.draw(canvas, &dataset.label, left + BOX_W + GAP, y, TICK_FONT, theme.tick, Anchor::Left);
    }
}

fn draw_labels(canvas: &skia::Canvas, shaper: &TextShaper, layout: &Layout, chart: &BarChart, theme: &Theme) {
    let p = &layout.plot;

    // Value ticks, right-aligned against the plot.
    for v in ticks(layout.y_lo, layout.y_hi, layout.y_step) {
        shaper.draw(canvas, &format_tick(v), p.left - 8.0, layout.sy(v), TICK_FONT, theme.tick, Anchor::Right);
    }

    // Mass ticks, thinned so neighbours never collide.
    let stride = layout.label_stride(mass_label_chars(layout));
    for k in (0..layout.categories).step_by(stride) {
        let mass = layout.x_min + layout.step * k as f64;
        shaper.draw(canvas, &format_tick(mass), layout.sx(mass), p.bottom + 14.0, TICK_FONT, theme.tick, Anchor::Center);
    }

    let cx = (p.left + p.right) * 0.5;
    shaper.draw_title(canvas, &chart.x_axis.label, cx, p.bottom + 42.0, TITLE_FONT, theme.axis_label, false);
    let cy = (p.top + p.bottom) * 0.5;
    shaper.draw_title(canvas, &chart.y_axis.label, 20.0, cy, TITLE_FONT, theme.axis_label, true);
}
