// File: crates/spectrum-core/src/renderer.rs
// Summary: Owner of the single live chart; every render disposes the old instance before drawing anew.

use tracing::{debug, info};

use crate::chart::{BarChart, Frame, RenderOptions};
use crate::densify::DenseAxis;
use crate::error::Result;

/// A drawn chart: the model plus the pixels it was rasterized to.
#[derive(Debug)]
pub struct ChartInstance {
    id: u64,
    chart: BarChart,
    frame: Frame,
}

impl ChartInstance {
    /// Monotonic per-renderer sequence number; tells rebuilds apart.
    pub fn id(&self) -> u64 { self.id }

    pub fn chart(&self) -> &BarChart { &self.chart }

    pub fn frame(&self) -> &Frame { &self.frame }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> { self.frame.to_png_bytes() }

    /// Base64 PNG data URL of what is currently drawn.
    pub fn to_base64_image(&self) -> Result<String> { self.frame.to_base64_image() }

    /// Tear the instance down; nothing of it survives.
    pub fn destroy(self) {
        info!(id = self.id, "disposing chart");
    }
}

pub struct Renderer {
    opts: RenderOptions,
    current: Option<ChartInstance>,
    next_id: u64,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, current: None, next_id: 1 }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    pub fn current(&self) -> Option<&ChartInstance> { self.current.as_ref() }

    pub fn has_chart(&self) -> bool { self.current.is_some() }

    /// Replace the current chart with a fresh bar chart of `axis`. The old
    /// instance is destroyed first, so a failed draw leaves no chart behind.
    pub fn render(&mut self, axis: &DenseAxis) -> Result<&ChartInstance> {
        if let Some(old) = self.current.take() {
            old.destroy();
        }

        let chart = BarChart::from_dense(axis, &self.opts.theme);
        let frame = chart.render_to_rgba8(&self.opts)?;
        let id = self.next_id;
        self.next_id += 1;
        info!(id, ticks = axis.len(), "created chart");
        debug!(x_min = chart.x_axis.min, x_max = chart.x_axis.max, y_max = chart.y_axis.max, "chart bounds");

        Ok(&*self.current.insert(ChartInstance { id, chart, frame }))
    }
}

impl Default for Renderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}
