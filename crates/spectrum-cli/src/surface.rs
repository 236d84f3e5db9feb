// File: crates/spectrum-cli/src/surface.rs
// Summary: Terminal UI surface: input from a file/stdin, alerts on stderr, downloads into a directory.

use std::path::{Path, PathBuf};

use spectrum_core::{ChartInstance, Download, UiSurface};

pub struct CliSurface {
    text: String,
    out_dir: PathBuf,
    saved: Option<PathBuf>,
}

impl CliSurface {
    pub fn new(text: String, out_dir: PathBuf) -> Self {
        Self { text, out_dir, saved: None }
    }

    /// Where the last download was written.
    pub fn saved(&self) -> Option<&Path> { self.saved.as_deref() }
}

impl UiSurface for CliSurface {
    fn input_text(&self) -> String { self.text.clone() }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn show_chart(&mut self, chart: &ChartInstance) {
        let c = chart.chart();
        tracing::info!(
            masses = c.dataset.data.len(),
            x_min = c.x_axis.min,
            x_max = c.x_axis.max,
            "chart ready"
        );
    }

    fn download(&mut self, download: Download) -> spectrum_core::Result<()> {
        self.saved = Some(download.save_into(&self.out_dir)?);
        Ok(())
    }
}
