// File: crates/spectrum-core/src/app.rs
// Summary: Trigger dispatch wiring UI events to the parse -> densify -> render pipeline and to export.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::chart::RenderOptions;
use crate::error::{Result, SpectrumError};
use crate::export::{Download, Exporter};
use crate::parser::parse_peaks;
use crate::renderer::{ChartInstance, Renderer};

/// Text area holding the pasted peak list.
pub const INPUT_ELEMENT_ID: &str = "dataInput";
/// Surface the chart is drawn on.
pub const CHART_ELEMENT_ID: &str = "massSpectrum";
pub const UPDATE_TRIGGER: &str = "updateChart";
pub const DOWNLOAD_TRIGGER: &str = "downloadImage";

/// What the front end provides: the input text, a way to show a chart,
/// blocking alerts and file downloads.
pub trait UiSurface {
    fn input_text(&self) -> String;
    fn alert(&mut self, message: &str);
    fn show_chart(&mut self, chart: &ChartInstance);
    fn download(&mut self, download: Download) -> Result<()>;
}

pub type Handler = fn(&mut SpectrumApp, &mut dyn UiSurface) -> Result<()>;

pub struct SpectrumApp {
    renderer: Renderer,
    exporter: Exporter,
    handlers: HashMap<String, Handler>,
}

impl SpectrumApp {
    /// App with the update and download triggers registered.
    pub fn new(opts: RenderOptions) -> Self {
        let mut app = Self {
            renderer: Renderer::new(opts),
            exporter: Exporter::default(),
            handlers: HashMap::new(),
        };
        app.register(UPDATE_TRIGGER, update_chart);
        app.register(DOWNLOAD_TRIGGER, download_image);
        app
    }

    /// Bind `handler` to trigger `id`, replacing any earlier binding.
    pub fn register(&mut self, id: impl Into<String>, handler: Handler) {
        self.handlers.insert(id.into(), handler);
    }

    pub fn renderer(&self) -> &Renderer { &self.renderer }

    pub fn exporter(&self) -> &Exporter { &self.exporter }

    /// Run the handler bound to `id` to completion. User-facing failures are
    /// shown through [`UiSurface::alert`] and still returned.
    pub fn trigger(&mut self, id: &str, ui: &mut dyn UiSurface) -> Result<()> {
        let handler = *self
            .handlers
            .get(id)
            .ok_or_else(|| SpectrumError::UnknownTrigger(id.to_string()))?;
        debug!(trigger = id, "dispatching");

        let outcome = handler(self, ui);
        if let Err(e) = &outcome {
            if e.is_user_alert() {
                ui.alert(&e.to_string());
            } else {
                warn!(trigger = id, error = %e, "handler failed");
            }
        }
        outcome
    }
}

impl Default for SpectrumApp {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

fn update_chart(app: &mut SpectrumApp, ui: &mut dyn UiSurface) -> Result<()> {
    let spectrum = parse_peaks(&ui.input_text())?;
    let axis = spectrum.densify()?;
    let chart = app.renderer.render(&axis)?;
    ui.show_chart(chart);
    Ok(())
}

fn download_image(app: &mut SpectrumApp, ui: &mut dyn UiSurface) -> Result<()> {
    let download = app.exporter.export(&app.renderer)?;
    ui.download(download)
}
