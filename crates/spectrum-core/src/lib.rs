// File: crates/spectrum-core/src/lib.rs
// Summary: Core library entry point; exports the parse/densify pipeline, chart rendering and trigger wiring.

pub mod app;
pub mod axis;
pub mod chart;
pub mod densify;
pub mod error;
pub mod export;
pub mod parser;
pub mod renderer;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use app::{SpectrumApp, UiSurface, DOWNLOAD_TRIGGER, UPDATE_TRIGGER};
pub use axis::Axis;
pub use chart::{BarChart, Frame, RenderOptions};
pub use densify::{densify, DenseAxis};
pub use error::{Result, SpectrumError};
pub use export::{Download, Exporter, EXPORT_FILE_NAME};
pub use parser::{parse_peaks, Peak, Spectrum};
pub use renderer::{ChartInstance, Renderer};
pub use theme::Theme;
