// File: crates/spectrum-core/src/export.rs
// Summary: Export of the current chart as a downloadable PNG data URL.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use tracing::debug;

use crate::error::{Result, SpectrumError};
use crate::renderer::Renderer;

/// File name every exported chart is offered under.
pub const EXPORT_FILE_NAME: &str = "espectro_de_massas.png";

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A file offered to the user: name plus `data:` URL payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub data_url: String,
}

impl Download {
    pub fn decode_png(&self) -> Result<Vec<u8>> {
        let payload = self
            .data_url
            .strip_prefix(PNG_DATA_URL_PREFIX)
            .ok_or(SpectrumError::InvalidDataUrl)?;
        Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
    }

    /// Write the image into `dir` under its file name.
    pub fn save_into(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.decode_png()?)?;
        Ok(path)
    }
}

#[derive(Clone, Debug)]
pub struct Exporter {
    file_name: String,
}

impl Exporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &str { &self.file_name }

    /// Package the renderer's current chart for download. Read-only: the
    /// chart stays in place.
    pub fn export(&self, renderer: &Renderer) -> Result<Download> {
        let chart = renderer.current().ok_or(SpectrumError::NoChartToExport)?;
        let data_url = chart.to_base64_image()?;
        debug!(id = chart.id(), bytes = data_url.len(), file = %self.file_name, "exported chart");
        Ok(Download { file_name: self.file_name.clone(), data_url })
    }
}

impl Default for Exporter {
    fn default() -> Self { Self::new(EXPORT_FILE_NAME) }
}
