// File: crates/spectrum-core/src/error.rs
// Summary: Error taxonomy for parsing, rendering, exporting and trigger dispatch.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpectrumError>;

#[derive(Debug, Error)]
pub enum SpectrumError {
    /// No line of the pasted text yielded a (mass, intensity) pair.
    #[error("Por favor, insira dados válidos.")]
    UserInputEmpty,

    /// Export requested before any chart was rendered.
    #[error("Por favor, crie um gráfico antes de baixar.")]
    NoChartToExport,

    /// The masses span more integer ticks than the axis can hold.
    #[error("Faixa de massas grande demais para o gráfico ({min} a {max}).")]
    MassRangeTooWide { min: f64, max: f64 },

    #[error("no handler registered for trigger '{0}'")]
    UnknownTrigger(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("not a base64 PNG data URL")]
    InvalidDataUrl,

    #[error("base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpectrumError {
    /// Errors the user caused and must be told about through a blocking alert.
    pub fn is_user_alert(&self) -> bool {
        matches!(self, Self::UserInputEmpty | Self::NoChartToExport | Self::MassRangeTooWide { .. })
    }
}
