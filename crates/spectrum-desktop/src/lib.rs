// File: crates/spectrum-desktop/src/lib.rs
// Summary: Desktop front end: a UI surface backed by native dialogs and a Dioxus window (desktop only).
// Notes:
// - The window and dialog crates sit behind the `desktop` feature; the surface
//   logic below builds without them so it can be tested headless.

use std::path::{Path, PathBuf};

use spectrum_core::{ChartInstance, Download, UiSurface};
use tracing::warn;

/// Blocking user interaction the desktop surface needs from the platform.
pub trait Dialogs {
    fn alert(&mut self, message: &str);
    /// Ask where to save `file_name`; `None` when the user cancels.
    fn save_path(&mut self, file_name: &str) -> Option<PathBuf>;
}

/// UI surface for one button press: carries the text area contents in and
/// the drawn chart (as a PNG data URL) out.
pub struct DesktopSurface<D: Dialogs> {
    text: String,
    chart_src: Option<String>,
    saved: Option<PathBuf>,
    dialogs: D,
}

impl<D: Dialogs> DesktopSurface<D> {
    pub fn new(text: impl Into<String>, dialogs: D) -> Self {
        Self { text: text.into(), chart_src: None, saved: None, dialogs }
    }

    /// Image source for the chart element, if a chart was drawn.
    pub fn take_chart_src(&mut self) -> Option<String> { self.chart_src.take() }

    pub fn saved(&self) -> Option<&Path> { self.saved.as_deref() }
}

impl<D: Dialogs> UiSurface for DesktopSurface<D> {
    fn input_text(&self) -> String { self.text.clone() }

    fn alert(&mut self, message: &str) { self.dialogs.alert(message); }

    fn show_chart(&mut self, chart: &ChartInstance) {
        match chart.to_base64_image() {
            Ok(src) => self.chart_src = Some(src),
            Err(e) => warn!(error = %e, "could not encode chart for display"),
        }
    }

    fn download(&mut self, download: Download) -> spectrum_core::Result<()> {
        let Some(path) = self.dialogs.save_path(&download.file_name) else {
            return Ok(());
        };
        std::fs::write(&path, download.decode_png()?)?;
        self.saved = Some(path);
        Ok(())
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;
    use spectrum_core::app::{CHART_ELEMENT_ID, INPUT_ELEMENT_ID};
    use spectrum_core::{SpectrumApp, DOWNLOAD_TRIGGER, UPDATE_TRIGGER};

    /// Native message boxes and save dialog.
    pub struct NativeDialogs;

    impl Dialogs for NativeDialogs {
        fn alert(&mut self, message: &str) {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Espectro de Massas")
                .set_description(message)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }

        fn save_path(&mut self, file_name: &str) -> Option<PathBuf> {
            rfd::FileDialog::new()
                .set_title("Baixar Imagem")
                .set_file_name(file_name)
                .add_filter("PNG Image", &["png"])
                .save_file()
        }
    }

    #[component]
    fn App() -> Element {
        let mut text = use_signal(String::new);
        let mut chart_src = use_signal(|| Option::<String>::None);
        let mut app = use_signal(SpectrumApp::default);

        // Every button routes through the app's trigger table by element id.
        let mut dispatch = move |id: &'static str| {
            let mut surface = DesktopSurface::new(text.read().clone(), NativeDialogs);
            if let Err(e) = app.write().trigger(id, &mut surface) {
                tracing::debug!(trigger = id, error = %e, "trigger did not complete");
            }
            if let Some(src) = surface.take_chart_src() {
                chart_src.set(Some(src));
            }
        };

        rsx! {
            div { style: "font-family:sans-serif; margin:16px; display:flex; flex-direction:column; gap:8px;",
                textarea {
                    id: INPUT_ELEMENT_ID,
                    rows: 10,
                    placeholder: "massa<TAB>intensidade",
                    value: "{text}",
                    oninput: move |e| text.set(e.value()),
                }
                div { style: "display:flex; gap:8px;",
                    button { id: UPDATE_TRIGGER, onclick: move |_| dispatch(UPDATE_TRIGGER), "Atualizar Gráfico" }
                    button { id: DOWNLOAD_TRIGGER, onclick: move |_| dispatch(DOWNLOAD_TRIGGER), "Baixar Imagem" }
                }
                if let Some(src) = chart_src() {
                    img { id: CHART_ELEMENT_ID, style: "max-width:100%;", src: "{src}" }
                }
            }
        }
    }

    /// Open the window and block until it is closed.
    pub fn run_desktop_ui() -> Result<(), String> {
        dioxus::launch(App);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_desktop_ui() -> Result<(), &'static str> {
    Err("spectrum-desktop built without `desktop` feature; enable features to run the window")
}
