// File: crates/spectrum-core/tests/app.rs
// Purpose: Trigger dispatch: update/download flows, alerts and chart replacement.

use spectrum_core::renderer::ChartInstance;
use spectrum_core::{
    Download, RenderOptions, SpectrumApp, SpectrumError, UiSurface, DOWNLOAD_TRIGGER, EXPORT_FILE_NAME,
    UPDATE_TRIGGER,
};

#[derive(Default)]
struct FakeUi {
    text: String,
    alerts: Vec<String>,
    shown: Vec<u64>,
    downloads: Vec<Download>,
}

impl FakeUi {
    fn with_text(text: &str) -> Self {
        Self { text: text.to_string(), ..Self::default() }
    }
}

impl UiSurface for FakeUi {
    fn input_text(&self) -> String { self.text.clone() }
    fn alert(&mut self, message: &str) { self.alerts.push(message.to_string()); }
    fn show_chart(&mut self, chart: &ChartInstance) { self.shown.push(chart.id()); }
    fn download(&mut self, download: Download) -> spectrum_core::Result<()> {
        self.downloads.push(download);
        Ok(())
    }
}

fn app() -> SpectrumApp {
    SpectrumApp::new(RenderOptions { width: 240, height: 160, draw_labels: false, ..RenderOptions::default() })
}

#[test]
fn update_renders_and_shows_chart() {
    let mut app = app();
    let mut ui = FakeUi::with_text("100\t5\n101\t0\n103\t9");
    app.trigger(UPDATE_TRIGGER, &mut ui).expect("render");

    assert!(ui.alerts.is_empty());
    assert_eq!(ui.shown.len(), 1);
    let chart = app.renderer().current().expect("chart present");
    assert_eq!(chart.chart().dataset.data.len(), 4);
}

#[test]
fn empty_input_alerts_and_creates_no_chart() {
    let mut app = app();
    let mut ui = FakeUi::with_text("");
    let err = app.trigger(UPDATE_TRIGGER, &mut ui).unwrap_err();

    assert!(matches!(err, SpectrumError::UserInputEmpty));
    assert_eq!(ui.alerts, vec!["Por favor, insira dados válidos.".to_string()]);
    assert!(!app.renderer().has_chart());
    assert!(ui.shown.is_empty());
}

#[test]
fn unplottable_mass_range_alerts_and_keeps_previous_chart() {
    let mut app = app();
    let mut ui = FakeUi::with_text("-9e18\t1\n9e18\t2");
    let err = app.trigger(UPDATE_TRIGGER, &mut ui).unwrap_err();
    assert!(matches!(err, SpectrumError::MassRangeTooWide { .. }));
    assert_eq!(ui.alerts.len(), 1);
    assert!(!app.renderer().has_chart());

    ui.text = "1\t2".to_string();
    app.trigger(UPDATE_TRIGGER, &mut ui).expect("render");
    let id = app.renderer().current().expect("chart").id();
    ui.text = "-9e18\t1\n9e18\t2".to_string();
    assert!(app.trigger(UPDATE_TRIGGER, &mut ui).is_err());
    assert_eq!(app.renderer().current().map(|c| c.id()), Some(id));
}

#[test]
fn download_before_render_alerts() {
    let mut app = app();
    let mut ui = FakeUi::default();
    let err = app.trigger(DOWNLOAD_TRIGGER, &mut ui).unwrap_err();

    assert!(matches!(err, SpectrumError::NoChartToExport));
    assert_eq!(ui.alerts, vec!["Por favor, crie um gráfico antes de baixar.".to_string()]);
    assert!(ui.downloads.is_empty());
}

#[test]
fn download_offers_png_under_fixed_name_and_keeps_chart() {
    let mut app = app();
    let mut ui = FakeUi::with_text("50\t3");
    app.trigger(UPDATE_TRIGGER, &mut ui).unwrap();
    let id = app.renderer().current().unwrap().id();

    app.trigger(DOWNLOAD_TRIGGER, &mut ui).unwrap();
    app.trigger(DOWNLOAD_TRIGGER, &mut ui).unwrap();

    assert_eq!(ui.downloads.len(), 2);
    let d = &ui.downloads[0];
    assert_eq!(d.file_name, EXPORT_FILE_NAME);
    assert_eq!(d.file_name, "espectro_de_massas.png");
    let png = d.decode_png().unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]));
    assert_eq!(app.renderer().current().unwrap().id(), id, "export must not rebuild the chart");
}

#[test]
fn each_update_replaces_the_chart() {
    let mut app = app();
    let mut ui = FakeUi::with_text("1\t1");
    app.trigger(UPDATE_TRIGGER, &mut ui).unwrap();
    ui.text = "1\t1\n5\t2".to_string();
    app.trigger(UPDATE_TRIGGER, &mut ui).unwrap();

    assert_eq!(ui.shown, vec![1, 2]);
    let chart = app.renderer().current().unwrap();
    assert_eq!(chart.id(), 2);
    assert_eq!(chart.chart().dataset.data.len(), 5);
}

#[test]
fn failed_update_keeps_previous_chart() {
    let mut app = app();
    let mut ui = FakeUi::with_text("1\t1");
    app.trigger(UPDATE_TRIGGER, &mut ui).unwrap();
    ui.text = "garbage".to_string();
    assert!(app.trigger(UPDATE_TRIGGER, &mut ui).is_err());

    assert_eq!(app.renderer().current().map(|c| c.id()), Some(1));
}

#[test]
fn unknown_trigger_is_an_error_not_an_alert() {
    let mut app = app();
    let mut ui = FakeUi::default();
    let err = app.trigger("resetZoom", &mut ui).unwrap_err();
    assert!(matches!(err, SpectrumError::UnknownTrigger(ref id) if id == "resetZoom"));
    assert!(ui.alerts.is_empty());
}

#[test]
fn handlers_can_be_rebound() {
    fn noop(_: &mut SpectrumApp, ui: &mut dyn UiSurface) -> spectrum_core::Result<()> {
        ui.alert("noop");
        Ok(())
    }
    let mut app = app();
    app.register(DOWNLOAD_TRIGGER, noop);
    let mut ui = FakeUi::default();
    app.trigger(DOWNLOAD_TRIGGER, &mut ui).unwrap();
    assert_eq!(ui.alerts, vec!["noop".to_string()]);
}

#[test]
fn saved_download_lands_in_directory() {
    let mut app = app();
    let mut ui = FakeUi::with_text("10\t1\n12\t4");
    app.trigger(UPDATE_TRIGGER, &mut ui).unwrap();
    app.trigger(DOWNLOAD_TRIGGER, &mut ui).unwrap();

    let dir = std::path::PathBuf::from("target/test_out/download");
    let path = ui.downloads[0].save_into(&dir).expect("save");
    assert_eq!(path, dir.join("espectro_de_massas.png"));
    let img = image::open(&path).expect("decodes as image");
    assert_eq!((img.width(), img.height()), (240, 160));
}
