// File: crates/spectrum-cli/src/main.rs
// Summary: Reads a tab-delimited peak list, renders the mass spectrum bar chart and saves espectro_de_massas.png.

mod surface;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spectrum_core::{RenderOptions, SpectrumApp, Theme, UiSurface, DOWNLOAD_TRIGGER, UPDATE_TRIGGER};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use surface::CliSurface;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

#[derive(Parser, Debug)]
#[command(name = "espectro")]
#[command(about = "Render a mass spectrum bar chart from <mass>\\t<intensity> lines", long_about = None)]
struct Args {
    /// Peak list to read; stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Directory the image is saved into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = spectrum_core::types::WIDTH)]
    width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = spectrum_core::types::HEIGHT)]
    height: i32,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    /// Skip tick labels, titles and legend text
    #[arg(long)]
    no_labels: bool,

    /// Only draw the chart; do not save the image
    #[arg(long)]
    no_export: bool,
}

impl Args {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: match self.theme {
                ThemeArg::Light => Theme::light(),
                ThemeArg::Dark => Theme::dark(),
            },
            draw_labels: !self.no_labels,
            ..RenderOptions::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = read_input(args.input.as_deref()).context("failed to read peak list")?;

    let mut app = SpectrumApp::new(args.render_options());
    let mut ui = CliSurface::new(text, args.out_dir.clone());

    run_trigger(&mut app, UPDATE_TRIGGER, &mut ui)?;
    if !args.no_export {
        run_trigger(&mut app, DOWNLOAD_TRIGGER, &mut ui)?;
        if let Some(path) = ui.saved() {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Alerts were already printed by the surface; exit without a second report.
fn run_trigger(app: &mut SpectrumApp, id: &str, ui: &mut dyn UiSurface) -> Result<()> {
    match app.trigger(id, ui) {
        Err(e) if e.is_user_alert() => std::process::exit(1),
        other => other.with_context(|| format!("trigger {id}")),
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("opening {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
