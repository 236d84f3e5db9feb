// File: crates/spectrum-desktop/src/bin/desktop.rs
// Purpose: Launcher for the desktop window.

use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    if let Err(e) = spectrum_desktop::ui::run_desktop_ui() {
        eprintln!("espectro-desktop error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_logging();
    if let Err(e) = spectrum_desktop::run_desktop_ui() {
        eprintln!("{e}");
    }
}
