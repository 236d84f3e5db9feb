// File: crates/spectrum-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic spectra to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use spectrum_core::{parse_peaks, BarChart, RenderOptions, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(input: &str, theme: Theme) -> Vec<u8> {
    let axis = parse_peaks(input).expect("valid peaks").densify().unwrap();
    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 320;
    opts.theme = theme;
    opts.draw_labels = false; // deterministic
    BarChart::from_dense(&axis, &theme).render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_sparse_spectrum() {
    write_or_compare("sparse_light.png", &render("100\t5\n101\t0\n103\t9", Theme::light()));
}

#[test]
fn golden_dense_spectrum_dark() {
    let input = (0..120)
        .map(|i| format!("{}\t{}", 200 + i, ((i * 37) % 101) as f64 * 0.5))
        .collect::<Vec<_>>()
        .join("\n");
    write_or_compare("dense_dark.png", &render(&input, Theme::dark()));
}
