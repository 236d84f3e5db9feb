// File: crates/spectrum-core/build.rs
// Summary: Build script linking the Windows system libraries Skia/ICU need for the raster backend.

fn main() {
    // Build scripts run on the host; ask cargo about the target instead of using cfg!.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
