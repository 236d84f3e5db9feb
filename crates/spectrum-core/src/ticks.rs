// File: crates/spectrum-core/src/ticks.rs
// Summary: Tick layout helpers: nice value steps, label auto-skip and tick formatting.

/// Approximate advance of one tick-label glyph; used so layout does not
/// depend on which fonts the host has installed.
pub const TICK_CHAR_PX: f32 = 7.0;

/// Upper bound on ticks per axis; anything denser collapses to its endpoints.
pub const MAX_TICKS: usize = 1_000;

/// Round `span / target` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span.is_infinite() {
        // Span of two finite bounds overflowed; f64::MAX is within a factor 2.
        return (2.0 * nice_step(f64::MAX, target)).min(f64::MAX);
    }
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_normal() { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    (nice * mag).min(f64::MAX)
}

/// Widen `[min, max]` outward to multiples of `step`.
pub fn nice_bounds(min: f64, max: f64, step: f64) -> (f64, f64) {
    let lo = ((min / step).floor() * step).max(f64::MIN);
    let mut hi = ((max / step).ceil() * step).min(f64::MAX);
    if hi <= lo { hi = (lo + step).min(f64::MAX); }
    (lo, hi)
}

/// Tick values from `min` to `max` inclusive at `step`; at most [`MAX_TICKS`].
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= min) { return vec![min]; }
    // Divide before subtracting so bounds near f64::MAX do not overflow.
    let n = (max / step - min / step + 1e-9).floor();
    if !n.is_finite() || n >= MAX_TICKS as f64 { return vec![min, max]; }
    (0..=n as usize).map(|i| min + step * i as f64).collect()
}

/// Every how many category labels one is drawn so `count` labels of up to
/// `max_chars` glyphs fit into `avail_px` without overlapping.
pub fn autoskip_stride(count: usize, max_chars: usize, avail_px: f32) -> usize {
    if count == 0 { return 1; }
    let label_px = max_chars as f32 * TICK_CHAR_PX + 8.0;
    let fit = (avail_px / label_px).floor().max(1.0) as usize;
    count.div_ceil(fit).max(1)
}

/// Format a tick value without trailing zeros ("0", "2.5", "1000").
pub fn format_tick(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
