//! HSV → RGB conversion on normalized components.

/// Convert a normalized HSV triple (`h`, `s`, `v` all in `[0, 1]`) to
/// normalized RGB.
///
/// Sector selection truncates `h * 6`, so a hue of exactly `1.0` wraps back
/// to red.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0) as i64;
    let f = h * 6.0 - sector as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
