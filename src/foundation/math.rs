/// Linear interpolation between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp a tick's elapsed milliseconds into `[0, ceiling]`.
pub(crate) fn clamp_elapsed(elapsed_ms: f64, ceiling_ms: f64) -> f64 {
    if !elapsed_ms.is_finite() {
        return ceiling_ms;
    }
    elapsed_ms.clamp(0.0, ceiling_ms)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
