use crate::foundation::math::lerp;

/// Baseline heights for `count` stacked layers.
///
/// Index 0 gets `highest`, the last index gets `lowest`, and the rest are
/// spaced linearly between them. A single layer gets `lowest`.
pub fn wave_heights(lowest: f64, highest: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![lowest],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| lerp(highest, lowest, i as f64 / last))
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/heights.rs"]
mod tests;
