use crate::{foundation::core::Point, geometry::edge::EdgePosition};

/// Map baseline points to noise-sampling coordinates for one layer.
///
/// The coordinate that stays constant along the edge is multiplied by
/// `noise_offset`, so layers stacked with different offsets read different
/// slices of the same noise field.
pub fn get_noise_coords(position: EdgePosition, origins: &[Point], noise_offset: f64) -> Vec<Point> {
    let across = position.geometry().across;
    origins
        .iter()
        .map(|&p| across.with(p, across.get(p) * noise_offset))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/noise_coords.rs"]
mod tests;
