use crate::{foundation::core::Point, geometry::edge::EdgePosition};

/// Push a baseline point perpendicular to its edge by a noise sample.
///
/// The offset is `noise_value * movement_radius / 2`; with `noise_value` in
/// `[-1, 1]` the point moves at most `movement_radius / 2` either way. The
/// along-edge coordinate is untouched.
pub fn get_point_position(
    position: EdgePosition,
    point: Point,
    movement_radius: f64,
    noise_value: f64,
) -> Point {
    let across = position.geometry().across;
    let offset = noise_value * movement_radius / 2.0;
    across.with(point, across.get(point) + offset)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/displace.rs"]
mod tests;
