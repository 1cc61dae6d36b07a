use crate::foundation::{
    core::{Point, Vec2},
    error::{WavesError, WavesResult},
};

/// Number of extra points [`generate_points_on_line`] adds when padding for a spline:
/// one before `start`, then `end` and two more steps past it.
pub const SPLINE_PADDING_POINTS: usize = 4;

/// Sample `num_points` evenly spaced points from `start` towards `end`.
///
/// The first point is `start`; the point exactly at `end` is excluded, so the
/// spacing is `(end - start) / num_points`. With `pad`, one point one step
/// before `start` is prepended, and `end` plus two points one and two steps past
/// it are appended, giving `num_points + 4` points. The padding gives a spline
/// through the samples defined tangents at both visible ends.
pub fn generate_points_on_line(
    start: Point,
    end: Point,
    num_points: usize,
    pad: bool,
) -> WavesResult<Vec<Point>> {
    if num_points == 0 {
        return Err(WavesError::validation("number of points must be >= 1"));
    }

    let step: Vec2 = (end - start) / num_points as f64;
    let capacity = num_points + if pad { SPLINE_PADDING_POINTS } else { 0 };
    let mut points = Vec::with_capacity(capacity);

    if pad {
        points.push(start - step);
    }

    points.extend((0..num_points).map(|i| start + step * i as f64));

    if pad {
        points.push(end);
        points.push(end + step);
        points.push(end + step * 2.0);
    }

    Ok(points)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sampler.rs"]
mod tests;
