//! Smooth interpolating paths through ordered point sequences.
//!
//! Each span `p[i] -> p[i + 1]` becomes one cubic Bezier whose control points
//! follow the uniform Catmull-Rom tangents `(p[i + 1] - p[i - 1]) / 2`, so the
//! curve passes through every input point with a continuous tangent.

use kurbo::{CubicBez, ParamCurve, PathEl};

use crate::foundation::core::{BezPath, Point};

/// Build a Catmull-Rom spline through `points` as a [`BezPath`].
///
/// `subdivisions` splits every span into that many cubic pieces along the
/// same curve (`0` is treated as `1`); it changes the emitted segment count,
/// never the geometry. Open splines clamp neighbour lookups at the ends, so
/// callers that need exact end tangents pad the sequence. Closed splines wrap
/// around and end with a close-path.
pub fn build_spline(points: &[Point], subdivisions: usize, closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);

    let n = points.len();
    if n < 2 {
        return path;
    }

    let pieces = subdivisions.max(1);
    let spans = if closed { n } else { n - 1 };
    let at = |i: isize| -> Point {
        if closed {
            points[i.rem_euclid(n as isize) as usize]
        } else {
            points[i.clamp(0, n as isize - 1) as usize]
        }
    };

    for i in 0..spans as isize {
        let cubic = span_cubic(at(i - 1), at(i), at(i + 1), at(i + 2));
        if pieces == 1 {
            path.push(PathEl::CurveTo(cubic.p1, cubic.p2, cubic.p3));
            continue;
        }
        for k in 0..pieces {
            let t0 = k as f64 / pieces as f64;
            let t1 = (k + 1) as f64 / pieces as f64;
            let piece = cubic.subsegment(t0..t1);
            path.push(PathEl::CurveTo(piece.p1, piece.p2, piece.p3));
        }
    }

    if closed {
        path.close_path();
    }
    path
}

/// Build a Catmull-Rom spline and serialize it as SVG path data.
pub fn create_cubic_spline(points: &[Point], subdivisions: usize, closed: bool) -> String {
    build_spline(points, subdivisions, closed).to_svg()
}

fn span_cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> CubicBez {
    let c1 = p1 + (p2 - p0) / 6.0;
    let c2 = p2 - (p3 - p1) / 6.0;
    CubicBez::new(p1, c1, c2, p2)
}

#[cfg(test)]
#[path = "../../tests/unit/spline/catmull_rom.rs"]
mod tests;
