use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{OVERSCAN_MAX, OVERSCAN_MIN, Point},
    error::WavesError,
};

/// Coordinate axis of the unit square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Read this axis' component of `p`.
    pub fn get(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Return `p` with this axis' component replaced by `v`.
    pub fn with(self, p: Point, v: f64) -> Point {
        match self {
            Self::X => Point::new(v, p.y),
            Self::Y => Point::new(p.x, v),
        }
    }
}

/// Which edge of the square a wave layer hugs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EdgePosition {
    /// Wave hangs from the top edge.
    Top,
    /// Wave grows out of the right edge.
    Right,
    /// Wave rises from the bottom edge.
    #[default]
    Bottom,
    /// Wave grows out of the left edge.
    Left,
}

impl EdgePosition {
    /// All positions, in clockwise order starting at the top.
    pub const ALL: [EdgePosition; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The geometry descriptor for this position.
    pub fn geometry(self) -> &'static EdgeGeometry {
        match self {
            Self::Top => &TOP,
            Self::Right => &RIGHT,
            Self::Bottom => &BOTTOM,
            Self::Left => &LEFT,
        }
    }

    /// Lowercase name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for EdgePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgePosition {
    type Err = WavesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            other => Err(WavesError::validation(format!(
                "unknown edge position '{other}' (expected top, right, bottom or left)"
            ))),
        }
    }
}

/// Per-position description of a wave's baseline and fill region.
///
/// Every position-dependent rule (sampling direction, noise-coordinate
/// scaling, displacement direction, fill corners) is derived from these
/// fields instead of switching on [`EdgePosition`] at each call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
    /// Axis the baseline runs along.
    pub along: Axis,
    /// Axis points are displaced on; also the axis whose coordinate is constant on the baseline.
    pub across: Axis,
    /// Baseline sits at `1 - height` (bottom/right) instead of `height` (top/left).
    pub from_far_side: bool,
    /// `across` coordinate of both fill corners, outside the unit square.
    pub fill_across: f64,
}

const TOP: EdgeGeometry = EdgeGeometry {
    along: Axis::X,
    across: Axis::Y,
    from_far_side: false,
    fill_across: OVERSCAN_MIN,
};

const RIGHT: EdgeGeometry = EdgeGeometry {
    along: Axis::Y,
    across: Axis::X,
    from_far_side: true,
    fill_across: OVERSCAN_MAX,
};

const BOTTOM: EdgeGeometry = EdgeGeometry {
    along: Axis::X,
    across: Axis::Y,
    from_far_side: true,
    fill_across: OVERSCAN_MAX,
};

const LEFT: EdgeGeometry = EdgeGeometry {
    along: Axis::Y,
    across: Axis::X,
    from_far_side: false,
    fill_across: OVERSCAN_MIN,
};

/// Baseline endpoints and fill corners for one wave layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    /// First baseline point (at the low overscan end of the edge).
    pub start: Point,
    /// Last baseline point (at the high overscan end of the edge).
    pub end: Point,
    /// Off-canvas corners; the path closes through `corners[0]` then `corners[1]`.
    pub corners: [Point; 2],
}

impl EdgeGeometry {
    /// Build a point from along-edge and across-edge coordinates.
    pub fn compose(&self, along: f64, across: f64) -> Point {
        let p = self.along.with(Point::ORIGIN, along);
        self.across.with(p, across)
    }

    /// The constant `across` coordinate of a baseline `wave_height` away from the edge.
    pub fn baseline_across(&self, wave_height: f64) -> f64 {
        if self.from_far_side {
            1.0 - wave_height
        } else {
            wave_height
        }
    }

    /// Baseline and fill corners for a layer of the given height.
    pub fn baseline(&self, wave_height: f64) -> Baseline {
        let across = self.baseline_across(wave_height);
        Baseline {
            start: self.compose(OVERSCAN_MIN, across),
            end: self.compose(OVERSCAN_MAX, across),
            corners: [
                self.compose(OVERSCAN_MAX, self.fill_across),
                self.compose(OVERSCAN_MIN, self.fill_across),
            ],
        }
    }
}

/// Baseline endpoints and off-canvas fill corners for `position`.
pub fn get_corners(position: EdgePosition, wave_height: f64) -> Baseline {
    position.geometry().baseline(wave_height)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/edge.rs"]
mod tests;
