pub use kurbo::{BezPath, Point, Vec2};

/// Lower bound of the overscanned unit square that wave fills extend to.
pub const OVERSCAN_MIN: f64 = -0.2;

/// Upper bound of the overscanned unit square that wave fills extend to.
pub const OVERSCAN_MAX: f64 = 1.2;

/// Ceiling applied to the elapsed time of a single tick, in milliseconds
/// (roughly one 60 fps frame).
pub const MAX_TICK_ELAPSED_MS: f64 = 17.0;

/// Host timestamp in milliseconds, as delivered by a per-frame repaint signal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Timestamp(pub f64);

impl Timestamp {
    /// Raw millisecond value.
    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`. Negative when the host clock goes backwards.
    pub fn since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
