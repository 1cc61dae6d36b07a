use std::sync::Arc;

use crate::{
    foundation::{
        core::{BezPath, Point},
        error::WavesResult,
    },
    geometry::{
        displace::get_point_position, edge::EdgePosition, noise_coords::get_noise_coords,
        sampler::generate_points_on_line,
    },
    noise_field::field::NoiseField,
    spline::catmull_rom::build_spline,
};

/// Spans of the wave spline are each drawn as this many cubic pieces.
pub const SPLINE_SUBDIVISIONS: usize = 2;

/// Static geometry parameters of one wave layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLayer {
    /// Edge the layer grows from.
    pub position: EdgePosition,
    /// Distance of the baseline from the edge, as a fraction of the square.
    pub wave_height: f64,
    /// Sampled points along the baseline (before spline padding).
    pub num_points: usize,
    /// Peak-to-peak perpendicular movement.
    pub movement_radius: f64,
    /// Spatial scaling applied to noise coordinates.
    pub noise_scaling: f64,
    /// Scale applied to the constant baseline coordinate before sampling noise.
    pub noise_offset: f64,
}

/// One wave layer: fixed sample origins plus the current displaced frame.
///
/// `origins` and `noise_coords` are fixed when the shape is built; only
/// `positions` and `path` change as the shape is updated.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveShape {
    origins: Arc<[Point]>,
    noise_coords: Arc<[Point]>,
    positions: Vec<Point>,
    path: String,
    corners: [Point; 2],
}

impl WaveShape {
    /// Baseline sample points, including spline padding.
    pub fn origins(&self) -> &[Point] {
        &self.origins
    }

    /// Noise-sampling coordinates, one per origin.
    pub fn noise_coords(&self) -> &[Point] {
        &self.noise_coords
    }

    /// Displaced points of the current frame, one per origin.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// SVG path data of the current frame.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Off-canvas fill corners the path closes through.
    pub fn corners(&self) -> [Point; 2] {
        self.corners
    }

    /// Recompute `positions` and `path` in place for a new noise time.
    pub fn update_in_place<N: NoiseField + ?Sized>(
        &mut self,
        position: EdgePosition,
        movement_radius: f64,
        noise_scaling: f64,
        noise_time: f64,
        noise: &N,
    ) {
        displace_into(
            &mut self.positions,
            position,
            &self.origins,
            &self.noise_coords,
            movement_radius,
            noise_scaling,
            noise_time,
            noise,
        );
        self.path = wave_path_data(&self.positions, self.corners);
    }
}

/// Build a layer's shape from scratch and evaluate it at `noise_time`.
pub fn create_static_wave_shape<N: NoiseField + ?Sized>(
    layer: &WaveLayer,
    noise_time: f64,
    noise: &N,
) -> WavesResult<WaveShape> {
    let baseline = layer.position.geometry().baseline(layer.wave_height);
    let origins = generate_points_on_line(baseline.start, baseline.end, layer.num_points, true)?;
    let noise_coords = get_noise_coords(layer.position, &origins, layer.noise_offset);

    let mut shape = WaveShape {
        origins: origins.into(),
        noise_coords: noise_coords.into(),
        positions: Vec::new(),
        path: String::new(),
        corners: baseline.corners,
    };
    shape.update_in_place(
        layer.position,
        layer.movement_radius,
        layer.noise_scaling,
        noise_time,
        noise,
    );
    Ok(shape)
}

/// Re-evaluate `shape` at `noise_time`, returning a shape that shares its
/// origins and noise coordinates and carries new positions and path.
pub fn update_wave_shape<N: NoiseField + ?Sized>(
    position: EdgePosition,
    shape: &WaveShape,
    movement_radius: f64,
    noise_scaling: f64,
    noise_time: f64,
    noise: &N,
) -> WaveShape {
    let mut next = shape.clone();
    next.update_in_place(position, movement_radius, noise_scaling, noise_time, noise);
    next
}

#[allow(clippy::too_many_arguments)]
fn displace_into<N: NoiseField + ?Sized>(
    out: &mut Vec<Point>,
    position: EdgePosition,
    origins: &[Point],
    noise_coords: &[Point],
    movement_radius: f64,
    noise_scaling: f64,
    noise_time: f64,
    noise: &N,
) {
    out.clear();
    out.extend(origins.iter().zip(noise_coords).map(|(&origin, nc)| {
        let v = noise.sample(nc.x * noise_scaling, nc.y * noise_scaling, noise_time);
        get_point_position(position, origin, movement_radius, v)
    }));
}

/// Spline through `positions`, then straight lines to both corners and a close.
fn wave_path_data(positions: &[Point], corners: [Point; 2]) -> String {
    let mut path: BezPath = build_spline(positions, SPLINE_SUBDIVISIONS, false);
    path.line_to(corners[0]);
    path.line_to(corners[1]);
    path.close_path();
    path.to_svg()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/wave.rs"]
mod tests;
