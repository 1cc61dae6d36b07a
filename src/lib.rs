//! fluid-waves generates organic, animated wave shapes for SVG backgrounds.
//!
//! Points along a baseline hugging one edge of the unit square are displaced
//! by coherent noise and joined into a smooth closed path that fills the
//! region between the wave and the edge. The path is re-evaluated every
//! display frame with the noise field's third coordinate advanced in time.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`WaveOptions`] -> [`ResolvedOptions`] -> one height per layer ([`wave_heights`])
//! 2. **Build (once)**: baseline sampling, edge geometry and noise coordinates -> [`WaveShape`]
//! 3. **Update (every frame)**: noise sample -> perpendicular displacement -> Catmull-Rom spline -> path data
//! 4. **Drive**: [`WaveAnimation`] advances a clamped noise timeline on each host tick and writes the
//!    path data into a [`WaveSurface`]
//!
//! Hosts plug in through three small capabilities: a [`FrameClock`] that
//! schedules ticks, a [`VisibilitySource`] that reports viewport visibility,
//! and the [`WaveSurface`] that receives path strings. [`get_static_waves`]
//! skips all of them and evaluates a single frame.
//!
//! Misconfiguration is reported through `tracing` and yields an absent
//! result rather than a panic; the `try_*`/`mount` variants return
//! [`WavesError`] instead.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod driver;
mod foundation;
mod geometry;
mod noise_field;
mod render;
mod shape;
mod spline;

pub use config::options::{ResolvedOptions, WaveOptions};
pub use driver::animation::{WaveAnimation, animate_waves};
pub use driver::headless::{ManualClock, ManualVisibility, MemorySurface, SurfaceRegistry};
pub use driver::host::{
    ElementLookup, FrameClock, RootTarget, TickHandle, VisibilitySource, WaveSurface, check_root,
};
pub use driver::state::{AnimationState, Phase};
pub use foundation::core::{
    BezPath, MAX_TICK_ELAPSED_MS, OVERSCAN_MAX, OVERSCAN_MIN, Point, Timestamp, Vec2,
};
pub use foundation::error::{WavesError, WavesResult};
pub use geometry::displace::get_point_position;
pub use geometry::edge::{Axis, Baseline, EdgeGeometry, EdgePosition, get_corners};
pub use geometry::noise_coords::get_noise_coords;
pub use geometry::sampler::{SPLINE_PADDING_POINTS, generate_points_on_line};
pub use noise_field::field::{NoiseField, SimplexField};
pub use render::document::{DocumentStyle, svg_document};
pub use render::raster::{RasterFrame, rasterize_svg, write_png};
pub use shape::heights::wave_heights;
pub use shape::static_waves::{get_static_waves, static_waves_with_noise, try_static_waves};
pub use shape::wave::{
    SPLINE_SUBDIVISIONS, WaveLayer, WaveShape, create_static_wave_shape, update_wave_shape,
};
pub use spline::catmull_rom::{build_spline, create_cubic_spline};
