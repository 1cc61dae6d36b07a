use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{WavesError, WavesResult},
    geometry::edge::EdgePosition,
    shape::wave::WaveLayer,
};

/// User-facing wave configuration.
///
/// Values use a friendlier integer-ish scale; [`WaveOptions::resolve`]
/// converts them to the unit-square quantities the shape math works with.
/// JSON field names follow the camelCase option vocabulary
/// (`lowestWaveHeight`, `differenceBetweenWaves`, ...), and every field is
/// optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveOptions {
    /// Edge the waves grow from.
    pub position: EdgePosition,
    /// Animation speed; divided by 10000 to get noise time per millisecond.
    pub speed: f64,
    /// Height of the last (lowest) layer, in tenths of the square.
    pub lowest_wave_height: f64,
    /// Height of the first (highest) layer, in tenths of the square.
    pub highest_wave_height: f64,
    /// Number of sampled points per wave.
    pub smoothness: usize,
    /// Movement radius, in tenths of the square.
    pub amplitude: f64,
    /// Spatial scaling applied to noise coordinates.
    pub complexity: f64,
    /// Per-layer noise offset step, in tenths.
    pub difference_between_waves: f64,
    /// Noise seed; a random seed is drawn when absent.
    pub seed: Option<u32>,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            position: EdgePosition::Bottom,
            speed: 2.0,
            lowest_wave_height: 2.0,
            highest_wave_height: 8.0,
            smoothness: 10,
            amplitude: 1.0,
            complexity: 2.0,
            difference_between_waves: 3.0,
            seed: None,
        }
    }
}

impl WaveOptions {
    /// Options expressed in the custom-element vocabulary: a `[from, to]`
    /// height distribution and a `synchronicity` layer offset.
    pub fn from_distribution(distribution: [f64; 2], synchronicity: f64) -> Self {
        Self {
            lowest_wave_height: distribution[0],
            highest_wave_height: distribution[1],
            difference_between_waves: synchronicity,
            ..Self::default()
        }
    }

    /// Parse options from a JSON object; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> WavesResult<Self> {
        serde_json::from_str(json).map_err(|e| WavesError::serde(format!("wave options: {e}")))
    }

    /// Read options from a JSON file.
    pub fn from_json_file(path: &Path) -> WavesResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read wave options '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Validate and convert to internal units.
    pub fn resolve(&self) -> WavesResult<ResolvedOptions> {
        if self.smoothness == 0 {
            return Err(WavesError::validation("smoothness (points per wave) must be >= 1"));
        }
        for (name, v) in [
            ("speed", self.speed),
            ("lowestWaveHeight", self.lowest_wave_height),
            ("highestWaveHeight", self.highest_wave_height),
            ("amplitude", self.amplitude),
            ("complexity", self.complexity),
            ("differenceBetweenWaves", self.difference_between_waves),
        ] {
            if !v.is_finite() {
                return Err(WavesError::validation(format!("{name} must be finite")));
            }
        }
        if self.speed < 0.0 {
            return Err(WavesError::validation("speed must be >= 0"));
        }

        Ok(ResolvedOptions {
            position: self.position,
            speed_per_ms: self.speed / 10_000.0,
            lowest_height: self.lowest_wave_height / 10.0,
            highest_height: self.highest_wave_height / 10.0,
            num_points: self.smoothness,
            movement_radius: self.amplitude / 10.0,
            noise_scaling: self.complexity,
            layer_offset_step: self.difference_between_waves / 10.0,
            seed: self.seed,
        })
    }
}

/// Validated options in unit-square units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedOptions {
    /// Edge the waves grow from.
    pub position: EdgePosition,
    /// Noise time advanced per elapsed millisecond.
    pub speed_per_ms: f64,
    /// Height assigned to the last layer.
    pub lowest_height: f64,
    /// Height assigned to the first layer.
    pub highest_height: f64,
    /// Sampled points per wave (before spline padding).
    pub num_points: usize,
    /// Peak-to-peak perpendicular movement.
    pub movement_radius: f64,
    /// Spatial scaling applied to noise coordinates.
    pub noise_scaling: f64,
    /// Noise offset added per layer index.
    pub layer_offset_step: f64,
    /// Noise seed, if fixed.
    pub seed: Option<u32>,
}

impl ResolvedOptions {
    /// Static geometry parameters of layer `index` at `wave_height`.
    pub fn layer(&self, index: usize, wave_height: f64) -> WaveLayer {
        WaveLayer {
            position: self.position,
            wave_height,
            num_points: self.num_points,
            movement_radius: self.movement_radius,
            noise_scaling: self.noise_scaling,
            noise_offset: self.layer_offset_step * index as f64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
