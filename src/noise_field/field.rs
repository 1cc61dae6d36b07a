//! Seeded coherent noise sampled by wave layers.
//!
//! The third coordinate is animation time: consecutive frames read nearby
//! slices of the same field, which keeps the motion continuous.

use ::noise::{NoiseFn, OpenSimplex};

/// A deterministic, coherent 3D noise function with values in `[-1, 1]`.
pub trait NoiseField {
    /// Sample the field at `(x, y)` and time `t`.
    fn sample(&self, x: f64, y: f64, t: f64) -> f64;
}

impl<F> NoiseField for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        self(x, y, t)
    }
}

/// OpenSimplex noise with a fixed seed.
#[derive(Clone, Debug)]
pub struct SimplexField {
    seed: u32,
    simplex: OpenSimplex,
}

impl SimplexField {
    /// Create a field with an explicit seed.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            simplex: OpenSimplex::new(seed),
        }
    }

    /// Create a field with a fresh random seed.
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    /// Seed this field was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        // OpenSimplex can overshoot the unit range slightly.
        self.simplex.get([x, y, t]).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise_field/field.rs"]
mod tests;
