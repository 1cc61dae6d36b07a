use crate::{
    config::options::{ResolvedOptions, WaveOptions},
    foundation::error::{WavesError, WavesResult},
    noise_field::field::{NoiseField, SimplexField},
    shape::{heights::wave_heights, wave::create_static_wave_shape},
};

/// Path data for `number_of_waves` layers evaluated once at noise time 0.
///
/// Misconfiguration is logged and yields an empty `Vec`.
pub fn get_static_waves(number_of_waves: usize, options: &WaveOptions) -> Vec<String> {
    match try_static_waves(number_of_waves, options) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::error!(%err, number_of_waves, "fluid-waves: cannot build static waves");
            Vec::new()
        }
    }
}

/// Fallible form of [`get_static_waves`].
#[tracing::instrument(skip(options))]
pub fn try_static_waves(number_of_waves: usize, options: &WaveOptions) -> WavesResult<Vec<String>> {
    if number_of_waves < 1 {
        return Err(WavesError::validation("number of waves must be greater than 0"));
    }
    let resolved = options.resolve()?;
    let noise = match resolved.seed {
        Some(seed) => SimplexField::new(seed),
        None => SimplexField::random(),
    };
    static_waves_with_noise(number_of_waves, &resolved, &noise)
}

/// Static waves sampled from a caller-provided noise field.
pub fn static_waves_with_noise<N: NoiseField + ?Sized>(
    number_of_waves: usize,
    options: &ResolvedOptions,
    noise: &N,
) -> WavesResult<Vec<String>> {
    if number_of_waves < 1 {
        return Err(WavesError::validation("number of waves must be greater than 0"));
    }
    wave_heights(options.lowest_height, options.highest_height, number_of_waves)
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            create_static_wave_shape(&options.layer(i, h), 0.0, noise)
                .map(|shape| shape.path().to_owned())
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/static_waves.rs"]
mod tests;
