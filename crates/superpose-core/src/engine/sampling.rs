use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, TAU};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Maximum displacement must be non-negative, got {0}")]
    NegativeMagnitude(f64),
    #[error("Maximum rotation angle must be non-negative, got {0}")]
    NegativeAngle(f64),
}

/// Draws a random unit-length axis.
///
/// The azimuth is uniform in [0, 2π) and the polar angle uniform in
/// [-π/2, π/2]. Sampling the polar angle uniformly (rather than by its sine)
/// means the returned directions are not uniform over the sphere's surface
/// area: they concentrate toward the poles. This is a property of the
/// algorithm, not a defect to correct; callers needing surface-uniform
/// directions must resample.
pub fn random_unit_axis(rng: &mut impl Rng) -> Vector3<f64> {
    let alpha = rng.gen_range(0.0..TAU);
    let beta = rng.gen_range(-FRAC_PI_2..=FRAC_PI_2);

    Vector3::new(
        beta.cos() * alpha.sin(),
        beta.cos() * alpha.cos(),
        beta.sin(),
    )
}

/// Draws a random displacement with magnitude uniform in [0, `max_magnitude`]
/// along a random axis.
pub fn random_displacement(
    max_magnitude: f64,
    rng: &mut impl Rng,
) -> Result<Vector3<f64>, SamplingError> {
    if max_magnitude < 0.0 {
        return Err(SamplingError::NegativeMagnitude(max_magnitude));
    }
    let magnitude = rng.gen_range(0.0..=max_magnitude);
    Ok(random_unit_axis(rng) * magnitude)
}

/// Draws a trial rigid-body perturbation: an angle uniform in
/// [-`max_angle`, `max_angle`] and a random axis to rotate about.
#[instrument(level = "trace", skip_all, fields(max_angle))]
pub fn random_rotation(
    max_angle: f64,
    rng: &mut impl Rng,
) -> Result<(f64, Vector3<f64>), SamplingError> {
    if max_angle < 0.0 {
        return Err(SamplingError::NegativeAngle(max_angle));
    }
    let theta = rng.gen_range(-max_angle..=max_angle);
    Ok((theta, random_unit_axis(rng)))
}
