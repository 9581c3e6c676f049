use nalgebra::{Matrix3, Rotation3, Vector3};
use thiserror::Error;

/// Axes shorter than this are rejected; normalizing them is undefined.
pub const AXIS_LENGTH_EPSILON: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum RotationError {
    #[error("rotation axis has near-zero length ({length:.3e}), direction is undefined")]
    InvalidAxis { length: f64 },
}

/// Builds the rotation of `theta` radians about `axis` via Rodrigues' formula.
///
/// The axis does not need to be normalized, but must have non-zero length.
/// The result is orthonormal with determinant +1.
pub fn rotation_from_axis_angle(
    axis: &Vector3<f64>,
    theta: f64,
) -> Result<Rotation3<f64>, RotationError> {
    let length = axis.norm();
    if length <= AXIS_LENGTH_EPSILON {
        return Err(RotationError::InvalidAxis { length });
    }
    let ux = axis.x / length;
    let uy = axis.y / length;
    let uz = axis.z / length;
    let (s, c) = theta.sin_cos();

    let matrix = Matrix3::new(
        ux * ux + (1.0 - ux * ux) * c,
        ux * uy * (1.0 - c) - uz * s,
        ux * uz * (1.0 - c) + uy * s,
        ux * uy * (1.0 - c) + uz * s,
        uy * uy + (1.0 - uy * uy) * c,
        uy * uz * (1.0 - c) - ux * s,
        ux * uz * (1.0 - c) - uy * s,
        uy * uz * (1.0 - c) + ux * s,
        uz * uz + (1.0 - uz * uz) * c,
    );
    Ok(Rotation3::from_matrix_unchecked(matrix))
}

/// Builds the Euler rotation `Rz(gamma) · Rx(beta) · Rz(alpha)`.
///
/// Applying the result to a vector rotates by `alpha` about Z first, then
/// `beta` about X, then `gamma` about Z. The elemental matrices follow the
/// `[[cos, sin, 0], [-sin, cos, 0], [0, 0, 1]]` sign convention, which turns
/// vectors clockwise when viewed down the rotation axis; it is the inverse of
/// the axis-angle rotation about the same axis by the same angle.
pub fn rotation_from_euler_zxz(alpha: f64, beta: f64, gamma: f64) -> Rotation3<f64> {
    Rotation3::from_matrix_unchecked(elemental_z(gamma) * elemental_x(beta) * elemental_z(alpha))
}

/// Composes two rotations; applying the result is equivalent to applying `b`
/// first, then `a`.
pub fn compose(a: &Rotation3<f64>, b: &Rotation3<f64>) -> Rotation3<f64> {
    a * b
}

fn elemental_z(phi: f64) -> Matrix3<f64> {
    let (s, c) = phi.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

fn elemental_x(phi: f64) -> Matrix3<f64> {
    let (s, c) = phi.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}
