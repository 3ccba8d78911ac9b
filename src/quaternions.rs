use crate::composition::compose_quaternions;
use nalgebra::{Quaternion, RealField, Vector3};
use num_traits::identities::Zero;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rotation axis has zero length")]
pub struct DegenerateAxisError;

/// Unit quaternion rotating by `angle` around `axis`. The axis does not need
/// to arrive normalized, but a zero axis has no direction to rotate around.
pub fn axis_angle_quaternion<T: RealField + Copy>(
    axis: Vector3<T>,
    angle: T,
) -> Result<Quaternion<T>, DegenerateAxisError> {
    if axis.is_zero() {
        return Err(DegenerateAxisError);
    }

    let half_angle = angle * T::from_f32(0.5).unwrap();
    Ok(Quaternion::from_parts(
        half_angle.cos(),
        axis.normalize() * half_angle.sin(),
    ))
}

/// Rotation about the X axis.
pub fn roll_quaternion<T: RealField + Copy>(angle: T) -> Quaternion<T> {
    let half_angle = angle * T::from_f32(0.5).unwrap();
    Quaternion::from_parts(half_angle.cos(), Vector3::x() * half_angle.sin())
}

/// Rotation about the Y axis.
pub fn pitch_quaternion<T: RealField + Copy>(angle: T) -> Quaternion<T> {
    let half_angle = angle * T::from_f32(0.5).unwrap();
    Quaternion::from_parts(half_angle.cos(), Vector3::y() * half_angle.sin())
}

/// Rotation about the Z axis.
pub fn yaw_quaternion<T: RealField + Copy>(angle: T) -> Quaternion<T> {
    let half_angle = angle * T::from_f32(0.5).unwrap();
    Quaternion::from_parts(half_angle.cos(), Vector3::z() * half_angle.sin())
}

/// Unit quaternion for intrinsic yaw-pitch-roll angles, with the same
/// operand order as [`crate::transforms::euler_to_matrix`].
pub fn euler_to_quaternion<T: RealField + Copy>(yaw: T, pitch: T, roll: T) -> Quaternion<T> {
    compose_quaternions(&[
        yaw_quaternion(yaw),
        pitch_quaternion(pitch),
        roll_quaternion(roll),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_3;

    #[test]
    fn zero_axis_is_rejected() {
        assert_eq!(
            axis_angle_quaternion(Vector3::zeros(), 1.0),
            Err(DegenerateAxisError)
        );
    }

    #[test]
    fn axis_is_normalized_before_use() {
        let from_long_axis = axis_angle_quaternion(Vector3::new(0.0, 0.0, 5.0), FRAC_PI_3).unwrap();
        assert_relative_eq!(from_long_axis, yaw_quaternion(FRAC_PI_3), epsilon = 1e-12);
    }

    #[test]
    fn elemental_quaternions_match_axis_angle_construction() {
        let angle = 0.9;
        assert_relative_eq!(
            roll_quaternion(angle),
            axis_angle_quaternion(Vector3::x(), angle).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            pitch_quaternion(angle),
            axis_angle_quaternion(Vector3::y(), angle).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            yaw_quaternion(angle),
            axis_angle_quaternion(Vector3::z(), angle).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn euler_quaternions_have_unit_norm() {
        let q = euler_to_quaternion(2.4, -1.1, 0.6);
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
    }
}
