use crate::composition::compose_matrices;
use nalgebra::{Matrix3, RealField};

/// Rotation about the X axis.
pub fn roll_matrix<T: RealField + Copy>(angle: T) -> Matrix3<T> {
    let mut rot_x = Matrix3::zeros();

    rot_x[(0, 0)] = T::one();

    rot_x[(1, 1)] = angle.cos();
    rot_x[(1, 2)] = -angle.sin();
    rot_x[(2, 1)] = angle.sin();
    rot_x[(2, 2)] = angle.cos();

    rot_x
}

/// Rotation about the Y axis.
pub fn pitch_matrix<T: RealField + Copy>(angle: T) -> Matrix3<T> {
    let mut rot_y = Matrix3::zeros();

    rot_y[(1, 1)] = T::one();

    rot_y[(0, 0)] = angle.cos();
    rot_y[(0, 2)] = angle.sin();
    rot_y[(2, 0)] = -angle.sin();
    rot_y[(2, 2)] = angle.cos();

    rot_y
}

/// Rotation about the Z axis.
pub fn yaw_matrix<T: RealField + Copy>(angle: T) -> Matrix3<T> {
    let mut rot_z = Matrix3::zeros();

    rot_z[(2, 2)] = T::one();

    rot_z[(0, 0)] = angle.cos();
    rot_z[(0, 1)] = -angle.sin();
    rot_z[(1, 0)] = angle.sin();
    rot_z[(1, 1)] = angle.cos();

    rot_z
}

/// Rotation matrix for intrinsic yaw-pitch-roll angles. Roll is applied
/// first, yaw last in the world frame.
pub fn euler_to_matrix<T: RealField + Copy>(yaw: T, pitch: T, roll: T) -> Matrix3<T> {
    compose_matrices(&[yaw_matrix(yaw), pitch_matrix(pitch), roll_matrix(roll)])
}
