use nalgebra::{Matrix3, Quaternion, RealField};

/// Left-to-right product m1 · m2 · … · mn. The empty slice composes to the
/// identity.
pub fn compose_matrices<T: RealField + Copy>(matrices: &[Matrix3<T>]) -> Matrix3<T> {
    matrices
        .iter()
        .fold(Matrix3::identity(), |product, matrix| product * matrix)
}

/// Left-to-right Hamilton product q1 · q2 · … · qn.
pub fn compose_quaternions<T: RealField + Copy>(quaternions: &[Quaternion<T>]) -> Quaternion<T> {
    quaternions
        .iter()
        .fold(Quaternion::identity(), |product, quaternion| {
            product * quaternion
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn empty_compositions_are_identity() {
        assert_eq!(compose_matrices::<f64>(&[]), Matrix3::identity());
        assert_eq!(compose_quaternions::<f64>(&[]), Quaternion::identity());
    }

    #[test]
    fn matrix_composition_is_ordered_left_to_right() {
        let flip_xy = Matrix3::from_diagonal(&Vector3::new(-1.0, -1.0, 1.0));
        let swap = Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);

        assert_relative_eq!(
            compose_matrices(&[flip_xy, swap]),
            flip_xy * swap,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            compose_matrices(&[swap, flip_xy]),
            swap * flip_xy,
            epsilon = 1e-12
        );
    }

    #[test]
    fn quaternion_composition_is_ordered_left_to_right() {
        let q1 = Quaternion::from_parts(0.5_f64, Vector3::new(0.5, 0.5, 0.5));
        let q2 = Quaternion::from_parts(0.0_f64, Vector3::new(1.0, 0.0, 0.0));

        assert_relative_eq!(compose_quaternions(&[q1, q2]), q1 * q2, epsilon = 1e-12);
        assert_relative_eq!(compose_quaternions(&[q2, q1]), q2 * q1, epsilon = 1e-12);
    }
}
