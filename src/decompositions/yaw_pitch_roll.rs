use nalgebra::{Matrix3, Quaternion, RealField, Vector3};

/// Threshold on mxx² + mxy², the squared length of the rotated X axis
/// projected onto the world XY plane, below which the rotation is treated as
/// gimbal locked.
pub const DEFAULT_GIMBAL_LOCK_THRESHOLD: f64 = 1e-7;

/// Intrinsic yaw-pitch-roll angles recovered from a rotation matrix or a
/// unit quaternion.
///
/// Yaw and roll come out in (−π, π], pitch in [−π/2, π/2]. At gimbal lock
/// (pitch = ±90°) yaw and roll collapse into a single observable degree of
/// freedom; the convention here fixes roll = 0 and folds the whole rotation
/// about the shared axis into yaw.
///
/// Inputs are assumed to be proper rotations. A non-orthonormal matrix or a
/// non-unit quaternion is not detected and produces meaningless angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawPitchRollDecomposition<T: RealField + Copy> {
    pub yaw: T,
    pub pitch: T,
    pub roll: T,
}

impl<T: RealField + Copy> YawPitchRollDecomposition<T> {
    pub fn decompose(matrix: &Matrix3<T>) -> Self {
        Self::decompose_with_threshold(matrix, T::from_f64(DEFAULT_GIMBAL_LOCK_THRESHOLD).unwrap())
    }

    /// `threshold` bounds how far the rotated X axis may lie from the world
    /// Z axis while still taking the gimbal-locked path.
    pub fn decompose_with_threshold(matrix: &Matrix3<T>, threshold: T) -> Self {
        // The rotated X axis is column 0 of the matrix, read with (row, 0)
        // indices. Getting this transposed swaps angle signs silently.
        let mxx = matrix[(0, 0)];
        let mxy = matrix[(1, 0)];
        let mxz = matrix[(2, 0)];

        if mxx * mxx + mxy * mxy < threshold {
            return Self::gimbal_locked(mxz, matrix[(0, 2)], matrix[(1, 2)]);
        }

        Self::standard(mxx, mxy, mxz, matrix[(2, 1)], matrix[(2, 2)])
    }

    pub fn from_quaternion(quaternion: &Quaternion<T>) -> Self {
        Self::from_quaternion_with_threshold(
            quaternion,
            T::from_f64(DEFAULT_GIMBAL_LOCK_THRESHOLD).unwrap(),
        )
    }

    /// Derives the rotation-matrix entries the recovery needs algebraically
    /// from the quaternion and feeds them through the same two paths as
    /// [`Self::decompose_with_threshold`], so the two entry points cannot
    /// disagree.
    pub fn from_quaternion_with_threshold(quaternion: &Quaternion<T>, threshold: T) -> Self {
        let two = T::from_f32(2.0).unwrap();
        let (a, b, c, d) = (quaternion.w, quaternion.i, quaternion.j, quaternion.k);

        let mxx = a * a + b * b - c * c - d * d;
        let mxy = two * (b * c + a * d);
        let mxz = two * (b * d - a * c);

        if mxx * mxx + mxy * mxy < threshold {
            let mzx = two * (b * d + a * c);
            let mzy = two * (c * d - a * b);
            return Self::gimbal_locked(mxz, mzx, mzy);
        }

        let myz = two * (c * d + a * b);
        let mzz = a * a - b * b - c * c + d * d;

        Self::standard(mxx, mxy, mxz, myz, mzz)
    }

    pub fn angles(&self) -> Vector3<T> {
        Vector3::new(self.yaw, self.pitch, self.roll)
    }

    fn standard(mxx: T, mxy: T, mxz: T, myz: T, mzz: T) -> Self {
        Self {
            // Yaw is the azimuth of the rotated X axis in the world XY
            // plane, +Y positive.
            yaw: mxy.atan2(mxx),
            // Pitch is the elevation of the rotated X axis above the XY
            // plane; positive pitch tilts it towards -Z.
            pitch: (-mxz).atan2((mxx * mxx + mxy * mxy).sqrt()),
            // Roll is read from the rotated Z axis projected onto the world
            // YZ plane.
            roll: myz.atan2(mzz),
        }
    }

    fn gimbal_locked(mxz: T, mzx: T, mzy: T) -> Self {
        // An exactly vertical X axis has mxz = ∓1, but a tilt of exactly
        // zero must still pick a pitch sign; zero counts as positive.
        let sgn_pitch = if -mxz < T::zero() { -T::one() } else { T::one() };
        let cos_yaw = mzx * sgn_pitch;
        let sin_yaw = mzy * sgn_pitch;

        Self {
            yaw: sin_yaw.atan2(cos_yaw),
            pitch: T::frac_pi_2() * sgn_pitch,
            roll: T::zero(),
        }
    }
}
