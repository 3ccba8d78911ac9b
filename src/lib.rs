//! Conversions between the three common encodings of a 3-D rotation:
//! intrinsic yaw-pitch-roll angles, a 3×3 rotation matrix and a unit
//! quaternion. The interesting direction is the recovery of the angles,
//! which has to deal with the gimbal-lock singularity at pitch = ±90°.

pub mod composition;
pub mod decompositions;
pub mod quaternions;
pub mod transforms;

pub use decompositions::yaw_pitch_roll::{
    YawPitchRollDecomposition, DEFAULT_GIMBAL_LOCK_THRESHOLD,
};
pub use quaternions::DegenerateAxisError;
