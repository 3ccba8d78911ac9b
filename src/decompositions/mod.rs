pub mod yaw_pitch_roll;
