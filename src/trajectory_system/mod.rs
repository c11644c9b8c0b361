pub mod gravity;
pub mod kinematics;
