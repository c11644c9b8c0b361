pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::parameters::{LaunchParameters, Parameter};
pub use control::prompt::Prompter;
pub use control::runner::{run_to_file, run_to_writer, RunReport};
pub use control::simulation::{StateRecord, StopReason, Trajectory};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::gravity::{gravity, GravityModel};
pub use trajectory_system::kinematics::{Integrator, KinematicState};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{output_file_name, Telemetry, TrajectoryWriter};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
