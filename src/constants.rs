// Physical Constants
pub const STANDARD_GRAVITY: f64 = -9.80665; // m/s², negative points down
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters, mean radius
pub const HORIZONTAL_ACCELERATION: f64 = 0.0; // m/s², no horizontal force

// Launch Constraints
pub const MIN_LAUNCH_ANGLE: f64 = 0.0; // degrees
pub const MAX_LAUNCH_ANGLE: f64 = 90.0; // degrees

// Output Precision
pub const TIME_PRECISION: usize = 6; // decimals
pub const STATE_PRECISION: usize = 9; // decimals
pub const OUTPUT_EXTENSION: &str = "dat";
