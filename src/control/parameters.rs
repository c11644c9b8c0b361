use crate::constants::{MAX_LAUNCH_ANGLE, MIN_LAUNCH_ANGLE};
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::KinematicState;

/// The five scalar inputs of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub initial_altitude: f64, // m
    pub initial_velocity: f64, // m/s
    pub launch_angle: f64,     // degrees
    pub time_step: f64,        // s
    pub duration: f64,         // s
}

/// Identifies one of the launch inputs, in prompting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    InitialAltitude,
    LaunchAngle,
    InitialVelocity,
    TimeStep,
    Duration,
}

impl Parameter {
    pub const PROMPT_ORDER: [Parameter; 5] = [
        Parameter::InitialAltitude,
        Parameter::LaunchAngle,
        Parameter::InitialVelocity,
        Parameter::TimeStep,
        Parameter::Duration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::InitialAltitude => "initial altitude",
            Parameter::LaunchAngle => "launch angle",
            Parameter::InitialVelocity => "initial velocity",
            Parameter::TimeStep => "time step",
            Parameter::Duration => "duration",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Parameter::InitialAltitude => "Enter initial altitude/elevation: ",
            Parameter::LaunchAngle => "Enter firing angle in degrees (0-90): ",
            Parameter::InitialVelocity => "Enter initial velocity (m/s): ",
            Parameter::TimeStep => "Enter the time step (s) per integration: ",
            Parameter::Duration => "Enter final time (s): ",
        }
    }

    /// Checks `value` against this input's domain.
    pub fn check(&self, value: f64) -> Result<f64, SimulationError> {
        if !value.is_finite() {
            return Err(self.invalid(value, "must be a finite number"));
        }
        match self {
            Parameter::InitialAltitude => Ok(value),
            Parameter::LaunchAngle if !(MIN_LAUNCH_ANGLE..=MAX_LAUNCH_ANGLE).contains(&value) => {
                Err(self.invalid(value, "must be between 0 and 90 degrees"))
            }
            Parameter::InitialVelocity if value < 0.0 => {
                Err(self.invalid(value, "must not be negative"))
            }
            Parameter::TimeStep | Parameter::Duration if value <= 0.0 => {
                Err(self.invalid(value, "must be greater than zero"))
            }
            _ => Ok(value),
        }
    }

    /// Parses and checks a raw text value.
    pub fn parse(&self, raw: &str) -> Result<f64, SimulationError> {
        let value = raw.trim().parse::<f64>().map_err(|_| {
            SimulationError::InvalidParameter(format!(
                "{}: '{}' is not a number",
                self.name(),
                raw.trim()
            ))
        })?;
        self.check(value)
    }

    fn invalid(&self, value: f64, reason: &str) -> SimulationError {
        SimulationError::InvalidParameter(format!("{} {} {}", self.name(), value, reason))
    }
}

impl LaunchParameters {
    /// Builds a validated bundle from raw text values given in command-line
    /// order: altitude, velocity, angle, time step, duration.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, SimulationError> {
        let [altitude, velocity, angle, time_step, duration] = args else {
            return Err(SimulationError::InvalidParameter(format!(
                "expected 5 values, got {}",
                args.len()
            )));
        };

        Ok(LaunchParameters {
            initial_altitude: Parameter::InitialAltitude.parse(altitude.as_ref())?,
            initial_velocity: Parameter::InitialVelocity.parse(velocity.as_ref())?,
            launch_angle: Parameter::LaunchAngle.parse(angle.as_ref())?,
            time_step: Parameter::TimeStep.parse(time_step.as_ref())?,
            duration: Parameter::Duration.parse(duration.as_ref())?,
        })
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::InitialAltitude => self.initial_altitude,
            Parameter::LaunchAngle => self.launch_angle,
            Parameter::InitialVelocity => self.initial_velocity,
            Parameter::TimeStep => self.time_step,
            Parameter::Duration => self.duration,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for parameter in Parameter::PROMPT_ORDER {
            parameter.check(self.get(parameter))?;
        }
        Ok(())
    }

    pub fn launch_angle_radians(&self) -> f64 {
        self.launch_angle.to_radians()
    }

    pub fn initial_state(&self) -> KinematicState {
        KinematicState::launch(
            self.initial_altitude,
            self.initial_velocity,
            self.launch_angle_radians(),
        )
    }
}
