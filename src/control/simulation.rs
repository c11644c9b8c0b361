use tracing::debug;

use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::{Integrator, KinematicState};
use crate::utils::vector2d::Vector2D;

use super::parameters::{LaunchParameters, Parameter};

/// One emitted sample of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRecord {
    pub time: f64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    DurationElapsed,
    GroundImpact,
}

/// Fixed-step run of the integrator, yielding a record after every step
/// that ends within the duration and at or above the datum.
///
/// Time is accumulated step by step. Non-finite altitudes fail the datum
/// check and end the run as a ground impact.
pub struct Trajectory {
    integrator: Integrator,
    state: KinematicState,
    time: f64,
    time_step: f64,
    duration: f64,
    stop_reason: Option<StopReason>,
}

impl Trajectory {
    /// Validates `params` and starts a run from their launch state.
    pub fn new(
        integrator: Integrator,
        params: &LaunchParameters,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        Trajectory::from_state(
            integrator,
            params.initial_state(),
            params.time_step,
            params.duration,
        )
    }

    /// Starts a run from an arbitrary state. The step and duration must be
    /// finite and positive; the state itself is not checked.
    pub fn from_state(
        integrator: Integrator,
        state: KinematicState,
        time_step: f64,
        duration: f64,
    ) -> Result<Self, SimulationError> {
        Ok(Trajectory {
            integrator,
            state,
            time: 0.0,
            time_step: Parameter::TimeStep.check(time_step)?,
            duration: Parameter::Duration.check(duration)?,
            stop_reason: None,
        })
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Why the run ended; `None` while it is still in progress.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn record(&self) -> StateRecord {
        StateRecord {
            time: self.time,
            position: self.state.position,
            velocity: self.state.velocity,
            acceleration: self.integrator.acceleration(&self.state),
        }
    }

    fn check_running(&mut self) -> bool {
        let reason = if self.time > self.duration {
            StopReason::DurationElapsed
        } else if self.state.altitude() < 0.0 || self.state.altitude().is_nan() {
            StopReason::GroundImpact
        } else {
            return true;
        };

        debug!(
            ?reason,
            time = self.time,
            altitude = self.state.altitude(),
            "trajectory finished"
        );
        self.stop_reason = Some(reason);
        false
    }
}

impl Iterator for Trajectory {
    type Item = StateRecord;

    fn next(&mut self) -> Option<StateRecord> {
        if self.stop_reason.is_some() || !self.check_running() {
            return None;
        }

        self.time += self.time_step;
        self.state = self.integrator.step(&self.state, self.time_step);

        if self.check_running() {
            Some(self.record())
        } else {
            None
        }
    }
}
