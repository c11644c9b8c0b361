use crate::constants::HORIZONTAL_ACCELERATION;
use crate::utils::vector2d::Vector2D;

use super::gravity::GravityModel;

/// Position and velocity of the projectile; the four integration variables.
///
/// Acceleration is not stored. It is derived from the altitude through an
/// [`Integrator`] so it can never drift out of sync with `position.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: Vector2D,
    pub velocity: Vector2D,
}

impl KinematicState {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        KinematicState { position, velocity }
    }

    /// Launch state at `altitude` with `speed` along `angle` radians above
    /// the horizon.
    pub fn launch(altitude: f64, speed: f64, angle: f64) -> Self {
        KinematicState::new(
            Vector2D::new(0.0, altitude),
            Vector2D::from_polar(speed, angle),
        )
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn ground_distance(&self) -> f64 {
        self.position.x
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    fn advanced(&self, derivative: &Derivative, delta_time: f64) -> Self {
        KinematicState::new(
            self.position + derivative.velocity * delta_time,
            self.velocity + derivative.acceleration * delta_time,
        )
    }
}

// Time derivative of a KinematicState.
#[derive(Debug, Clone, Copy)]
struct Derivative {
    velocity: Vector2D,
    acceleration: Vector2D,
}

/// Fixed-step classical Runge-Kutta stepper under altitude-dependent gravity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator {
    gravity: GravityModel,
}

impl Integrator {
    pub fn new(gravity: GravityModel) -> Self {
        Integrator { gravity }
    }

    pub fn gravity(&self) -> &GravityModel {
        &self.gravity
    }

    /// Acceleration acting on `state`: constant horizontally, gravity at the
    /// current altitude vertically.
    pub fn acceleration(&self, state: &KinematicState) -> Vector2D {
        Vector2D::new(
            HORIZONTAL_ACCELERATION,
            self.gravity.acceleration_at(state.position.y),
        )
    }

    fn derivative(&self, state: &KinematicState) -> Derivative {
        Derivative {
            velocity: state.velocity,
            acceleration: self.acceleration(state),
        }
    }

    /// Advances `state` by exactly `delta_time` seconds.
    ///
    /// Gravity is re-evaluated at each stage's trial altitude. Non-finite
    /// values are propagated as-is.
    pub fn step(&self, state: &KinematicState, delta_time: f64) -> KinematicState {
        let half_step = delta_time / 2.0;

        let k1 = self.derivative(state);
        let k2 = self.derivative(&state.advanced(&k1, half_step));
        let k3 = self.derivative(&state.advanced(&k2, half_step));
        let k4 = self.derivative(&state.advanced(&k3, delta_time));

        KinematicState::new(
            state.position
                + (delta_time / 6.0)
                    * (k1.velocity + 2.0 * k2.velocity + 2.0 * k3.velocity + k4.velocity),
            state.velocity
                + (delta_time / 6.0)
                    * (k1.acceleration
                        + 2.0 * k2.acceleration
                        + 2.0 * k3.acceleration
                        + k4.acceleration),
        )
    }
}
