use crate::constants::{EARTH_RADIUS, STANDARD_GRAVITY};

/// Inverse-square gravity referenced to the surface of a spherical body.
///
/// `surface_gravity` carries its sign: negative values pull toward
/// decreasing altitude. The model is total; at `altitude == -body_radius`
/// the formula has a pole and returns a non-finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityModel {
    pub surface_gravity: f64,
    pub body_radius: f64,
}

impl GravityModel {
    pub fn new(surface_gravity: f64, body_radius: f64) -> Self {
        GravityModel {
            surface_gravity,
            body_radius,
        }
    }

    pub fn earth() -> Self {
        GravityModel::new(STANDARD_GRAVITY, EARTH_RADIUS)
    }

    /// Local vertical acceleration at `altitude` meters above the datum.
    pub fn acceleration_at(&self, altitude: f64) -> f64 {
        let ratio = self.body_radius / (self.body_radius + altitude);
        self.surface_gravity * (ratio * ratio)
    }
}

impl Default for GravityModel {
    fn default() -> Self {
        GravityModel::earth()
    }
}

/// Earth gravity at `altitude`, in m/s².
pub fn gravity(altitude: f64) -> f64 {
    GravityModel::earth().acceleration_at(altitude)
}
