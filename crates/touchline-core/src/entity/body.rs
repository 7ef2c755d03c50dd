//! Kinematic base shared by players and the ball.
//!
//! Integration is plain Euler with exponential velocity damping. The
//! stepper supplies already-subdivided timesteps; nothing here iterates.
//! All arithmetic is `f64` end to end - collision outcomes under close
//! contacts are sensitive to precision, so the engine never downcasts.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Damping coefficients are expressed per frame at this reference rate and
/// rescaled to the actual substep size, keeping decay frame-rate independent.
pub const REFERENCE_RATE: f64 = 60.0;

/// A circular kinematic body: position, velocity, radius, mass.
///
/// Radius and mass are fixed for the lifetime of the body and validated at
/// setup ([`crate::config::SimConfig::validate`]), so the impulse path can
/// divide by mass unguarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Position in pitch coordinates (origin top-left, +x toward the away goal).
    pub position: DVec2,
    /// Velocity in units/second.
    pub velocity: DVec2,
    /// Contact radius.
    pub radius: f64,
    /// Mass, used only in impulse magnitudes. Never zero.
    pub mass: f64,
}

impl Body {
    /// Creates a body at rest.
    #[must_use]
    pub fn new(position: DVec2, radius: f64, mass: f64) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            radius,
            mass,
        }
    }

    /// Current speed, units/second.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Center-to-center distance to another body.
    #[must_use]
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }

    /// Euler position update: `position += velocity * dt`.
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// Exponential velocity decay: `velocity *= factor`.
    pub fn damp(&mut self, factor: f64) {
        self.velocity *= factor;
    }

    /// Velocity change from an impulse: `velocity += impulse / mass`.
    pub fn apply_impulse(&mut self, impulse: DVec2) {
        self.velocity += impulse / self.mass;
    }
}

/// Rescales a per-reference-frame damping coefficient to a substep of `dt`
/// seconds: `base^(dt * REFERENCE_RATE)`.
#[must_use]
pub fn damping_factor(base: f64, dt: f64) -> f64 {
    base.powf(dt * REFERENCE_RATE)
}
