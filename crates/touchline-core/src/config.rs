//! Simulation configuration and setup validation.
//!
//! All tunables consumed by the engine live in [`SimConfig`]. The
//! configuration is fixed at initialization: [`crate::stepper::SimulationState::new`]
//! validates it once and refuses to run on invalid values, so the step loop
//! never has to guard against division by zero mid-simulation.
//!
//! # Reference Values
//!
//! `SimConfig::default()` is the reference configuration: a 900×600 pitch,
//! 14-unit players, a 7-unit ball, 60 Hz substeps, and a 30 Hz agent tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Playable field dimensions, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field width along the x axis (goal-to-goal).
    pub width: f64,
    /// Field height along the y axis (touchline-to-touchline).
    pub height: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
        }
    }
}

/// Pitch markings and goal-area geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchConfig {
    /// Distance from the field edge to the painted boundary lines.
    pub margin: f64,
    /// Vertical extent of each goal mouth, centered on the field.
    pub goal_height: f64,
    /// How far past the goal line the ball may travel before hitting the
    /// back wall of the goal channel.
    pub goal_depth: f64,
    /// Radius of the goalkeeper's area, measured from the goal center.
    pub area_radius: f64,
    /// Extra padding between bodies and the painted lines.
    pub line_padding: f64,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            goal_height: 180.0,
            goal_depth: 30.0,
            area_radius: 80.0,
            line_padding: 6.0,
        }
    }
}

/// Per-player kinematic limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Body radius used for contact and containment tests.
    pub radius: f64,
    /// Body mass used in impulse magnitudes.
    pub mass: f64,
    /// Speed ceiling without sprinting, units/second.
    pub max_speed: f64,
    /// Commanded acceleration magnitude, units/second².
    pub max_accel: f64,
    /// Speed ceiling multiplier while sprinting.
    pub sprint_multiplier: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 14.0,
            mass: 10.0,
            max_speed: 320.0,
            max_accel: 1200.0,
            sprint_multiplier: 1.35,
        }
    }
}

/// Ball body and rolling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    /// Body radius used for contact and containment tests.
    pub radius: f64,
    /// Body mass used in impulse magnitudes.
    pub mass: f64,
    /// Continuous friction coefficient, applied per reference frame.
    pub friction: f64,
    /// Continuous rolling-resistance coefficient, applied per reference frame.
    pub rolling_resistance: f64,
    /// Speed below which a free ball becomes capturable, units/second.
    pub capture_speed: f64,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 7.0,
            mass: 1.0,
            friction: 0.995,
            rolling_resistance: 0.998,
            capture_speed: 240.0,
        }
    }
}

/// Integration stepping and restitution coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Target substep size, seconds. Elapsed frame time is subdivided into
    /// substeps no larger than this.
    pub fixed_dt: f64,
    /// Upper bound on substeps per step call.
    pub max_substeps: usize,
    /// Restitution for ball reflections off pitch and goal-channel walls.
    pub wall_restitution: f64,
    /// Restitution for player-player contacts.
    pub player_restitution: f64,
    /// Restitution for ball-player contacts.
    pub ball_restitution: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_substeps: 5,
            wall_restitution: 0.7,
            player_restitution: 0.6,
            ball_restitution: 0.7,
        }
    }
}

/// Kick strength and possession-capture tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KickConfig {
    /// Ball speed assigned by a full-power kick, units/second.
    pub max_power: f64,
    /// Capture radius: a free ball is trapped only by players closer than
    /// this (and closer than the contact radius).
    pub control_radius: f64,
    /// Capture lock-out after a kick, seconds. While the cooldown runs no
    /// player (including the kicker) may recapture the ball.
    pub cooldown: f64,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            max_power: 1200.0,
            control_radius: 18.0,
            cooldown: 0.2,
        }
    }
}

/// Match-runner cadence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Agent decision refresh rate, Hz. Decisions are latched and reused by
    /// the physics step between refreshes.
    pub ai_tick_hz: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { ai_tick_hz: 30.0 }
    }
}

/// Complete engine configuration, fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// Field dimensions.
    pub field: FieldConfig,
    /// Pitch markings and goal geometry.
    pub pitch: PitchConfig,
    /// Player kinematics.
    pub player: PlayerConfig,
    /// Ball body and rolling behavior.
    pub ball: BallConfig,
    /// Stepping and restitution.
    pub physics: PhysicsConfig,
    /// Kick and capture tunables.
    pub kick: KickConfig,
    /// Agent cadence.
    pub runner: RunnerConfig,
}

impl SimConfig {
    /// Sum of player and ball radii: the distance at which the two bodies
    /// touch, used for possession contact tests.
    #[must_use]
    pub fn contact_radius(&self) -> f64 {
        self.player.radius + self.ball.radius
    }

    /// Checks every invariant the step loop relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant. Zero or negative radii, masses,
    /// substep sizes, and speed limits are all fatal setup errors; the
    /// engine refuses to run rather than divide by zero mid-simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field.width > 0.0 && self.field.height > 0.0)
            || !self.field.width.is_finite()
            || !self.field.height.is_finite()
        {
            return Err(ConfigError::InvalidField {
                width: self.field.width,
                height: self.field.height,
            });
        }
        Self::positive("player radius", self.player.radius)?;
        Self::positive("player mass", self.player.mass)?;
        Self::positive("player max speed", self.player.max_speed)?;
        Self::positive("player max accel", self.player.max_accel)?;
        Self::positive("player sprint multiplier", self.player.sprint_multiplier)?;
        Self::positive("ball radius", self.ball.radius)?;
        Self::positive("ball mass", self.ball.mass)?;
        Self::unit_range("ball friction", self.ball.friction)?;
        Self::unit_range("ball rolling resistance", self.ball.rolling_resistance)?;
        Self::non_negative("ball capture speed", self.ball.capture_speed)?;
        if !(self.physics.fixed_dt > 0.0) || !self.physics.fixed_dt.is_finite() {
            return Err(ConfigError::InvalidSubstep(self.physics.fixed_dt));
        }
        if self.physics.max_substeps == 0 {
            return Err(ConfigError::InvalidMaxSubsteps);
        }
        Self::non_negative("wall restitution", self.physics.wall_restitution)?;
        Self::non_negative("player restitution", self.physics.player_restitution)?;
        Self::non_negative("ball restitution", self.physics.ball_restitution)?;
        Self::non_negative("kick max power", self.kick.max_power)?;
        Self::positive("kick control radius", self.kick.control_radius)?;
        Self::non_negative("kick cooldown", self.kick.cooldown)?;
        Self::non_negative("pitch margin", self.pitch.margin)?;
        Self::positive("goal height", self.pitch.goal_height)?;
        Self::non_negative("goal depth", self.pitch.goal_depth)?;
        Self::positive("keeper area radius", self.pitch.area_radius)?;
        Self::non_negative("line padding", self.pitch.line_padding)?;
        Self::positive("ai tick rate", self.runner.ai_tick_hz)?;
        Ok(())
    }

    fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { name, value })
        }
    }

    fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if value >= 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::Negative { name, value })
        }
    }

    fn unit_range(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if value > 0.0 && value <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::OutsideUnitRange { name, value })
        }
    }
}

/// A configuration invariant violated at setup time.
///
/// These are the only fatal errors the engine produces; everything at
/// runtime is recovered by clamping or skipping.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Field dimensions must be positive and finite.
    #[error("field dimensions must be positive and finite: {width}x{height}")]
    InvalidField {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },

    /// A value that must be strictly positive was not.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending setting.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A value that must be non-negative was not.
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative {
        /// Name of the offending setting.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A coefficient that must lie in (0, 1] was outside it.
    #[error("{name} must lie in (0, 1], got {value}")]
    OutsideUnitRange {
        /// Name of the offending setting.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The fixed substep size must be positive and finite.
    #[error("fixed substep size must be positive and finite, got {0}")]
    InvalidSubstep(f64),

    /// At least one substep per step call is required.
    #[error("max substeps must be at least 1")]
    InvalidMaxSubsteps,
}
