//! The per-tick decision contract between agents and the engine.
//!
//! A [`Decision`] is the complete output an agent produces for one player
//! per agent tick: a steering direction, a sprint flag, and an optional
//! kick intent. Decisions are plain data; agents may construct them
//! directly or through the [`DecisionBuilder`] sugar.
//!
//! # Trust Boundary
//!
//! Agents are untrusted: the engine sanitizes every decision before use
//! ([`Decision::sanitize`]) and never rejects one. A malformed agent can
//! waste its own tick, but it cannot crash or destabilize the simulation.

use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::entity::PlayerId;

/// The latest latched decision for each player. A missing entry means
/// "full stop, no kick".
pub type DecisionMap = HashMap<PlayerId, Decision>;

/// A kick intent: strike the ball at `power` of maximum strength along
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kick {
    /// Fraction of the configured maximum kick power, in [0, 1].
    pub power: f64,
    /// Unit direction the ball is sent along.
    pub direction: DVec2,
}

/// One player's output for one agent tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Decision {
    /// Steering direction. Magnitude above 1 is clamped to unit length;
    /// magnitude below 1 is a deliberate partial-throttle command.
    pub movement: DVec2,
    /// Raises the player's speed ceiling by the sprint multiplier.
    pub sprint: bool,
    /// Kick intent, if any. `None` means no kick attempted this tick.
    pub kick: Option<Kick>,
}

impl Decision {
    /// The decision applied for players whose agent produced nothing:
    /// full stop, no kick.
    #[must_use]
    pub fn stop() -> Self {
        Self::default()
    }

    /// Enforces the decision contract on untrusted agent output:
    ///
    /// - non-finite `movement` components are zeroed;
    /// - `movement` longer than unit is clamped to unit length (shorter
    ///   vectors pass through untouched);
    /// - `kick.power` is clamped to [0, 1], non-finite becomes 0;
    /// - `kick.direction` is renormalized to unit length, falling back to
    ///   +x when zero or non-finite.
    #[must_use]
    pub fn sanitize(self) -> Self {
        let movement = finite_or_zero(self.movement).clamp_length_max(1.0);
        let kick = self.kick.map(|kick| {
            let power = if kick.power.is_finite() {
                kick.power.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let direction = finite_or_zero(kick.direction)
                .try_normalize()
                .unwrap_or(DVec2::X);
            Kick { power, direction }
        });
        Self {
            movement,
            sprint: self.sprint,
            kick,
        }
    }
}

fn finite_or_zero(v: DVec2) -> DVec2 {
    DVec2::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
    )
}

/// Fluent convenience layer for building a [`Decision`].
///
/// Pure sugar over the data shape: every method is expressible by filling
/// in fields directly, and [`DecisionBuilder::build`] runs the same
/// sanitization the engine applies anyway.
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use touchline_core::decision::DecisionBuilder;
///
/// let decision = DecisionBuilder::new()
///     .move_toward(DVec2::new(0.0, 0.0), DVec2::new(100.0, 0.0))
///     .sprint(true)
///     .build();
/// assert_eq!(decision.movement, DVec2::X);
/// assert!(decision.sprint);
/// assert!(decision.kick.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionBuilder {
    decision: Decision,
}

impl DecisionBuilder {
    /// Starts from a full stop with no kick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steer at full throttle from `from` toward `target`. Coincident
    /// points produce a stop.
    #[must_use]
    pub fn move_toward(mut self, from: DVec2, target: DVec2) -> Self {
        self.decision.movement = (target - from).normalize_or_zero();
        self
    }

    /// Steer along a raw direction (sanitized on build).
    #[must_use]
    pub fn move_in(mut self, direction: DVec2) -> Self {
        self.decision.movement = direction;
        self
    }

    /// Clear the movement command.
    #[must_use]
    pub fn stop(mut self) -> Self {
        self.decision.movement = DVec2::ZERO;
        self
    }

    /// Set the sprint flag.
    #[must_use]
    pub fn sprint(mut self, enabled: bool) -> Self {
        self.decision.sprint = enabled;
        self
    }

    /// Request a kick along a raw direction.
    #[must_use]
    pub fn kick(mut self, power: f64, direction: DVec2) -> Self {
        self.decision.kick = Some(Kick { power, direction });
        self
    }

    /// Request a kick aimed from the ball's position at a target point.
    #[must_use]
    pub fn kick_toward(self, ball: DVec2, target: DVec2, power: f64) -> Self {
        self.kick(power, target - ball)
    }

    /// Finalizes the decision, applying [`Decision::sanitize`].
    #[must_use]
    pub fn build(self) -> Decision {
        self.decision.sanitize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sanitize_tests {
        use super::*;

        #[test]
        fn short_movement_is_untouched() {
            let decision = Decision {
                movement: DVec2::new(0.3, 0.4),
                ..Decision::default()
            };
            assert_eq!(decision.sanitize().movement, DVec2::new(0.3, 0.4));
        }

        #[test]
        fn long_movement_clamps_to_unit() {
            let decision = Decision {
                movement: DVec2::new(3.0, 4.0),
                ..Decision::default()
            };
            let movement = decision.sanitize().movement;
            assert!((movement.length() - 1.0).abs() < 1e-12);
            assert!((movement.x - 0.6).abs() < 1e-12);
            assert!((movement.y - 0.8).abs() < 1e-12);
        }

        #[test]
        fn non_finite_movement_zeroed() {
            let decision = Decision {
                movement: DVec2::new(f64::NAN, f64::INFINITY),
                ..Decision::default()
            };
            assert_eq!(decision.sanitize().movement, DVec2::ZERO);
        }

        #[test]
        fn mixed_finite_component_survives() {
            let decision = Decision {
                movement: DVec2::new(f64::NAN, 0.5),
                ..Decision::default()
            };
            assert_eq!(decision.sanitize().movement, DVec2::new(0.0, 0.5));
        }

        #[test]
        fn kick_power_clamped() {
            let decision = Decision {
                kick: Some(Kick {
                    power: 7.0,
                    direction: DVec2::Y,
                }),
                ..Decision::default()
            };
            let kick = decision.sanitize().kick.unwrap();
            assert!((kick.power - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn nan_kick_power_becomes_zero() {
            let decision = Decision {
                kick: Some(Kick {
                    power: f64::NAN,
                    direction: DVec2::Y,
                }),
                ..Decision::default()
            };
            let kick = decision.sanitize().kick.unwrap();
            assert!(kick.power.abs() < f64::EPSILON);
        }

        #[test]
        fn kick_direction_renormalized() {
            let decision = Decision {
                kick: Some(Kick {
                    power: 1.0,
                    direction: DVec2::new(0.0, 10.0),
                }),
                ..Decision::default()
            };
            let kick = decision.sanitize().kick.unwrap();
            assert_eq!(kick.direction, DVec2::Y);
        }

        #[test]
        fn zero_kick_direction_falls_back_to_plus_x() {
            let decision = Decision {
                kick: Some(Kick {
                    power: 0.5,
                    direction: DVec2::ZERO,
                }),
                ..Decision::default()
            };
            let kick = decision.sanitize().kick.unwrap();
            assert_eq!(kick.direction, DVec2::X);
        }

        #[test]
        fn non_finite_kick_direction_falls_back_to_plus_x() {
            let decision = Decision {
                kick: Some(Kick {
                    power: 0.5,
                    direction: DVec2::new(f64::NAN, f64::NAN),
                }),
                ..Decision::default()
            };
            let kick = decision.sanitize().kick.unwrap();
            assert_eq!(kick.direction, DVec2::X);
        }

        #[test]
        fn absent_kick_stays_absent() {
            assert!(Decision::stop().sanitize().kick.is_none());
        }
    }

    mod builder_tests {
        use super::*;

        #[test]
        fn move_toward_normalizes() {
            let decision = DecisionBuilder::new()
                .move_toward(DVec2::ZERO, DVec2::new(0.0, -50.0))
                .build();
            assert_eq!(decision.movement, DVec2::NEG_Y);
        }

        #[test]
        fn move_toward_self_stops() {
            let at = DVec2::new(40.0, 40.0);
            let decision = DecisionBuilder::new().move_toward(at, at).build();
            assert_eq!(decision.movement, DVec2::ZERO);
        }

        #[test]
        fn kick_toward_aims_from_ball() {
            let decision = DecisionBuilder::new()
                .kick_toward(DVec2::new(100.0, 100.0), DVec2::new(100.0, 0.0), 0.8)
                .build();
            let kick = decision.kick.unwrap();
            assert_eq!(kick.direction, DVec2::NEG_Y);
            assert!((kick.power - 0.8).abs() < f64::EPSILON);
        }

        #[test]
        fn stop_clears_movement() {
            let decision = DecisionBuilder::new()
                .move_in(DVec2::X)
                .stop()
                .build();
            assert_eq!(decision.movement, DVec2::ZERO);
        }
    }
}
