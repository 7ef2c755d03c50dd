//! The ball-possession state machine.
//!
//! Two states: free, or controlled by exactly one player. Contested
//! situations are not modeled explicitly - they emerge from re-evaluating
//! capture eligibility every substep.
//!
//! Transitions, evaluated up to twice per substep (after player movement
//! and again after ball movement):
//!
//! - **Capture** (free → controlled): only when the capture cooldown has
//!   expired and the ball is slow enough to trap. The nearest player within
//!   the capture radius wins; on an exact distance tie the earliest player
//!   in roster order wins.
//! - **Release by distance** (controlled → free): the holder drifted out of
//!   contact range plus slack. No cooldown; recapture can happen on the
//!   next evaluation.
//! - **Release by kick** (controlled → free): driven by the stepper's kick
//!   application, which starts the capture cooldown.
//!
//! While controlled, the ball is an attachment, not a free body: every
//! evaluation overwrites its transform to sit the dribble offset in front
//! of the holder and copy the holder's velocity.

use tracing::debug;

use crate::config::SimConfig;
use crate::entity::{Ball, Player, PlayerId};

/// Extra slack beyond the contact radius before a holder loses the ball by
/// distance.
const RELEASE_SLACK: f64 = 4.0;

/// How far inside the contact radius the ball sits while dribbled.
const DRIBBLE_BACKOFF: f64 = 2.0;

/// Distance at which a held ball is placed in front of its holder.
#[must_use]
pub fn dribble_offset(config: &SimConfig) -> f64 {
    (config.contact_radius() - DRIBBLE_BACKOFF).max(0.0)
}

/// Tracks which player, if any, controls the ball.
///
/// At most one holder exists at any time by construction. The
/// `cooldown_until` timestamp blocks all captures while the simulation
/// clock is before it, so a kicked ball cannot be re-trapped instantly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Possession {
    holder: Option<PlayerId>,
    cooldown_until: f64,
}

impl Possession {
    /// Creates a free-ball state with no pending cooldown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current holder, if any.
    #[must_use]
    pub fn holder(&self) -> Option<PlayerId> {
        self.holder
    }

    /// Timestamp before which no capture may succeed.
    #[must_use]
    pub fn cooldown_until(&self) -> f64 {
        self.cooldown_until
    }

    /// Clears the holder and any pending cooldown (kickoff reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Releases the ball after a kick and starts the capture cooldown.
    pub(crate) fn release_after_kick(&mut self, now: f64, cooldown: f64) {
        self.holder = None;
        self.cooldown_until = now + cooldown;
    }

    /// Runs one evaluation of the state machine: distance release, capture,
    /// and the dribble snap for a current holder.
    pub(crate) fn update(
        &mut self,
        players: &[Player],
        ball: &mut Ball,
        config: &SimConfig,
        now: f64,
    ) {
        let contact_radius = config.contact_radius();

        // Release: holder drifted away, or vanished in a roster reset.
        if let Some(id) = self.holder {
            match find(players, id) {
                Some(holder)
                    if holder.body.distance_to(&ball.body)
                        > contact_radius + RELEASE_SLACK =>
                {
                    debug!(player = %id, "possession released by distance");
                    self.holder = None;
                }
                Some(_) => {}
                None => self.holder = None,
            }
        }

        // Capture: nearest eligible player within the capture radius.
        if self.holder.is_none()
            && now >= self.cooldown_until
            && ball.body.speed() < config.ball.capture_speed
        {
            let capture_radius = contact_radius.min(config.kick.control_radius);
            let mut best: Option<PlayerId> = None;
            let mut best_distance = capture_radius;
            for player in players {
                let distance = player.body.distance_to(&ball.body);
                // Strict comparison keeps the first of equally-near players.
                if distance < best_distance {
                    best = Some(player.id);
                    best_distance = distance;
                }
            }
            if let Some(id) = best {
                debug!(player = %id, distance = best_distance, "ball captured");
                self.holder = Some(id);
            }
        }

        // Dribble snap: a held ball tracks its holder instead of integrating.
        if let Some(id) = self.holder {
            if let Some(holder) = find(players, id) {
                let direction = holder
                    .facing
                    .try_normalize()
                    .or_else(|| holder.body.velocity.try_normalize())
                    .unwrap_or_else(|| id.team().attack_direction());
                ball.body.position =
                    holder.body.position + direction * dribble_offset(config);
                ball.body.velocity = holder.body.velocity;
            }
        }
    }
}

fn find(players: &[Player], id: PlayerId) -> Option<&Player> {
    players.iter().find(|p| p.id == id)
}
