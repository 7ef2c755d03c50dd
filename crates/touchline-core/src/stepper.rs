//! The fixed-substep simulation driver.
//!
//! [`SimulationState`] owns everything the engine mutates - config,
//! rosters, ball, possession, clock. [`Stepper`] advances a state by a
//! wall-clock delta, subdividing it into bounded substeps for numerical
//! stability.
//!
//! # Substep Order
//!
//! Within each substep the phases run in a fixed, load-bearing order:
//!
//! 1. apply controls (accelerate, clamp speed, integrate, damp players)
//! 2. clamp players to their legal areas
//! 3. resolve player-player collisions
//! 4. update possession
//! 5. apply kicks
//! 6. integrate the ball
//! 7. reflect the ball off the walls (goal-aware)
//! 8. resolve ball-player collisions
//! 9. update possession again
//!
//! Possession must be evaluated after player movement *and* after ball
//! movement, and kicks must land before the ball integrates so a kicked
//! ball moves in the same substep it was struck.
//!
//! # Example
//!
//! ```
//! use touchline_core::config::SimConfig;
//! use touchline_core::decision::DecisionMap;
//! use touchline_core::stepper::{SimulationState, Stepper};
//!
//! let mut state = SimulationState::new(SimConfig::default()).unwrap();
//! Stepper::step(&mut state, 1.0 / 60.0, &DecisionMap::new());
//! assert!(state.time() > 0.0);
//! ```

use glam::DVec2;
use tracing::debug;

use crate::config::{ConfigError, SimConfig};
use crate::decision::DecisionMap;
use crate::entity::{damping_factor, Ball, Player, PlayerId};
use crate::physics::{bounds::Pitch, collision};
use crate::possession::Possession;
use crate::view::WorldView;

/// Per-reference-frame velocity decay applied to players each substep.
const PLAYER_DAMPING: f64 = 0.985;

/// Commanded movement below this magnitude does not reorient facing.
const FACING_DEADBAND: f64 = 0.01;

/// Slack beyond the contact radius within which a kick still connects.
const KICK_SLACK: f64 = 1.0;

/// The complete mutable state of one running simulation.
///
/// Explicitly owned and passed by reference into [`Stepper`] - there are no
/// process-wide globals. Possession and its cooldown are fields here, not
/// ambient state.
#[derive(Debug, Clone)]
pub struct SimulationState {
    config: SimConfig,
    pitch: Pitch,
    players: Vec<Player>,
    ball: Ball,
    possession: Possession,
    clock: f64,
}

impl SimulationState {
    /// Creates a state with an empty roster and the ball at the center
    /// spot.
    ///
    /// # Errors
    ///
    /// Rejects configurations that violate [`SimConfig::validate`]; the
    /// engine refuses to run rather than divide by zero mid-simulation.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            tracing::error!(%err, "rejecting invalid simulation config");
            return Err(err);
        }
        let pitch = Pitch::new(&config);
        let ball = Ball::new(Self::center_spot(&config), &config.ball);
        Ok(Self {
            config,
            pitch,
            players: Vec::new(),
            ball,
            possession: Possession::new(),
            clock: 0.0,
        })
    }

    fn center_spot(config: &SimConfig) -> DVec2 {
        DVec2::new(config.field.width / 2.0, config.field.height / 2.0)
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Derived pitch geometry.
    #[must_use]
    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    /// The current roster, in enumeration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a player by identity.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The ball.
    #[must_use]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// The possession tracker.
    #[must_use]
    pub fn possession(&self) -> &Possession {
        &self.possession
    }

    /// Simulation time, seconds. Advances by exactly the elapsed time
    /// passed to each (valid) step call.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.clock
    }

    /// Replaces the roster. Possession of a vanished holder resolves on the
    /// next evaluation.
    pub fn set_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    /// Kickoff reset: installs a fresh roster, recreates the ball at the
    /// center spot, and clears possession. The clock keeps running - the
    /// reset contract is "entities reset, then the core resumes".
    pub fn reset_kickoff(&mut self, players: Vec<Player>) {
        debug!(players = players.len(), "kickoff reset");
        self.players = players;
        self.ball = Ball::new(Self::center_spot(&self.config), &self.config.ball);
        self.possession.reset();
    }

    /// A read-only snapshot view for agents.
    #[must_use]
    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(self)
    }
}

/// The fixed-substep driver. Stateless: all state lives in the
/// [`SimulationState`] it is handed.
pub struct Stepper;

impl Stepper {
    /// Advances the simulation by `elapsed` wall-clock seconds against the
    /// latest latched decisions.
    ///
    /// The elapsed time is subdivided into
    /// `clamp(ceil(elapsed / fixed_dt), 1, max_substeps)` substeps, each
    /// integrating `elapsed / substeps`, so total simulated time always
    /// equals the input exactly. Callers should pre-clamp `elapsed` to a
    /// sane maximum (≈50 ms) after stalls.
    ///
    /// A non-finite or non-positive `elapsed` makes the call a no-op - a
    /// single bad frame time must not halt a running match.
    pub fn step(state: &mut SimulationState, elapsed: f64, decisions: &DecisionMap) {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            debug!(elapsed, "ignoring step with invalid elapsed time");
            return;
        }

        let physics = state.config.physics;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let substeps =
            ((elapsed / physics.fixed_dt).ceil() as usize).clamp(1, physics.max_substeps);
        let dt = elapsed / substeps as f64;

        for _ in 0..substeps {
            Self::substep(state, dt, decisions);
        }
    }

    /// One substep in the fixed phase order (see module docs).
    fn substep(state: &mut SimulationState, dt: f64, decisions: &DecisionMap) {
        let SimulationState {
            config,
            pitch,
            players,
            ball,
            possession,
            clock,
        } = state;
        let now = *clock;

        Self::apply_controls(players, decisions, config, dt);
        pitch.clamp_players(players, config.player.radius);
        collision::resolve_player_collisions(players, config);
        possession.update(players, ball, config, now);
        Self::apply_kicks(possession, players, ball, decisions, config, now);
        Self::integrate_ball(ball, config, dt);
        pitch.reflect_ball(ball, config.physics.wall_restitution);
        collision::resolve_ball_player_collisions(ball, players, config);
        possession.update(players, ball, config, now);

        *clock = now + dt;
    }

    /// Applies each player's sanitized decision: accelerate along the
    /// commanded direction, clamp speed to the (possibly sprinting) limit,
    /// reorient facing, then integrate and damp.
    fn apply_controls(
        players: &mut [Player],
        decisions: &DecisionMap,
        config: &SimConfig,
        dt: f64,
    ) {
        let damping = damping_factor(PLAYER_DAMPING, dt);
        for player in players {
            let decision = decisions
                .get(&player.id)
                .copied()
                .unwrap_or_default()
                .sanitize();

            player.body.velocity += decision.movement * config.player.max_accel * dt;

            let limit = config.player.max_speed
                * if decision.sprint {
                    config.player.sprint_multiplier
                } else {
                    1.0
                };
            player.body.velocity = player.body.velocity.clamp_length_max(limit);

            if decision.movement.length() > FACING_DEADBAND {
                player.facing = decision.movement.normalize();
            }

            player.body.integrate(dt);
            player.body.damp(damping);
        }
    }

    /// Translates the holder's kick intent into a ball-velocity assignment
    /// and a possession release with cooldown.
    ///
    /// Only the current holder can kick. A kick requested when the ball has
    /// already left contact range is silently dropped.
    fn apply_kicks(
        possession: &mut Possession,
        players: &[Player],
        ball: &mut Ball,
        decisions: &DecisionMap,
        config: &SimConfig,
        now: f64,
    ) {
        let Some(holder_id) = possession.holder() else {
            return;
        };
        let Some(decision) = decisions.get(&holder_id) else {
            return;
        };
        let Some(kick) = decision.sanitize().kick else {
            return;
        };
        let Some(holder) = players.iter().find(|p| p.id == holder_id) else {
            return;
        };

        let distance = holder.body.distance_to(&ball.body);
        if distance > config.contact_radius() + KICK_SLACK {
            debug!(player = %holder_id, distance, "kick out of range, dropped");
            return;
        }

        // Absolute velocity assignment, not an impulse: the existing ball
        // velocity is fully overwritten.
        ball.body.velocity = kick.direction * (kick.power * config.kick.max_power);
        possession.release_after_kick(now, config.kick.cooldown);
        debug!(player = %holder_id, power = kick.power, "kick applied");
    }

    /// Integrates the free ball and applies rolling decay. A held ball is
    /// overwritten by the dribble snap afterwards, so this is harmless for
    /// it.
    fn integrate_ball(ball: &mut Ball, config: &SimConfig, dt: f64) {
        let damping = damping_factor(
            config.ball.friction * config.ball.rolling_resistance,
            dt,
        );
        ball.body.integrate(dt);
        ball.body.damp(damping);
    }
}
