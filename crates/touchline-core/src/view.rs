//! Read-only world snapshots for agents.
//!
//! [`WorldView`] wraps an immutable borrow of the simulation state and is
//! the only window agents get on the match. The records it hands out
//! ([`PlayerView`], [`BallView`], [`FieldView`]) are owned copies, so
//! nothing an agent does to them can leak back into the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::entity::{Player, PlayerId, Team};
use crate::stepper::SimulationState;

/// Snapshot of one player visible to agents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Identity.
    pub id: PlayerId,
    /// Position in pitch coordinates.
    pub position: DVec2,
    /// Velocity in units/second.
    pub velocity: DVec2,
    /// Contact radius.
    pub radius: f64,
    /// Normalized stamina in [0, 1].
    pub stamina: f64,
    /// Last movement direction (unit length or zero).
    pub facing: DVec2,
    /// Whether this player currently holds the ball.
    pub has_ball: bool,
}

/// Snapshot of the ball visible to agents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    /// Position in pitch coordinates.
    pub position: DVec2,
    /// Velocity in units/second.
    pub velocity: DVec2,
    /// Contact radius.
    pub radius: f64,
}

/// Field dimensions visible to agents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    /// Width along the x axis.
    pub width: f64,
    /// Height along the y axis.
    pub height: f64,
}

impl FieldView {
    /// Center spot of the field.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Scoped, read-only view of the match for agent consumption.
///
/// Borrows the [`SimulationState`] for the duration of a decision tick.
/// All accessors return owned snapshots; agents cannot reach mutable
/// engine state through a view.
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    state: &'a SimulationState,
}

impl<'a> WorldView<'a> {
    /// Creates a view over the given state.
    #[must_use]
    pub fn new(state: &'a SimulationState) -> Self {
        Self { state }
    }

    /// Simulation time, seconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.state.time()
    }

    /// Field dimensions.
    #[must_use]
    pub fn field(&self) -> FieldView {
        FieldView {
            width: self.state.config().field.width,
            height: self.state.config().field.height,
        }
    }

    /// Ball snapshot.
    #[must_use]
    pub fn ball(&self) -> BallView {
        let ball = self.state.ball();
        BallView {
            position: ball.body.position,
            velocity: ball.body.velocity,
            radius: ball.body.radius,
        }
    }

    /// The identity of the current possession holder, if any.
    #[must_use]
    pub fn holder(&self) -> Option<PlayerId> {
        self.state.possession().holder()
    }

    /// Snapshot of one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<PlayerView> {
        self.state.player(id).map(|p| self.snapshot(p))
    }

    /// Snapshots of every player, in roster order.
    pub fn players(&self) -> impl Iterator<Item = PlayerView> + 'a {
        let state = self.state;
        let holder = state.possession().holder();
        state.players().iter().map(move |p| Self::snapshot_with(p, holder))
    }

    /// Snapshots of every player on `team`, in roster order.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = PlayerView> + 'a {
        self.players().filter(move |p| p.id.team() == team)
    }

    /// Snapshots of every player opposing `team`, in roster order.
    pub fn opponents(&self, team: Team) -> impl Iterator<Item = PlayerView> + 'a {
        self.team_players(team.opponent())
    }

    /// The teammate nearest to `id`, excluding `id` itself.
    #[must_use]
    pub fn closest_teammate(&self, id: PlayerId) -> Option<PlayerView> {
        let me = self.player(id)?;
        self.team_players(id.team())
            .filter(|p| p.id != id)
            .min_by(|a, b| {
                let da = a.position.distance_squared(me.position);
                let db = b.position.distance_squared(me.position);
                da.total_cmp(&db)
            })
    }

    /// The opponent nearest to `id`.
    #[must_use]
    pub fn closest_opponent(&self, id: PlayerId) -> Option<PlayerView> {
        let me = self.player(id)?;
        self.opponents(id.team()).min_by(|a, b| {
            let da = a.position.distance_squared(me.position);
            let db = b.position.distance_squared(me.position);
            da.total_cmp(&db)
        })
    }

    /// Distance from player `id` to the ball, if the player exists.
    #[must_use]
    pub fn distance_to_ball(&self, id: PlayerId) -> Option<f64> {
        let me = self.player(id)?;
        Some(me.position.distance(self.ball().position))
    }

    /// Center of the goal `team` defends.
    #[must_use]
    pub fn own_goal(&self, team: Team) -> DVec2 {
        self.state.pitch().goal_center(team)
    }

    /// Center of the goal `team` attacks.
    #[must_use]
    pub fn opponent_goal(&self, team: Team) -> DVec2 {
        self.state.pitch().goal_center(team.opponent())
    }

    fn snapshot(&self, player: &Player) -> PlayerView {
        Self::snapshot_with(player, self.state.possession().holder())
    }

    fn snapshot_with(player: &Player, holder: Option<PlayerId>) -> PlayerView {
        PlayerView {
            id: player.id,
            position: player.body.position,
            velocity: player.body.velocity,
            radius: player.body.radius,
            stamina: player.stamina,
            facing: player.facing,
            has_ball: holder == Some(player.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::entity::Player;

    fn state_with_two_players() -> SimulationState {
        let config = SimConfig::default();
        let mut state = SimulationState::new(config).unwrap();
        state.set_players(vec![
            Player::new(
                PlayerId::new(Team::Home, 1),
                DVec2::new(50.0, 300.0),
                &config.player,
            ),
            Player::new(
                PlayerId::new(Team::Away, 1),
                DVec2::new(850.0, 300.0),
                &config.player,
            ),
        ]);
        state
    }

    #[test]
    fn field_view_matches_config() {
        let state = state_with_two_players();
        let view = WorldView::new(&state);
        assert!((view.field().width - 900.0).abs() < f64::EPSILON);
        assert_eq!(view.field().center(), DVec2::new(450.0, 300.0));
    }

    #[test]
    fn ball_starts_at_center() {
        let state = state_with_two_players();
        let view = WorldView::new(&state);
        assert_eq!(view.ball().position, DVec2::new(450.0, 300.0));
    }

    #[test]
    fn player_lookup_by_id() {
        let state = state_with_two_players();
        let view = WorldView::new(&state);
        let me = view.player(PlayerId::new(Team::Home, 1)).unwrap();
        assert_eq!(me.position, DVec2::new(50.0, 300.0));
        assert!(!me.has_ball);
        assert!(view.player(PlayerId::new(Team::Home, 9)).is_none());
    }

    #[test]
    fn team_filters_split_rosters() {
        let state = state_with_two_players();
        let view = WorldView::new(&state);
        assert_eq!(view.team_players(Team::Home).count(), 1);
        assert_eq!(view.opponents(Team::Home).count(), 1);
        assert_eq!(view.players().count(), 2);
    }

    #[test]
    fn closest_queries_skip_self_and_respect_teams() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(config).unwrap();
        let me = PlayerId::new(Team::Home, 2);
        state.set_players(vec![
            Player::new(me, DVec2::new(100.0, 100.0), &config.player),
            Player::new(
                PlayerId::new(Team::Home, 3),
                DVec2::new(150.0, 100.0),
                &config.player,
            ),
            Player::new(
                PlayerId::new(Team::Away, 2),
                DVec2::new(120.0, 100.0),
                &config.player,
            ),
        ]);
        let view = WorldView::new(&state);

        let mate = view.closest_teammate(me).unwrap();
        assert_eq!(mate.id, PlayerId::new(Team::Home, 3));
        let opp = view.closest_opponent(me).unwrap();
        assert_eq!(opp.id, PlayerId::new(Team::Away, 2));

        // A lone player has no teammates.
        let keeper = PlayerId::new(Team::Away, 2);
        assert!(view.closest_teammate(keeper).is_none());
    }

    #[test]
    fn distance_to_ball_matches_geometry() {
        let state = state_with_two_players();
        let view = WorldView::new(&state);
        let d = view.distance_to_ball(PlayerId::new(Team::Home, 1)).unwrap();
        assert!((d - 400.0).abs() < 1e-9);
        assert!(view.distance_to_ball(PlayerId::new(Team::Home, 9)).is_none());
    }

    #[test]
    fn goals_face_each_other() {
        let state = state_with_two_players();
        let view = WorldView::new(&state);
        let own = view.own_goal(Team::Home);
        let opp = view.opponent_goal(Team::Home);
        assert!(own.x < opp.x);
        assert_eq!(own, view.opponent_goal(Team::Away));
    }
}
