//! Balanced defensive agent: protects its own goal, clears danger quickly.

use glam::DVec2;
use touchline_core::{Agent, AgentContext, Decision, Kick, Team, WorldView};

/// How far from the ball the defender attempts a clearance.
const CLEARING_RANGE: f64 = 18.0;

/// Vertical spacing between defenders holding the line.
const LINE_SPREAD: f64 = 8.0;

/// Holds a defensive shape in its own half and moves to the ball only when
/// it threatens; clearances go long toward the opponent's half.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defender;

impl Agent for Defender {
    fn decide(&self, ctx: &AgentContext, view: &WorldView<'_>) -> Option<Decision> {
        let me = view.player(ctx.player_id)?;
        let ball = view.ball();
        let field = view.field();
        let team = ctx.player_id.team();

        // Home position: a third of the way up our own half, players
        // spread vertically by roster number.
        let defend_x = match team {
            Team::Home => field.width * 0.35,
            Team::Away => field.width * 0.65,
        };
        let defend_y =
            field.height / 2.0 + (f64::from(ctx.player_id.number()) - 3.0) * LINE_SPREAD;

        // Step out only when the ball gets near our goal.
        let danger = match team {
            Team::Home => ball.position.x < field.width * 0.45,
            Team::Away => ball.position.x > field.width * 0.55,
        };
        let target = if danger {
            ball.position
        } else {
            DVec2::new(defend_x, defend_y)
        };

        let to_target = target - me.position;
        let distance = to_target.length();
        let movement = to_target.normalize_or_zero();

        // Sprint only when recovering toward a threatened goal.
        let sprint = danger && distance > 18.0 && me.stamina > 0.2;

        // Clear toward the opponent half with a lane bias by number.
        let kick = if me.position.distance(ball.position) < CLEARING_RANGE {
            let forward_x = view.opponent_goal(team).x;
            let lane = if ctx.player_id.number() % 2 == 0 {
                -10.0
            } else {
                10.0
            };
            let aim = DVec2::new(forward_x, field.height / 2.0 + lane);
            Some(Kick {
                power: 0.85,
                direction: (aim - ball.position).normalize_or_zero(),
            })
        } else {
            None
        };

        Some(Decision {
            movement,
            sprint,
            kick,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchline_core::{Player, PlayerId, SimConfig, SimulationState};

    fn state_with_defender(team: Team, position: DVec2) -> (SimulationState, PlayerId) {
        let config = SimConfig::default();
        let id = PlayerId::new(team, 2);
        let mut state = SimulationState::new(config).unwrap();
        state.set_players(vec![Player::new(id, position, &config.player)]);
        (state, id)
    }

    #[test]
    fn holds_shape_when_ball_is_far() {
        // Ball at center: no danger for the home side.
        let (state, id) = state_with_defender(Team::Home, DVec2::new(100.0, 100.0));
        let ctx = AgentContext {
            player_id: id,
            time: 0.0,
        };
        let decision = Defender.decide(&ctx, &state.view()).unwrap();
        // Heads to the home spot (315, 292), not to the ball.
        assert!(decision.movement.x > 0.0);
        assert!(decision.movement.y > 0.0);
        assert!(!decision.sprint);
        assert!(decision.kick.is_none());
    }

    #[test]
    fn clears_the_ball_when_close() {
        // Standing almost on the center spot, which for the away side is
        // not yet danger, but the ball is in clearing range regardless.
        let (state, id) = state_with_defender(Team::Away, DVec2::new(445.0, 295.0));
        let ctx = AgentContext {
            player_id: id,
            time: 0.0,
        };
        let decision = Defender.decide(&ctx, &state.view()).unwrap();
        let kick = decision.kick.expect("defender in range must clear");
        assert!((kick.power - 0.85).abs() < f64::EPSILON);
        // Away clears toward -x.
        assert!(kick.direction.x < 0.0);
    }

    #[test]
    fn even_and_odd_numbers_clear_into_different_lanes() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(config).unwrap();
        let even = PlayerId::new(Team::Home, 2);
        let odd = PlayerId::new(Team::Home, 3);
        state.set_players(vec![
            Player::new(even, DVec2::new(445.0, 300.0), &config.player),
            Player::new(odd, DVec2::new(455.0, 300.0), &config.player),
        ]);

        let kick_of = |id| {
            let ctx = AgentContext {
                player_id: id,
                time: 0.0,
            };
            Defender.decide(&ctx, &state.view()).unwrap().kick.unwrap()
        };
        assert!(kick_of(even).direction.y < 0.0);
        assert!(kick_of(odd).direction.y > 0.0);
    }
}
