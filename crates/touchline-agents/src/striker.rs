//! Aggressive attacking agent focused on quick shots at the opponent goal.

use glam::DVec2;
use touchline_core::{Agent, AgentContext, Decision, Kick, WorldView};

/// How far from the ball the striker starts shooting.
const SHOOTING_RANGE: f64 = 20.0;

/// How far ahead of the ball the striker positions, along the attack
/// direction, so it arrives facing goal.
const PRESS_LEAD: f64 = 12.0;

/// Vertical offset off the goal center, aimed at the far post.
const POST_BIAS: f64 = 8.0;

/// Presses the ball aggressively and shoots hard at the far post when in
/// range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Striker;

impl Agent for Striker {
    fn decide(&self, ctx: &AgentContext, view: &WorldView<'_>) -> Option<Decision> {
        let me = view.player(ctx.player_id)?;
        let ball = view.ball();
        let field = view.field();
        let team = ctx.player_id.team();

        // Chase a point slightly beyond the ball in the attack direction.
        let target = ball.position + team.attack_direction() * PRESS_LEAD;
        let to_target = target - me.position;
        let distance = to_target.length();
        let movement = to_target.normalize_or_zero();

        // Sprint when far from the ball, as long as the legs are fresh.
        let sprint = distance > 25.0 && me.stamina > 0.3;

        // Shoot toward the corner away from the ball's side of the pitch.
        let kick = if me.position.distance(ball.position) < SHOOTING_RANGE {
            let goal_x = view.opponent_goal(team).x;
            let aim_y = if ball.position.y > field.height / 2.0 {
                field.height / 2.0 - POST_BIAS
            } else {
                field.height / 2.0 + POST_BIAS
            };
            let aim = DVec2::new(goal_x, aim_y);
            Some(Kick {
                power: 1.0,
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
