//! The minimal viable agent: run at the ball, kick it at the goal.

use touchline_core::{Agent, AgentContext, Decision, DecisionBuilder, WorldView};

/// How far from the ball the chaser attempts a kick.
const KICKING_RANGE: f64 = 22.0;

/// Runs straight at the ball and kicks at the opponent goal center
/// whenever in range. Useful as a baseline opponent and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chaser;

impl Agent for Chaser {
    fn decide(&self, ctx: &AgentContext, view: &WorldView<'_>) -> Option<Decision> {
        let me = view.player(ctx.player_id)?;
        let ball = view.ball();
        let team = ctx.player_id.team();

        let mut builder = DecisionBuilder::new().move_toward(me.position, ball.position);
        if me.position.distance(ball.position) < KICKING_RANGE {
            let goal = view.opponent_goal(team);
            builder = builder.kick_toward(ball.position, goal, 0.9);
        }
        Some(builder.build())
    }
}
