//! Minimal goalkeeper: hold the center of the goal mouth.

use touchline_core::{Agent, AgentContext, Decision, DecisionBuilder, WorldView};

/// How far in front of the goal line the keeper stands.
const STANDOFF: f64 = 20.0;

/// Stays planted just in front of its own goal center. The engine's
/// goal-area clamp keeps it legal no matter what; this agent simply never
/// fights the clamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct Goalkeeper;

impl Agent for Goalkeeper {
    fn decide(&self, ctx: &AgentContext, view: &WorldView<'_>) -> Option<Decision> {
        let me = view.player(ctx.player_id)?;
        let team = ctx.player_id.team();
        let post = view.own_goal(team) + team.attack_direction() * STANDOFF;
        Some(DecisionBuilder::new().move_toward(me.position, post).build())
    }
}
