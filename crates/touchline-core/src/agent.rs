//! The agent boundary: external logic driving a player each tick.
//!
//! Agents follow a strict read-only paradigm, like any untrusted client of
//! the engine:
//! - an agent receives a [`WorldView`] snapshot and cannot mutate state;
//! - an agent emits a [`Decision`] as a proposal, which the engine
//!   sanitizes before use;
//! - agents must be `Send + Sync` so the match runner may fan decision
//!   collection out across threads.
//!
//! How an agent was produced - hand-written Rust, a scripted interpreter, a
//! learned policy - is invisible to the engine; the trait is the whole
//! contract.

use crate::decision::Decision;
use crate::entity::PlayerId;
use crate::view::WorldView;

/// Contextual information passed to an agent for one decision.
#[derive(Debug, Clone, Copy)]
pub struct AgentContext {
    /// The player this agent is deciding for.
    pub player_id: PlayerId,
    /// Simulation time at the decision tick, seconds.
    pub time: f64,
}

/// External decision logic for one player.
///
/// # Implementation Guidelines
///
/// 1. **No side effects**: all influence on the match goes through the
///    returned [`Decision`].
/// 2. **Determinism**: given the same view, return the same decision.
///    Agents that want replayable matches must not consult wall clocks or
///    unseeded randomness.
/// 3. **Robustness is the engine's job**: returned values are sanitized,
///    so an agent never needs to pre-validate its own output.
///
/// Returning `None` means "no decision": the engine applies a full stop
/// with no kick.
pub trait Agent: Send + Sync {
    /// Produces the player's decision for this agent tick.
    fn decide(&self, ctx: &AgentContext, view: &WorldView<'_>) -> Option<Decision>;
}
