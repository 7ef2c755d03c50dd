//! Match runner: agent cadence, decision latching, and kickoff setup.
//!
//! Agents think slower than physics steps. The [`MatchRunner`] owns the
//! registered agents and a latched [`DecisionMap`]: it refreshes decisions
//! at the configured agent tick rate and steps the core with the caller's
//! frame delta in between, so the engine is routinely stepped several times
//! against an unchanged decision map.
//!
//! Decision collection fans out across threads with rayon - agents read a
//! frozen [`WorldView`](crate::view::WorldView) and results are keyed by
//! player, so collection order cannot affect the outcome. The stepper
//! itself stays single-threaded.

use std::collections::HashMap;
use std::sync::Arc;

use glam::DVec2;
use rayon::prelude::*;
use tracing::debug;

use crate::agent::{Agent, AgentContext};
use crate::config::{ConfigError, SimConfig};
use crate::decision::{Decision, DecisionMap};
use crate::entity::{Player, PlayerId, Team};
use crate::stepper::{SimulationState, Stepper};

/// A team layout in normalized pitch coordinates (x, y in [0, 1]).
///
/// Positions are listed in roster order; the first entry is the
/// goalkeeper (number 1).
#[derive(Debug, Clone, PartialEq)]
pub struct Formation(Vec<DVec2>);

impl Formation {
    /// Creates a formation from normalized positions.
    #[must_use]
    pub fn new(positions: Vec<DVec2>) -> Self {
        Self(positions)
    }

    /// The default five-a-side home layout: keeper, two defenders, two
    /// attackers.
    #[must_use]
    pub fn five_a_side() -> Self {
        Self(vec![
            DVec2::new(0.07, 0.50),
            DVec2::new(0.24, 0.32),
            DVec2::new(0.30, 0.68),
            DVec2::new(0.56, 0.32),
            DVec2::new(0.66, 0.70),
        ])
    }

    /// The same layout flipped to attack the other way.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self(self.0.iter().map(|p| DVec2::new(1.0 - p.x, p.y)).collect())
    }

    /// Normalized positions in roster order.
    #[must_use]
    pub fn positions(&self) -> &[DVec2] {
        &self.0
    }

    /// Spawns a roster for `team`, numbering players from 1 in formation
    /// order and scaling positions to the field.
    #[must_use]
    pub fn spawn(&self, team: Team, config: &SimConfig) -> Vec<Player> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, pos)| {
                #[allow(clippy::cast_possible_truncation)]
                let number = (i + 1) as u8;
                Player::new(
                    PlayerId::new(team, number),
                    DVec2::new(pos.x * config.field.width, pos.y * config.field.height),
                    &config.player,
                )
            })
            .collect()
    }
}

/// Owns a simulation plus the agents driving it.
pub struct MatchRunner {
    state: SimulationState,
    agents: HashMap<PlayerId, Arc<dyn Agent>>,
    decisions: DecisionMap,
    ai_accumulator: f64,
}

impl MatchRunner {
    /// Creates a runner over a fresh simulation.
    ///
    /// # Errors
    ///
    /// Propagates configuration validation failures from
    /// [`SimulationState::new`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: SimulationState::new(config)?,
            agents: HashMap::new(),
            decisions: DecisionMap::new(),
            ai_accumulator: 0.0,
        })
    }

    /// The simulation state, for inspection.
    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The decisions currently latched for the physics step.
    #[must_use]
    pub fn latched_decisions(&self) -> &DecisionMap {
        &self.decisions
    }

    /// Registers the agent driving `id`. Replaces any previous agent for
    /// that player; players without an agent simply stand still.
    pub fn register_agent(&mut self, id: PlayerId, agent: Arc<dyn Agent>) {
        self.agents.insert(id, agent);
    }

    /// Kickoff: spawns both rosters from their formations, recreates the
    /// ball at the center spot, and clears possession and latched
    /// decisions. The away formation is given in its own attack frame and
    /// mirrored here.
    pub fn kickoff(&mut self, home: &Formation, away: &Formation) {
        let config = *self.state.config();
        let mut players = home.spawn(Team::Home, &config);
        players.extend(away.mirrored().spawn(Team::Away, &config));
        self.state.reset_kickoff(players);
        self.decisions.clear();
        self.ai_accumulator = 0.0;
    }

    /// Advances the match by `elapsed` seconds: refreshes decisions if an
    /// agent tick is due, then steps the physics. Invalid elapsed values
    /// are ignored, matching [`Stepper::step`].
    pub fn advance(&mut self, elapsed: f64) {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return;
        }

        self.ai_accumulator += elapsed;
        let interval = 1.0 / self.state.config().runner.ai_tick_hz;
        if self.ai_accumulator >= interval {
            self.refresh_decisions();
            self.ai_accumulator %= interval;
        }

        Stepper::step(&mut self.state, elapsed, &self.decisions);
    }

    /// Invokes every registered agent against a frozen view and latches
    /// the results. Agents returning `None` latch a full stop.
    pub fn refresh_decisions(&mut self) {
        let time = self.state.time();
        let fresh: Vec<(PlayerId, Decision)> = {
            let view = self.state.view();
            self.agents
                .par_iter()
                .map(|(id, agent)| {
                    let ctx = AgentContext {
                        player_id: *id,
                        time,
                    };
                    let decision = agent.decide(&ctx, &view).unwrap_or_else(Decision::stop);
                    (*id, decision)
                })
                .collect()
        };
        debug!(agents = fresh.len(), time, "decisions refreshed");
        self.decisions = fresh.into_iter().collect();
    }
}
