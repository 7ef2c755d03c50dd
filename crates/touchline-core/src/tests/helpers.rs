//! Setup factories for crate-level tests.

use glam::DVec2;

use crate::config::SimConfig;
use crate::decision::{Decision, DecisionMap};
use crate::entity::{Player, PlayerId, Team};
use crate::stepper::{SimulationState, Stepper};

/// A state with the default configuration and the given roster.
pub fn state_with(players: Vec<Player>) -> SimulationState {
    let mut state = SimulationState::new(SimConfig::default()).unwrap();
    state.set_players(players);
    state
}

/// A player with the default body at `position`.
pub fn player_at(team: Team, number: u8, position: DVec2) -> Player {
    Player::new(
        PlayerId::new(team, number),
        position,
        &SimConfig::default().player,
    )
}

/// A single-entry decision map.
pub fn decision_for(id: PlayerId, decision: Decision) -> DecisionMap {
    let mut map = DecisionMap::new();
    map.insert(id, decision);
    map
}

/// Steps `state` by one 60 Hz frame.
pub fn step_frame(state: &mut SimulationState, decisions: &DecisionMap) {
    Stepper::step(state, 1.0 / 60.0, decisions);
}

/// Steps `state` by `n` 60 Hz frames.
pub fn step_frames(state: &mut SimulationState, decisions: &DecisionMap, n: usize) {
    for _ in 0..n {
        step_frame(state, decisions);
    }
}
