//! # Touchline Core
//!
//! Deterministic 2D multi-agent football simulation core.
//!
//! Autonomous agents compete for control of a ball on a bounded pitch,
//! under a physics model with collisions, a possession state machine, and
//! a kick protocol. The engine is the trusted side of a strict boundary:
//! external agent logic produces a [`decision::Decision`] per player per
//! agent tick, the engine sanitizes it and advances the world in fixed
//! substeps.
//!
//! ## Architecture
//!
//! - **Entities** ([`entity`]): players and the ball over a shared
//!   kinematic body.
//! - **Agents** ([`agent`], [`view`]): read-only world snapshots in,
//!   decisions out.
//! - **Physics** ([`physics`]): pairwise collision resolution and
//!   goal-aware boundary containment.
//! - **Possession** ([`possession`]): the single free/controlled state
//!   machine.
//! - **Stepper** ([`stepper`]): the fixed-substep driver over an owned
//!   [`stepper::SimulationState`].
//! - **Runner** ([`runner`]): agent cadence, decision latching, kickoff.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use touchline_core::agent::{Agent, AgentContext};
//! use touchline_core::config::SimConfig;
//! use touchline_core::decision::{Decision, DecisionBuilder};
//! use touchline_core::entity::{PlayerId, Team};
//! use touchline_core::runner::{Formation, MatchRunner};
//! use touchline_core::view::WorldView;
//!
//! struct ChaseBall;
//!
//! impl Agent for ChaseBall {
//!     fn decide(&self, ctx: &AgentContext, view: &WorldView<'_>) -> Option<Decision> {
//!         let me = view.player(ctx.player_id)?;
//!         Some(
//!             DecisionBuilder::new()
//!                 .move_toward(me.position, view.ball().position)
//!                 .build(),
//!         )
//!     }
//! }
//!
//! let mut runner = MatchRunner::new(SimConfig::default()).unwrap();
//! let formation = Formation::five_a_side();
//! runner.kickoff(&formation, &formation);
//! runner.register_agent(PlayerId::new(Team::Home, 4), Arc::new(ChaseBall));
//! for _ in 0..600 {
//!     runner.advance(1.0 / 60.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agent;
pub mod config;
pub mod decision;
pub mod entity;
pub mod physics;
pub mod possession;
pub mod runner;
pub mod stepper;
pub mod view;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentContext};
pub use config::{ConfigError, SimConfig};
pub use decision::{Decision, DecisionBuilder, DecisionMap, Kick};
pub use entity::{Ball, Body, Player, PlayerId, Team};
pub use physics::Pitch;
pub use possession::Possession;
pub use runner::{Formation, MatchRunner};
pub use stepper::{SimulationState, Stepper};
pub use view::{BallView, FieldView, PlayerView, WorldView};
