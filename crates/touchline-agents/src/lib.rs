//! # Touchline Agents
//!
//! Example agents exercising the Touchline decision contract from outside
//! the engine. Each agent is an ordinary [`touchline_core::Agent`]
//! implementation: it reads a frozen world view and returns a decision,
//! nothing more. The engine sanitizes whatever comes back, so agents here
//! are written for clarity rather than defensiveness.
//!
//! - [`Striker`]: presses the ball and shoots at the far post.
//! - [`Defender`]: holds a defensive shape and clears danger.
//! - [`Goalkeeper`]: stays home on the goal line.
//! - [`Chaser`]: the minimal viable agent - run at the ball, kick at goal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod chaser;
mod defender;
mod goalkeeper;
mod striker;

pub use chaser::Chaser;
pub use defender::Defender;
pub use goalkeeper::Goalkeeper;
pub use striker::Striker;
