//! Collision resolution and boundary containment.
//!
//! Two concerns, each in its own module:
//!
//! - [`collision`]: pairwise impulse-based resolution for player-player
//!   and ball-player contacts.
//! - [`bounds`]: clamping bodies to the playable area, including the
//!   goalkeeper's area rule and the goal-aware ball reflection.
//!
//! Both operate on already-subdivided substeps; neither iterates
//! internally. Pair resolution runs in a fixed enumeration order, so dense
//! pileups are order-dependent - accepted rather than solved with a global
//! solver.

pub mod bounds;
pub mod collision;

pub use bounds::Pitch;
