//! Entities on the pitch: teams, player identity, players, and the ball.
//!
//! - [`Team`]: two-value team enum; all attack-direction logic derives from
//!   its single lookup.
//! - [`PlayerId`]: `(team, number)` identity; stable across a match half but
//!   not across kickoff resets (rosters are recreated wholesale).
//! - [`Player`] / [`Ball`]: specializations embedding the kinematic [`Body`].
//!
//! # Example
//!
//! ```
//! use touchline_core::entity::{PlayerId, Team};
//!
//! let keeper = PlayerId::new(Team::Home, 1);
//! assert!(keeper.is_goalkeeper());
//! assert_eq!(keeper.team().opponent(), Team::Away);
//! ```

mod body;

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::{BallConfig, PlayerConfig};

pub use body::{damping_factor, Body, REFERENCE_RATE};

/// One of the two competing sides.
///
/// `Home` defends the left goal and attacks toward +x; `Away` is the
/// mirror. Direction logic must go through [`Team::attack_direction`]
/// rather than comparing team values at use sites.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Team {
    /// Defends the left goal, attacks toward +x.
    Home,
    /// Defends the right goal, attacks toward -x.
    Away,
}

impl Team {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Unit vector pointing at the goal this team attacks.
    #[must_use]
    pub const fn attack_direction(self) -> DVec2 {
        match self {
            Self::Home => DVec2::X,
            Self::Away => DVec2::NEG_X,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

/// Identity of a player within the current rosters: `(team, number)`.
///
/// Numbers are positive and unique within a team; number 1 is the
/// goalkeeper and receives a distinct boundary rule. Ordering is
/// team-then-number, which gives rosters a stable enumeration order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId {
    team: Team,
    number: u8,
}

impl PlayerId {
    /// Roster number reserved for the goalkeeper.
    pub const GOALKEEPER_NUMBER: u8 = 1;

    /// Creates a player identity.
    #[must_use]
    pub const fn new(team: Team, number: u8) -> Self {
        Self { team, number }
    }

    /// The player's side.
    #[must_use]
    pub const fn team(self) -> Team {
        self.team
    }

    /// The player's roster number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Whether this identity is the team's goalkeeper.
    #[must_use]
    pub const fn is_goalkeeper(self) -> bool {
        self.number == Self::GOALKEEPER_NUMBER
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team, self.number)
    }
}

/// A player on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Identity within the current rosters.
    pub id: PlayerId,
    /// Kinematic state.
    pub body: Body,
    /// Normalized stamina in [0, 1]. Informational to agents; the engine
    /// itself never depletes it (the match-flow layer owns that).
    pub stamina: f64,
    /// Unit-length-or-zero direction the player last moved in. Orients ball
    /// placement while this player holds possession.
    pub facing: DVec2,
}

impl Player {
    /// Creates a player at rest, facing its attack direction with full
    /// stamina.
    #[must_use]
    pub fn new(id: PlayerId, position: DVec2, config: &PlayerConfig) -> Self {
        Self {
            id,
            body: Body::new(position, config.radius, config.mass),
            stamina: 1.0,
            facing: id.team().attack_direction(),
        }
    }
}

/// The ball. Exactly one exists at any time; it is replaced wholesale on
/// kickoff reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Kinematic state.
    pub body: Body,
}

impl Ball {
    /// Creates a stationary ball.
    #[must_use]
    pub fn new(position: DVec2, config: &BallConfig) -> Self {
        Self {
            body: Body::new(position, config.radius, config.mass),
        }
    }
}
