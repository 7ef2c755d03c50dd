//! Boundary containment: pitch clamps, the goalkeeper's area rule, and
//! goal-aware ball reflection.
//!
//! Outfield players are clamped to a rectangle inset from the painted
//! lines. The goalkeeper instead stays inside a box bounded forward and
//! laterally by the keeper-area radius around its own goal mouth. The ball
//! reflects off the pitch walls, except within a goal mouth's vertical
//! span, where it may travel into the goal channel before reflecting off
//! the channel's back wall - which is what lets a shot cross the goal line
//! at all.

use glam::DVec2;

use crate::config::SimConfig;
use crate::entity::{Ball, Player, Team};

/// Derived pitch geometry, computed once from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    left_line: f64,
    right_line: f64,
    top_line: f64,
    bottom_line: f64,
    goal_top: f64,
    goal_bottom: f64,
    goal_depth: f64,
    area_radius: f64,
    line_padding: f64,
    center_y: f64,
}

impl Pitch {
    /// Computes the pitch geometry for a configuration.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        let margin = config.pitch.margin;
        let center_y = config.field.height / 2.0;
        Self {
            left_line: margin,
            right_line: config.field.width - margin,
            top_line: margin,
            bottom_line: config.field.height - margin,
            goal_top: center_y - config.pitch.goal_height / 2.0,
            goal_bottom: center_y + config.pitch.goal_height / 2.0,
            goal_depth: config.pitch.goal_depth,
            area_radius: config.pitch.area_radius,
            line_padding: config.pitch.line_padding,
            center_y,
        }
    }

    /// Center of the goal mouth `team` defends.
    #[must_use]
    pub fn goal_center(&self, team: Team) -> DVec2 {
        let x = match team {
            Team::Home => self.left_line,
            Team::Away => self.right_line,
        };
        DVec2::new(x, self.center_y)
    }

    /// Whether `y` lies within the vertical span of the goal mouths.
    #[must_use]
    pub fn in_goal_mouth(&self, y: f64) -> bool {
        (self.goal_top..=self.goal_bottom).contains(&y)
    }

    /// The team whose goal currently contains the ball, if any: the ball's
    /// center is past that side's goal line within the goal mouth. The
    /// match-flow layer credits the opposing team with the score.
    #[must_use]
    pub fn goal_containing(&self, ball: &Ball) -> Option<Team> {
        if !self.in_goal_mouth(ball.body.position.y) {
            return None;
        }
        if ball.body.position.x < self.left_line {
            Some(Team::Home)
        } else if ball.body.position.x > self.right_line {
            Some(Team::Away)
        } else {
            None
        }
    }

    /// Clamps every player to its legal area: outfield players to the
    /// inset pitch rectangle, each goalkeeper to its own goal area.
    pub(crate) fn clamp_players(&self, players: &mut [Player], radius: f64) {
        let inset = radius + self.line_padding;
        let left = self.left_line + inset;
        let right = self.right_line - inset;
        let top = self.top_line + inset;
        let bottom = self.bottom_line - inset;

        for player in players {
            if player.id.is_goalkeeper() {
                self.clamp_goalkeeper(player, radius);
            } else {
                let p = &mut player.body.position;
                p.x = p.x.clamp(left, right);
                p.y = p.y.clamp(top, bottom);
            }
        }
    }

    /// Keeps the goalkeeper inside a box around its own goal mouth, bounded
    /// toward the pitch center and laterally by the area radius.
    fn clamp_goalkeeper(&self, player: &mut Player, radius: f64) {
        let goal = self.goal_center(player.id.team());
        let reach = (self.area_radius - radius).max(0.0);
        let dir = player.id.team().attack_direction().x;

        let forward_limit = goal.x + dir * reach;
        let near_limit = goal.x + dir * radius;
        let (min_x, max_x) = if near_limit <= forward_limit {
            (near_limit, forward_limit)
        } else {
            (forward_limit, near_limit)
        };

        let p = &mut player.body.position;
        p.x = p.x.clamp(min_x, max_x);
        p.y = p.y.clamp(goal.y - reach, goal.y + reach);
    }

    /// Reflects the ball off the pitch walls, honoring the goal channels.
    ///
    /// Within a goal mouth's vertical span the side walls move back by the
    /// goal depth; everywhere the position is clamped to the wall plus the
    /// ball's radius so one substep can never tunnel through, and the
    /// normal velocity component is flipped and scaled by `restitution`.
    pub(crate) fn reflect_ball(&self, ball: &mut Ball, restitution: f64) {
        let r = ball.body.radius + self.line_padding;
        let in_goal_mouth = self.in_goal_mouth(ball.body.position.y);
        let p = &mut ball.body.position;
        let v = &mut ball.body.velocity;

        let (left_wall, right_wall) = if in_goal_mouth {
            (
                self.left_line - self.goal_depth,
                self.right_line + self.goal_depth,
            )
        } else {
            (self.left_line, self.right_line)
        };

        if p.x < left_wall + r {
            p.x = left_wall + r;
            v.x = v.x.abs() * restitution;
        } else if p.x > right_wall - r {
            p.x = right_wall - r;
            v.x = -v.x.abs() * restitution;
        }

        if p.y < self.top_line + r {
            p.y = self.top_line + r;
            v.y = v.y.abs() * restitution;
        } else if p.y > self.bottom_line - r {
            p.y = self.bottom_line - r;
            v.y = -v.y.abs() * restitution;
        }

        // Inside a goal channel the mouth's posts box the ball vertically.
        if in_goal_mouth {
            if p.y < self.goal_top + r {
                p.y = self.goal_top + r;
                v.y = v.y.abs() * restitution;
            } else if p.y > self.goal_bottom - r {
                p.y = self.goal_bottom - r;
                v.y = -v.y.abs() * restitution;
            }
        }
    }

    /// Legal x-interval for an outfield player, used by containment checks.
    #[must_use]
    pub fn outfield_x_range(&self, radius: f64) -> (f64, f64) {
        let inset = radius + self.line_padding;
        (self.left_line + inset, self.right_line - inset)
    }

    /// Legal y-interval for an outfield player.
    #[must_use]
    pub fn outfield_y_range(&self, radius: f64) -> (f64, f64) {
        let inset = radius + self.line_padding;
        (self.top_line + inset, self.bottom_line - inset)
    }
}
