//! Pairwise impulse-based contact resolution.
//!
//! Player-player contacts use symmetric positional correction (half the
//! overlap each) and a standard 1D impulse along the contact normal; the
//! tangential component is untouched. Ball-player contacts push only the
//! ball out of penetration and skip the impulse entirely when the pair is
//! already separating, so resolution never fights the possession tracker.
//!
//! Coincident centers are a degenerate contact with no resolvable normal;
//! the pair is skipped for the substep.

use crate::config::SimConfig;
use crate::entity::{Ball, Player};

/// Resolves every distinct unordered pair of players, in roster order.
pub(crate) fn resolve_player_collisions(players: &mut [Player], config: &SimConfig) {
    let restitution = config.physics.player_restitution;
    let min_distance = config.player.radius * 2.0;

    for i in 0..players.len() {
        let (head, tail) = players.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail {
            let delta = b.body.position - a.body.position;
            let distance = delta.length();
            if distance == 0.0 || distance >= min_distance {
                continue;
            }

            let normal = delta / distance;
            let overlap = (min_distance - distance) / 2.0;
            a.body.position -= normal * overlap;
            b.body.position += normal * overlap;

            let relative = b.body.velocity - a.body.velocity;
            let along_normal = relative.dot(normal);
            let impulse = -(1.0 + restitution) * along_normal
                / (1.0 / a.body.mass + 1.0 / b.body.mass);

            a.body.apply_impulse(-normal * impulse);
            b.body.apply_impulse(normal * impulse);
        }
    }
}

/// Resolves the ball against every player, in roster order.
///
/// Only the ball's position is corrected and only the ball receives an
/// impulse; the player is treated as the dominant mass.
pub(crate) fn resolve_ball_player_collisions(
    ball: &mut Ball,
    players: &[Player],
    config: &SimConfig,
) {
    let restitution = config.physics.ball_restitution;
    let min_distance = config.ball.radius + config.player.radius;

    for player in players {
        let delta = ball.body.position - player.body.position;
        let distance = delta.length();
        if distance == 0.0 || distance >= min_distance {
            continue;
        }

        let normal = delta / distance;
        let overlap = min_distance - distance;
        ball.body.position += normal * overlap;

        let relative = ball.body.velocity - player.body.velocity;
        let along_normal = relative.dot(normal);
        if along_normal >= 0.0 {
            // Already separating; an impulse here would glue the ball to
            // the player.
            continue;
        }

        let impulse = -(1.0 + restitution) * along_normal
            / (1.0 / ball.body.mass + 1.0 / player.body.mass);
        ball.body.apply_impulse(normal * impulse);
    }
}
