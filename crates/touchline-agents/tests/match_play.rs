//! End-to-end matches between the example agents.
//!
//! These tests drive the whole stack - runner cadence, decision latching,
//! stepper, collisions, possession - and check the engine's global
//! invariants from the outside.

use std::sync::Arc;

use glam::DVec2;
use touchline_core::{
    Agent, Formation, MatchRunner, PlayerId, SimConfig, SimulationState, Team,
};
use touchline_agents::{Chaser, Defender, Goalkeeper, Striker};

const FRAME: f64 = 1.0 / 60.0;

/// Registers the standard five-a-side lineup for one side: keeper, two
/// defenders, two strikers (or chasers for the away side).
fn register_lineup(runner: &mut MatchRunner, team: Team, attackers_chase: bool) {
    runner.register_agent(PlayerId::new(team, 1), Arc::new(Goalkeeper));
    runner.register_agent(PlayerId::new(team, 2), Arc::new(Defender));
    runner.register_agent(PlayerId::new(team, 3), Arc::new(Defender));
    for number in [4, 5] {
        let agent: Arc<dyn Agent> = if attackers_chase {
            Arc::new(Chaser)
        } else {
            Arc::new(Striker)
        };
        runner.register_agent(PlayerId::new(team, number), agent);
    }
}

fn five_a_side_match() -> MatchRunner {
    let mut runner = MatchRunner::new(SimConfig::default()).unwrap();
    let formation = Formation::five_a_side();
    runner.kickoff(&formation, &formation);
    register_lineup(&mut runner, Team::Home, false);
    register_lineup(&mut runner, Team::Away, true);
    runner
}

fn assert_invariants(state: &SimulationState) {
    let config = state.config();
    let pitch = state.pitch();
    let sprint_limit = config.player.max_speed * config.player.sprint_multiplier;
    let (min_x, max_x) = pitch.outfield_x_range(config.player.radius);
    let (min_y, max_y) = pitch.outfield_y_range(config.player.radius);

    for player in state.players() {
        assert!(player.body.position.is_finite());
        assert!(player.body.velocity.is_finite());
        assert!(
            player.body.speed() <= sprint_limit + 1e-9,
            "{} exceeds the speed limit: {}",
            player.id,
            player.body.speed()
        );
        if !player.id.is_goalkeeper() {
            let p = player.body.position;
            assert!(p.x >= min_x - 1e-9 && p.x <= max_x + 1e-9, "{} out of bounds", player.id);
            assert!(p.y >= min_y - 1e-9 && p.y <= max_y + 1e-9, "{} out of bounds", player.id);
        }
    }

    let ball = state.ball();
    assert!(ball.body.position.is_finite());
    assert!(ball.body.velocity.is_finite());
    let r = config.ball.radius + config.pitch.line_padding;
    let lo = config.pitch.margin - config.pitch.goal_depth + r;
    let hi = config.field.width - config.pitch.margin + config.pitch.goal_depth - r;
    assert!(ball.body.position.x >= lo - 1e-9 && ball.body.position.x <= hi + 1e-9);

    // The holder, when present, is a live roster entry in contact range.
    if let Some(holder) = state.possession().holder() {
        let player = state.player(holder).expect("holder must be on the roster");
        assert!(
            player.body.distance_to(&ball.body) <= config.contact_radius() + 4.0 + 1e-9
        );
    }
}

#[test]
fn ten_agents_play_a_half_without_violating_invariants() {
    let mut runner = five_a_side_match();
    let mut possession_seen = false;
    let mut kick_seen = false;
    let sprint_limit = {
        let c = runner.state().config();
        c.player.max_speed * c.player.sprint_multiplier
    };

    for _ in 0..3600 {
        runner.advance(FRAME);
        assert_invariants(runner.state());
        possession_seen |= runner.state().possession().holder().is_some();
        // Only a kick can move the ball faster than any player can run.
        kick_seen |= runner.state().ball().body.speed() > sprint_limit;
    }

    assert!(possession_seen, "nobody ever controlled the ball");
    assert!(kick_seen, "nobody ever kicked the ball");
}

#[test]
fn matches_are_deterministic() {
    let final_snapshot = |frames: usize| -> (Vec<DVec2>, DVec2) {
        let mut runner = five_a_side_match();
        for _ in 0..frames {
            runner.advance(FRAME);
        }
        (
            runner
                .state()
                .players()
                .iter()
                .map(|p| p.body.position)
                .collect(),
            runner.state().ball().body.position,
        )
    };

    let (players_a, ball_a) = final_snapshot(900);
    let (players_b, ball_b) = final_snapshot(900);
    assert_eq!(players_a, players_b);
    assert_eq!(ball_a, ball_b);
}

#[test]
fn an_unmarked_striker_scores_into_the_empty_goal() {
    let mut runner = MatchRunner::new(SimConfig::default()).unwrap();
    // A keeper plus one striker parked on the center spot; the away side
    // fields nobody at all.
    let home = Formation::new(vec![DVec2::new(0.07, 0.5), DVec2::new(0.5, 0.5)]);
    let away = Formation::new(Vec::new());
    runner.kickoff(&home, &away);
    runner.register_agent(PlayerId::new(Team::Home, 1), Arc::new(Goalkeeper));
    runner.register_agent(PlayerId::new(Team::Home, 2), Arc::new(Striker));

    let mut scored = false;
    for _ in 0..600 {
        runner.advance(FRAME);
        if runner
            .state()
            .pitch()
            .goal_containing(runner.state().ball())
            == Some(Team::Away)
        {
            scored = true;
            break;
        }
    }
    assert!(scored, "striker never put the ball into the open goal");
}

#[test]
fn kickoff_mid_match_restores_a_clean_scene() {
    let mut runner = five_a_side_match();
    for _ in 0..600 {
        runner.advance(FRAME);
    }

    let formation = Formation::five_a_side();
    runner.kickoff(&formation, &formation);

    let state = runner.state();
    assert_eq!(state.possession().holder(), None);
    let center = DVec2::new(
        state.config().field.width / 2.0,
        state.config().field.height / 2.0,
    );
    assert_eq!(state.ball().body.position, center);
    assert_eq!(state.ball().body.velocity, DVec2::ZERO);
    assert_eq!(state.players().len(), 10);
    for player in state.players() {
        assert_eq!(player.body.velocity, DVec2::ZERO);
    }
}
