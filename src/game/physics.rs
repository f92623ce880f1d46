use rand::Rng;

use super::ball::BallSnapshot;
use super::input::{PaddleIntents, TickIntents};
use super::rect::Body;
use super::state::{Bat, Controller, MatchState, Player, World};
use super::vector::random_direction;
use crate::error::Result;

/// What happened during one tick, for the presentation layer and logging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsEvents {
    pub paddle_collision: bool,
    pub wall_collision: bool,
    pub point_scored: Option<Player>,
    pub match_won: Option<Player>,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.paddle_collision
            || self.wall_collision
            || self.point_scored.is_some()
            || self.match_won.is_some()
    }
}

/// Advance the match by one tick.
///
/// Order within a tick: scoring check (which ends the tick on a point),
/// paddle contact, ball motion, then both paddles. Nothing moves once the
/// match has a winner.
pub fn update_with_events<R: Rng + ?Sized>(
    state: &mut MatchState,
    intents: &TickIntents,
    rng: &mut R,
) -> Result<PhysicsEvents> {
    let mut events = PhysicsEvents::default();
    if state.winner.is_some() {
        return Ok(events);
    }

    if state.ball.is_out_of_bounds() {
        if let Some(scorer) = state.ball.scoring_side() {
            events.point_scored = Some(scorer);
            events.match_won = state.award_point(scorer);
            tracing::info!(
                "{} scores ({} - {})",
                scorer.display_name(),
                state.left_score,
                state.right_score
            );
        }
        state.ball.reset(random_direction(rng))?;
        reset_bot(&mut state.left);
        reset_bot(&mut state.right);

        if let Some(winner) = events.match_won {
            tracing::info!("{} wins the match", winner.display_name());
        }
        return Ok(events);
    }

    let ball_rect = state.ball.rect();
    if ball_rect.intersects(&state.left.paddle.rect())
        || ball_rect.intersects(&state.right.paddle.rect())
    {
        state.ball.on_collision();
        events.paddle_collision = true;
    }

    events.wall_collision = state.ball.advance();

    let snapshot = state.ball.snapshot();
    let world = state.world;
    advance_bat(&mut state.left, intents.left, &snapshot, &world);
    advance_bat(&mut state.right, intents.right, &snapshot, &world);

    Ok(events)
}

fn advance_bat(bat: &mut Bat, intents: PaddleIntents, ball: &BallSnapshot, world: &World) {
    match &mut bat.controller {
        Controller::Human => bat.paddle.advance(intents),
        Controller::Computer(bot) => bot.steer(&mut bat.paddle, ball, world),
    }
}

fn reset_bot(bat: &mut Bat) {
    if let Controller::Computer(bot) = &mut bat.controller {
        bot.reset();
        tracing::debug!("{} reset for the next serve", bot.name());
    }
}
