use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::ball::Ball;
use super::paddle::{Paddle, PADDLE_HEIGHT, PADDLE_WIDTH};
use super::vector::random_direction;
use crate::ai::{create_bot, Bot, Opponent};
use crate::config::PhysicsConfig;
use crate::error::{Result, SimError};

/// Play field dimensions, fixed for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World {
    pub width: u32,
    pub height: u32,
}

impl World {
    /// Smallest field that still fits a paddle (and so the ball) on each axis
    pub const MIN_WIDTH: u32 = PADDLE_WIDTH as u32;
    pub const MIN_HEIGHT: u32 = PADDLE_HEIGHT as u32;

    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < Self::MIN_WIDTH || height < Self::MIN_HEIGHT {
            return Err(SimError::InvalidWorld { width, height });
        }
        Ok(Self { width, height })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Left,
    Right,
}

impl Player {
    pub fn display_name(&self) -> &'static str {
        match self {
            Player::Left => "Player 1",
            Player::Right => "Player 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    MatchOver,
}

/// Seedable random source for serve directions
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Who moves a paddle
pub enum Controller {
    Human,
    Computer(Box<dyn Bot>),
}

/// A paddle together with whoever drives it
pub struct Bat {
    pub paddle: Paddle,
    pub controller: Controller,
}

impl Bat {
    pub fn is_computer(&self) -> bool {
        matches!(self.controller, Controller::Computer(_))
    }
}

pub struct MatchState {
    pub world: World,
    pub ball: Ball,
    pub left: Bat,
    pub right: Bat,
    pub left_score: u8,
    pub right_score: u8,
    pub winner: Option<Player>,
    pub phase: MatchPhase,
    pub winning_score: u8,
}

impl MatchState {
    /// Build a match: human on the left, `opponent` on the right
    pub fn new<R: Rng + ?Sized>(
        physics: &PhysicsConfig,
        opponent: Opponent,
        rng: &mut R,
    ) -> Result<Self> {
        if physics.winning_score == 0 {
            return Err(SimError::InvalidWinningScore);
        }
        let world = World::new(physics.world_width, physics.world_height)?;
        let ball = Ball::new(random_direction(rng), world, physics.ball_speed)?;

        let left = Bat {
            paddle: Paddle::new(Player::Left, &world, physics.paddle_speed)?,
            controller: Controller::Human,
        };
        let right = Bat {
            paddle: Paddle::new(Player::Right, &world, physics.paddle_speed)?,
            controller: match opponent {
                Opponent::Human => Controller::Human,
                Opponent::Computer => Controller::Computer(create_bot()),
            },
        };

        Ok(Self {
            world,
            ball,
            left,
            right,
            left_score: 0,
            right_score: 0,
            winner: None,
            phase: MatchPhase::Playing,
            winning_score: physics.winning_score,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::MatchOver
    }

    pub fn score(&self, player: Player) -> u8 {
        match player {
            Player::Left => self.left_score,
            Player::Right => self.right_score,
        }
    }

    pub fn bat(&self, player: Player) -> &Bat {
        match player {
            Player::Left => &self.left,
            Player::Right => &self.right,
        }
    }

    /// Credit a point. Returns the winner if this point ended the match.
    pub(crate) fn award_point(&mut self, player: Player) -> Option<Player> {
        if self.winner.is_some() {
            return self.winner;
        }

        let score = match player {
            Player::Left => &mut self.left_score,
            Player::Right => &mut self.right_score,
        };
        *score += 1;

        if *score >= self.winning_score {
            self.winner = Some(player);
            self.phase = MatchPhase::MatchOver;
        }
        self.winner
    }

    /// Change ball speed between ticks, keeping its heading
    pub fn set_ball_speed(&mut self, speed: f32) -> Result<()> {
        self.ball.set_speed(speed)?;
        tracing::info!("Ball speed set to {}", speed);
        Ok(())
    }

    /// Change the step size of both paddles
    pub fn set_paddle_speed(&mut self, speed: f32) -> Result<()> {
        self.left.paddle.set_speed(speed)?;
        self.right.paddle.set_speed(speed)?;
        tracing::info!("Paddle speed set to {}", speed);
        Ok(())
    }
}
