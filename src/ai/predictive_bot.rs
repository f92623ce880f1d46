// Predictive bot: drift home while the ball leaves, chase a short projection when it comes back

use super::prediction::{project_target_y, LOOK_AHEAD_STEPS};
use super::Bot;
use crate::game::{BallSnapshot, Body, Paddle, Player, World};

/// Configuration for a predictive bot's behavior
#[derive(Debug, Clone)]
pub struct PredictiveBotConfig {
    pub name: String,
    pub look_ahead_steps: u32, // Ticks projected forward
}

/// Bot that steers toward where the ball will be a few ticks from now
pub struct PredictiveBot {
    config: PredictiveBotConfig,

    // Last projected target; cleared on reset
    last_target_y: Option<f32>,
}

impl PredictiveBot {
    pub fn new(config: PredictiveBotConfig) -> Self {
        Self {
            config,
            last_target_y: None,
        }
    }

    /// The computer opponent the game ships with: three-tick horizon
    pub fn classic() -> Self {
        Self::new(PredictiveBotConfig {
            name: "Computer".to_string(),
            look_ahead_steps: LOOK_AHEAD_STEPS,
        })
    }

    pub fn last_target_y(&self) -> Option<f32> {
        self.last_target_y
    }
}

/// True when the ball is travelling toward the other player
fn ball_moving_away(side: Player, vx: f32) -> bool {
    match side {
        Player::Right => vx < 0.0,
        Player::Left => vx > 0.0,
    }
}

impl Bot for PredictiveBot {
    fn steer(&mut self, paddle: &mut Paddle, ball: &BallSnapshot, world: &World) {
        let height = world.height as f32;

        // 1. Head back toward mid-court while not needed
        if ball_moving_away(paddle.side(), ball.velocity.x) {
            if paddle.rect().center_y() > height / 2.0 {
                paddle.move_up();
            } else {
                paddle.move_down();
            }
        }

        // 2. Where the ball is heading
        let target_y = project_target_y(ball, self.config.look_ahead_steps, world);
        if self.last_target_y != Some(target_y) {
            tracing::debug!("{} aiming at y = {:.1}", self.config.name, target_y);
        }
        self.last_target_y = Some(target_y);

        // 3. One step toward it
        let rect = paddle.rect();
        if rect.top() >= 0.0 && target_y < rect.top() {
            paddle.move_up();
        }
        let rect = paddle.rect();
        if rect.bottom() <= height && target_y > rect.bottom() {
            paddle.move_down();
        }
    }

    fn reset(&mut self) {
        self.last_target_y = None;
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
