use super::input::PaddleIntents;
use super::rect::{Body, Rect};
use super::state::{Player, World};
use crate::error::{Result, SimError};

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 30.0;

#[derive(Debug, Clone)]
pub struct Paddle {
    rect: Rect,
    speed: f32,
    side: Player,
    world_height: f32,
}

impl Paddle {
    /// Paddle at mid-height, centred on its own edge of the world
    pub fn new(side: Player, world: &World, speed: f32) -> Result<Self> {
        check_speed(speed)?;

        let center_x = match side {
            Player::Left => 0.0,
            Player::Right => world.width as f32,
        };
        let center_y = (world.height / 2) as f32;

        Ok(Self {
            rect: Rect::from_center(center_x, center_y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed,
            side,
            world_height: world.height as f32,
        })
    }

    pub fn side(&self) -> Player {
        self.side
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        check_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    /// Put the paddle's centre at `center_y`, kept inside the world
    pub fn set_center_y(&mut self, center_y: f32) {
        self.rect = Rect::from_center(self.rect.center_x(), center_y, PADDLE_WIDTH, PADDLE_HEIGHT);
        self.rect.clamp_vertical(self.world_height);
    }

    pub fn move_up(&mut self) {
        self.rect.translate(0.0, -self.speed);
        self.rect.clamp_vertical(self.world_height);
    }

    pub fn move_down(&mut self) {
        self.rect.translate(0.0, self.speed);
        self.rect.clamp_vertical(self.world_height);
    }

    /// Human-controlled step. Both edge checks use the position from before
    /// this tick, so a paddle flush against an edge stays put.
    pub fn advance(&mut self, intents: PaddleIntents) {
        let can_rise = self.rect.top() > 0.0;
        let can_sink = self.rect.bottom() < self.world_height;

        if intents.up && can_rise {
            self.move_up();
        }
        if intents.down && can_sink {
            self.move_down();
        }
    }
}

impl Body for Paddle {
    fn rect(&self) -> Rect {
        self.rect
    }
}

fn check_speed(speed: f32) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidSpeed(speed))
    }
}
