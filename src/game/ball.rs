use super::rect::{Body, Rect};
use super::state::{Player, World};
use super::vector::{normalize, Vec2};
use crate::error::Result;

pub const BALL_SIZE: f32 = 10.0;

/// Position, velocity and speed read together, so the computer paddle
/// never sees one field from before a move and another from after it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct Ball {
    rect: Rect,
    velocity: Vec2,
    speed: f32,
    world: World,
}

impl Ball {
    /// Create a ball at the spawn pose heading along `direction`
    pub fn new(direction: Vec2, world: World, speed: f32) -> Result<Self> {
        Ok(Self {
            rect: Self::spawn_rect(&world),
            velocity: normalize(direction, speed)?,
            speed,
            world,
        })
    }

    /// World centre, raised by half the ball's height
    pub fn spawn_rect(world: &World) -> Rect {
        let center_x = (world.width / 2) as f32;
        let center_y = (world.height / 2) as f32 - BALL_SIZE / 2.0;
        Rect::from_center(center_x, center_y, BALL_SIZE, BALL_SIZE)
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.rect.center_x(), self.rect.center_y())
    }

    pub fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            position: self.position(),
            velocity: self.velocity,
            speed: self.speed,
        }
    }

    /// Move the ball without touching its velocity
    pub fn set_position(&mut self, center_x: f32, center_y: f32) {
        self.rect = Rect::from_center(center_x, center_y, BALL_SIZE, BALL_SIZE);
    }

    /// Back to the spawn pose with a new heading
    pub fn reset(&mut self, direction: Vec2) -> Result<()> {
        self.velocity = normalize(direction, self.speed)?;
        self.rect = Self::spawn_rect(&self.world);
        Ok(())
    }

    /// Pull a ball that stepped past the top or bottom wall back inside.
    /// First step of every `advance`.
    pub fn contain(&mut self) {
        self.rect.clamp_vertical(self.world.height as f32);
    }

    /// One tick of motion. Returns true when the ball bounced off a wall.
    ///
    /// Containment holds after the clamp, not after the final translate: a
    /// ball near a wall may end the tick up to one velocity step outside
    /// `[0, H]` and is pulled back at the start of the next tick.
    pub fn advance(&mut self) -> bool {
        let height = self.world.height as f32;

        self.contain();

        let bounced = self.rect.top() == 0.0 || self.rect.bottom() == height;
        if bounced {
            self.velocity.y = -self.velocity.y;
        }

        self.rect.translate(self.velocity.x, self.velocity.y);
        bounced
    }

    /// Paddle hit: reverse horizontal direction only
    pub fn on_collision(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.rect.right() <= 0.0 || self.rect.left() >= self.world.width as f32
    }

    /// The player who earns the point if the ball has left the world
    pub fn scoring_side(&self) -> Option<Player> {
        if self.rect.right() <= 0.0 {
            Some(Player::Right)
        } else if self.rect.left() >= self.world.width as f32 {
            Some(Player::Left)
        } else {
            None
        }
    }

    /// Rescale the current velocity to `new_speed`, keeping its heading
    pub fn set_speed(&mut self, new_speed: f32) -> Result<()> {
        self.velocity = normalize(self.velocity, new_speed)?;
        self.speed = new_speed;
        Ok(())
    }
}

impl Body for Ball {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn world() -> World {
        World::new(640, 480).unwrap()
    }

    fn assert_speed_invariant(ball: &Ball) {
        assert!(
            (ball.velocity().length() - ball.speed()).abs() < 1e-3,
            "|velocity| {} should equal speed {}",
            ball.velocity().length(),
            ball.speed()
        );
    }

    #[test]
    fn test_spawn_pose() {
        let ball = Ball::new(Vec2::new(1.0, 1.0), world(), 10.0).unwrap();
        assert_eq!(ball.position(), Vec2::new(320.0, 235.0));
        assert_eq!(ball.rect().width, BALL_SIZE);
        assert_eq!(ball.rect().height, BALL_SIZE);
        assert_speed_invariant(&ball);
    }

    #[test]
    fn test_new_rejects_zero_direction() {
        let result = Ball::new(Vec2::new(0.0, 0.0), world(), 10.0);
        assert!(matches!(result, Err(SimError::DegenerateVector)));
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut ball = Ball::new(Vec2::new(3.0, 4.0), world(), 5.0).unwrap();
        let before = ball.position();
        assert!(!ball.advance());
        let after = ball.position();
        assert!((after.x - before.x - 3.0).abs() < 1e-4);
        assert!((after.y - before.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_bottom_wall_bounce_flips_only_vertical() {
        let mut ball = Ball::new(Vec2::new(2.0, 5.0), world(), 10.0).unwrap();
        // Bottom edge exactly on the wall
        ball.set_position(300.0, 480.0 - BALL_SIZE / 2.0);
        let before = ball.velocity();

        assert!(ball.advance());

        let after = ball.velocity();
        assert_eq!(after.x, before.x);
        assert_eq!(after.y, -before.y);
        assert_speed_invariant(&ball);
    }

    #[test]
    fn test_tunnelling_ball_is_clamped_then_bounced() {
        let mut ball = Ball::new(Vec2::new(1.0, -5.0), world(), 15.0).unwrap();
        ball.set_position(300.0, -8.0);

        assert!(ball.advance());

        assert!(ball.velocity().y > 0.0);
        // clamped to top == 0 then moved down by vy
        assert!((ball.rect().top() - ball.velocity().y).abs() < 1e-4);
        assert!(ball.rect().top() >= 0.0);
    }

    #[test]
    fn test_wall_containment_over_many_ticks() {
        let mut ball = Ball::new(Vec2::new(1.0, 5.0), world(), 15.0).unwrap();
        for _ in 0..400 {
            ball.advance();
            let vy = ball.velocity().y.abs();

            // overshoot is bounded by one vertical step
            let r = ball.rect();
            assert!(r.top() >= -vy - 1e-4 && r.bottom() <= 480.0 + vy + 1e-4);

            // and the next tick's clamp puts the box back inside
            let mut next = ball.clone();
            next.contain();
            assert!(next.rect().top() >= 0.0 && next.rect().bottom() <= 480.0);

            assert_speed_invariant(&ball);
            if ball.is_out_of_bounds() {
                break;
            }
        }
    }

    #[test]
    fn test_overshoot_near_top_is_undone_next_tick() {
        let mut ball = Ball::new(Vec2::new(1.0, -5.0), world(), 10.0).unwrap();
        ball.set_position(320.0, 8.0);
        assert_eq!(ball.rect().top(), 3.0);

        // not touching the wall yet, so this tick translates straight through it
        assert!(!ball.advance());
        let vy = ball.velocity().y;
        assert!(vy < 0.0);
        assert!((ball.rect().top() - (3.0 + vy)).abs() < 1e-4);
        assert!(ball.rect().top() < 0.0);

        // next tick: clamp to the wall, bounce, move back down
        assert!(ball.advance());
        assert!(ball.velocity().y > 0.0);
        assert!((ball.rect().top() - ball.velocity().y).abs() < 1e-4);
        assert!(ball.rect().top() >= 0.0);
    }

    #[test]
    fn test_on_collision_flips_only_horizontal() {
        let mut ball = Ball::new(Vec2::new(-4.0, 2.0), world(), 10.0).unwrap();
        let before = ball.velocity();
        ball.on_collision();
        assert_eq!(ball.velocity().x, -before.x);
        assert_eq!(ball.velocity().y, before.y);
        assert_speed_invariant(&ball);
    }

    #[test]
    fn test_scoring_sides() {
        let mut ball = Ball::new(Vec2::new(1.0, 1.0), world(), 10.0).unwrap();

        ball.set_position(-BALL_SIZE / 2.0, 100.0);
        assert!(ball.is_out_of_bounds());
        assert_eq!(ball.scoring_side(), Some(Player::Right));

        ball.set_position(640.0 + BALL_SIZE / 2.0, 100.0);
        assert!(ball.is_out_of_bounds());
        assert_eq!(ball.scoring_side(), Some(Player::Left));

        ball.set_position(320.0, 100.0);
        assert!(!ball.is_out_of_bounds());
        assert_eq!(ball.scoring_side(), None);
    }

    #[test]
    fn test_partially_outside_is_still_in_play() {
        let mut ball = Ball::new(Vec2::new(1.0, 1.0), world(), 10.0).unwrap();
        ball.set_position(2.0, 100.0);
        assert!(!ball.is_out_of_bounds());
        ball.set_position(638.0, 100.0);
        assert!(!ball.is_out_of_bounds());
    }

    #[test]
    fn test_reset_returns_to_spawn() {
        let mut ball = Ball::new(Vec2::new(1.0, 1.0), world(), 10.0).unwrap();
        ball.set_position(12.0, 400.0);
        ball.reset(Vec2::new(-3.0, 2.0)).unwrap();
        assert_eq!(ball.rect(), Ball::spawn_rect(&world()));
        assert!(ball.velocity().x < 0.0 && ball.velocity().y > 0.0);
        assert_speed_invariant(&ball);
    }

    #[test]
    fn test_set_speed_keeps_direction() {
        let mut ball = Ball::new(Vec2::new(3.0, -4.0), world(), 5.0).unwrap();
        ball.set_speed(15.0).unwrap();
        assert!((ball.velocity().x - 9.0).abs() < 1e-4);
        assert!((ball.velocity().y + 12.0).abs() < 1e-4);
        ball.set_speed(5.0).unwrap();
        assert!((ball.velocity().x - 3.0).abs() < 1e-4);
        assert_speed_invariant(&ball);
    }

    #[test]
    fn test_set_speed_rejects_zero() {
        let mut ball = Ball::new(Vec2::new(3.0, -4.0), world(), 5.0).unwrap();
        assert!(ball.set_speed(0.0).is_err());
        assert_eq!(ball.speed(), 5.0);
    }
}
