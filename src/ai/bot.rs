// Bot trait for computer-controlled paddles

use crate::game::{BallSnapshot, Paddle, World};

/// Trait for AI paddle controllers
///
/// A bot never holds on to the ball. Each tick it is handed a snapshot of
/// the ball and the paddle it drives, and moves that paddle directly.
pub trait Bot {
    /// Move `paddle` for this tick
    ///
    /// # Arguments
    /// * `paddle` - The paddle this bot controls
    /// * `ball` - Position, velocity and speed of the ball, read together
    /// * `world` - Play field dimensions
    fn steer(&mut self, paddle: &mut Paddle, ball: &BallSnapshot, world: &World);

    /// Reset bot internal state (called after every point)
    fn reset(&mut self);

    /// Bot name for debugging/display
    fn name(&self) -> &str;
}
