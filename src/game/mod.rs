pub mod ball;
pub mod input;
pub mod paddle;
pub mod physics;
pub mod rect;
pub mod state;
pub mod vector;

pub use ball::{Ball, BallSnapshot, BALL_SIZE};
pub use input::{poll_input, InputAction, KeyMap, PaddleIntents, TickIntents};
pub use paddle::{Paddle, PADDLE_HEIGHT, PADDLE_WIDTH};
pub use physics::{update_with_events, PhysicsEvents};
pub use rect::{Body, Rect};
pub use state::{Bat, Controller, GameRng, MatchPhase, MatchState, Player, World};
pub use vector::{normalize, random_direction, Vec2};
