// Short-horizon trajectory projection for the computer paddle

use crate::game::{BallSnapshot, Vec2, World};

/// How many ticks ahead the bot looks. Changing it changes how hard the
/// computer is to beat.
pub const LOOK_AHEAD_STEPS: u32 = 3;

/// Straight-line position of the ball `steps` ticks from now, ignoring walls
pub fn project(ball: &BallSnapshot, steps: u32) -> Vec2 {
    let n = steps as f32;
    Vec2::new(
        ball.velocity.x * n + ball.position.x,
        ball.velocity.y * n + ball.position.y,
    )
}

/// Reflect a projected y off the top or bottom wall.
///
/// Only one reflection is applied; with a three-tick horizon the ball
/// cannot bounce twice.
pub fn fold_vertical(projected_y: f32, height: f32) -> f32 {
    if projected_y < 0.0 {
        -projected_y
    } else if projected_y > height {
        2.0 * height - projected_y
    } else {
        projected_y
    }
}

/// Walk a projected y back to roughly where the ball was when it crossed
/// the right edge of the world.
///
/// Only overshoot past the right edge is corrected.
pub fn undo_overshoot(projected_y: f32, projected_x: f32, ball: &BallSnapshot, width: f32) -> f32 {
    if projected_x <= width {
        return projected_y;
    }

    let steps_to_undo = ((projected_x - width) / ball.speed).floor();
    let vy = ball.velocity.y;

    if vy > 0.0 {
        projected_y - steps_to_undo * vy
    } else if vy < 0.0 {
        projected_y + steps_to_undo * vy
    } else {
        projected_y
    }
}

/// The y coordinate the bot steers toward
pub fn project_target_y(ball: &BallSnapshot, steps: u32, world: &World) -> f32 {
    let projected = project(ball, steps);
    let y = fold_vertical(projected.y, world.height as f32);
    undo_overshoot(y, projected.x, ball, world.width as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(640, 480).unwrap()
    }

    fn snapshot(x: f32, y: f32, vx: f32, vy: f32, speed: f32) -> BallSnapshot {
        BallSnapshot {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            speed,
        }
    }

    #[test]
    fn test_projection_three_steps_ahead() {
        let ball = snapshot(320.0, 240.0, -5.0, 3.0, 5.83);
        let projected = project(&ball, LOOK_AHEAD_STEPS);

        assert_eq!(projected.y, 249.0);
        assert_eq!(projected.x, 305.0);
        // in bounds on both axes, so nothing else adjusts it
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 249.0);
    }

    #[test]
    fn test_fold_off_top_wall() {
        let ball = snapshot(320.0, 4.0, 2.0, -3.0, 3.6);
        assert_eq!(project(&ball, LOOK_AHEAD_STEPS).y, -5.0);
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 5.0);
    }

    #[test]
    fn test_fold_off_bottom_wall() {
        let ball = snapshot(320.0, 478.0, 2.0, 3.0, 3.6);
        assert_eq!(project(&ball, LOOK_AHEAD_STEPS).y, 487.0);
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 473.0);
    }

    #[test]
    fn test_fold_is_single_reflection() {
        // deep enough to need two reflections; only one is applied
        assert_eq!(fold_vertical(-500.0, 480.0), 500.0);
        assert_eq!(fold_vertical(0.0, 480.0), 0.0);
        assert_eq!(fold_vertical(480.0, 480.0), 480.0);
    }

    #[test]
    fn test_overshoot_moving_down() {
        // px = 665, (665 - 640) / 10 -> 2 whole steps to undo
        let ball = snapshot(635.0, 240.0, 10.0, 4.0, 10.0);
        assert_eq!(project(&ball, LOOK_AHEAD_STEPS).y, 252.0);
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 244.0);
    }

    #[test]
    fn test_overshoot_moving_up() {
        let ball = snapshot(635.0, 240.0, 10.0, -4.0, 10.0);
        assert_eq!(project(&ball, LOOK_AHEAD_STEPS).y, 228.0);
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 220.0);
    }

    #[test]
    fn test_overshoot_less_than_one_step() {
        let ball = snapshot(630.0, 240.0, 5.0, 3.0, 5.83);
        // px = 645, (645 - 640) / 5.83 floors to 0
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 249.0);
    }

    #[test]
    fn test_no_correction_past_left_edge() {
        let ball = snapshot(5.0, 240.0, -10.0, 4.0, 10.0);
        let projected = project(&ball, LOOK_AHEAD_STEPS);
        assert!(projected.x < 0.0);
        assert_eq!(project_target_y(&ball, LOOK_AHEAD_STEPS, &world()), 252.0);
    }
}
