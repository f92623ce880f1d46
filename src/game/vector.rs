// Velocity vectors and the normalization every speed change goes through

use rand::Rng;

use crate::error::SimError;

/// Serve directions are drawn per axis from these values (zero excluded)
pub const DIRECTION_CHOICES: [i32; 10] = [-5, -4, -3, -2, -1, 1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// Scale `vector` so its length equals `target_speed`, keeping its direction.
///
/// A zero vector has no direction to keep and is rejected rather than
/// replaced by some default heading.
pub fn normalize(vector: Vec2, target_speed: f32) -> Result<Vec2, SimError> {
    if !(target_speed.is_finite() && target_speed > 0.0) {
        return Err(SimError::InvalidSpeed(target_speed));
    }

    let length = vector.length();
    if length == 0.0 || !length.is_finite() {
        return Err(SimError::DegenerateVector);
    }

    let factor = target_speed / length;
    Ok(Vec2::new(vector.x * factor, vector.y * factor))
}

/// Pick a serve direction, each axis independently from `DIRECTION_CHOICES`
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let x = DIRECTION_CHOICES[rng.gen_range(0..DIRECTION_CHOICES.len())];
    let y = DIRECTION_CHOICES[rng.gen_range(0..DIRECTION_CHOICES.len())];
    Vec2::from((x, y))
}
