// Pong configuration types
// All settings default to the classic 640x480 game

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::Opponent;
use crate::error::SimError;
use crate::game::World;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Reject settings that cannot produce a playable match
    pub fn validate(&self) -> Result<(), SimError> {
        let physics = &self.physics;
        World::new(physics.world_width, physics.world_height)?;
        for speed in [physics.ball_speed, physics.paddle_speed] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(SimError::InvalidSpeed(speed));
            }
        }
        if physics.winning_score == 0 {
            return Err(SimError::InvalidWinningScore);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle (the human in single-player)
    pub left_paddle_up: String,
    pub left_paddle_down: String,

    // Right paddle (two-player only)
    pub right_paddle_up: String,
    pub right_paddle_down: String,

    // Game controls
    pub quit: String,
    pub cycle_ball_speed: String,
    pub cycle_paddle_speed: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_paddle_up: "Up".to_string(),
            left_paddle_down: "Down".to_string(),
            right_paddle_up: "W".to_string(),
            right_paddle_down: "S".to_string(),
            quit: "Q".to_string(),
            cycle_ball_speed: "B".to_string(),
            cycle_paddle_speed: "N".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Field dimensions in world units
    pub world_width: u32,
    pub world_height: u32,

    // Ball distance per tick
    pub ball_speed: f32,

    // Paddle distance per tick while a key is held
    pub paddle_speed: f32,

    // Score required to win
    pub winning_score: u8,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            world_width: 640,
            world_height: 480,
            ball_speed: SpeedPreset::Medium.value(),
            paddle_speed: SpeedPreset::Slow.value(),
            winning_score: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Who plays the right paddle: "computer" or "human"
    pub opponent: Opponent,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::Computer,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Ticks per second
    pub target_fps: u64,

    // How long the winner banner stays up before the game exits
    pub winner_pause_ms: u64,

    // Score display color (RGB values 0-255)
    pub score_color: [u8; 3],

    // Paddle color
    pub paddle_color: [u8; 3],

    // Ball color
    pub ball_color: [u8; 3],

    // Center line color
    pub center_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            winner_pause_ms: 2000,
            score_color: [255, 255, 255],       // White
            paddle_color: [255, 255, 255],      // White
            ball_color: [255, 255, 255],        // White
            center_line_color: [100, 100, 100], // Gray
        }
    }
}

/// The three speeds offered for ball and paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPreset {
    Slow,
    Medium,
    Fast,
}

impl SpeedPreset {
    pub fn value(self) -> f32 {
        match self {
            SpeedPreset::Slow => 5.0,
            SpeedPreset::Medium => 10.0,
            SpeedPreset::Fast => 15.0,
        }
    }

    /// Slow -> Medium -> Fast -> Slow
    pub fn next(self) -> Self {
        match self {
            SpeedPreset::Slow => SpeedPreset::Medium,
            SpeedPreset::Medium => SpeedPreset::Fast,
            SpeedPreset::Fast => SpeedPreset::Slow,
        }
    }

    /// Preset whose value matches `speed`, if any
    pub fn from_value(speed: f32) -> Option<Self> {
        [SpeedPreset::Slow, SpeedPreset::Medium, SpeedPreset::Fast]
            .into_iter()
            .find(|preset| preset.value() == speed)
    }
}

impl fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpeedPreset::Slow => "slow",
            SpeedPreset::Medium => "medium",
            SpeedPreset::Fast => "fast",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SpeedPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" | "5" => Ok(SpeedPreset::Slow),
            "medium" | "10" => Ok(SpeedPreset::Medium),
            "fast" | "15" => Ok(SpeedPreset::Fast),
            other => Err(format!(
                "unknown speed '{}', expected slow, medium or fast",
                other
            )),
        }
    }
}
