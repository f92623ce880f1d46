// AI module for the computer opponent

mod bot;
pub mod prediction;
mod predictive_bot;

pub use bot::Bot;
pub use predictive_bot::{PredictiveBot, PredictiveBotConfig};

use serde::{Deserialize, Serialize};

/// Who plays the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Predictive computer paddle
    Computer,
    /// Second human on the same keyboard
    Human,
}

impl Opponent {
    /// Get display name for opponent type
    pub fn display_name(&self) -> &str {
        match self {
            Opponent::Computer => "Computer",
            Opponent::Human => "Two Player",
        }
    }

    /// Get description for opponent type
    pub fn description(&self) -> &str {
        match self {
            Opponent::Computer => "Right paddle predicts the ball three ticks ahead",
            Opponent::Human => "Both paddles on one keyboard",
        }
    }
}

/// Create the bot that drives a computer paddle
pub fn create_bot() -> Box<dyn Bot> {
    Box::new(PredictiveBot::classic())
}
