use ratatui::style::Color;

use crate::ai::Opponent;
use crate::config::{Config, KeyBindings};
use crate::game::Player;
use crate::ui::WinnerBanner;

use super::common::run_match;

/// Run single-player game against the computer (human on the left)
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    config: &Config,
) -> anyhow::Result<Option<Player>> {
    let controls = controls_hint(&config.keybindings);
    run_match(terminal, config, Opponent::Computer, &controls, winner_banner)
}

fn controls_hint(keys: &KeyBindings) -> String {
    format!(
        "{}/{}: Move  {}: Ball speed  {}: Paddle speed  {}: Quit",
        keys.left_paddle_up,
        keys.left_paddle_down,
        keys.cycle_ball_speed,
        keys.cycle_paddle_speed,
        keys.quit
    )
}

fn winner_banner(winner: Player) -> WinnerBanner {
    match winner {
        Player::Left => WinnerBanner::new(winner, "You win", Color::Green),
        Player::Right => WinnerBanner::new(winner, "Computer wins", Color::Cyan),
    }
}
