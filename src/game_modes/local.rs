use ratatui::style::Color;

use crate::ai::Opponent;
use crate::config::{Config, KeyBindings};
use crate::game::Player;
use crate::ui::WinnerBanner;

use super::common::run_match;

/// Run local 2-player game on one keyboard
pub fn run_game_local<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    config: &Config,
) -> anyhow::Result<Option<Player>> {
    let controls = controls_hint(&config.keybindings);
    run_match(terminal, config, Opponent::Human, &controls, winner_banner)
}

fn controls_hint(keys: &KeyBindings) -> String {
    format!(
        "{}/{}: Left  {}/{}: Right  {}/{}: Speeds  {}: Quit",
        keys.left_paddle_up,
        keys.left_paddle_down,
        keys.right_paddle_up,
        keys.right_paddle_down,
        keys.cycle_ball_speed,
        keys.cycle_paddle_speed,
        keys.quit
    )
}

fn winner_banner(winner: Player) -> WinnerBanner {
    WinnerBanner::new(winner, "Match over", Color::Green)
}
