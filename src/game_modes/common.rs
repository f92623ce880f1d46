//! Common utilities shared by the single-player and two-player modes
//!
//! Both modes run the same loop: poll keys, apply game controls, step the
//! match once, draw, then sleep out the rest of the frame. Only the hint
//! text and the winner banner differ.

use std::time::{Duration, Instant};

use ratatui::Terminal;

use crate::ai::Opponent;
use crate::config::{Config, SpeedPreset};
use crate::error::SimError;
use crate::game::{
    poll_input, update_with_events, GameRng, InputAction, KeyMap, MatchState, PhysicsEvents,
    Player, TickIntents,
};
use crate::ui::{self, Hud, WinnerBanner};

/// Time budget for one tick at the configured rate
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

/// Apply frame rate limiting to maintain consistent game speed.
///
/// This function should be called at the end of each game loop iteration.
/// It sleeps for the remaining time if the frame finished early.
pub fn limit_frame_rate(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        std::thread::sleep(frame - elapsed);
    }
}

/// The preset after `current`; unknown speeds restart the cycle at slow
pub fn next_speed(current: f32) -> f32 {
    SpeedPreset::from_value(current)
        .map(SpeedPreset::next)
        .unwrap_or(SpeedPreset::Slow)
        .value()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// One match plus everything the loop needs besides the terminal
pub(crate) struct Session {
    pub state: MatchState,
    rng: GameRng,
    winner_pause: Duration,
    finished_at: Option<Instant>,
}

impl Session {
    pub fn new(config: &Config, opponent: Opponent, mut rng: GameRng) -> Result<Self, SimError> {
        let state = MatchState::new(&config.physics, opponent, &mut rng)?;
        Ok(Self {
            state,
            rng,
            winner_pause: Duration::from_millis(config.display.winner_pause_ms),
            finished_at: None,
        })
    }

    /// Handle the non-paddle actions of this tick
    pub fn apply_controls(&mut self, actions: &[InputAction]) -> Result<Flow, SimError> {
        for action in actions {
            match action {
                InputAction::Quit => return Ok(Flow::Quit),
                InputAction::CycleBallSpeed => {
                    let speed = next_speed(self.state.ball.speed());
                    self.state.set_ball_speed(speed)?;
                }
                InputAction::CyclePaddleSpeed => {
                    let speed = next_speed(self.state.left.paddle.speed());
                    self.state.set_paddle_speed(speed)?;
                }
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }

    /// Run one physics tick; records when the match was decided
    pub fn step(&mut self, actions: &[InputAction], now: Instant) -> Result<PhysicsEvents, SimError> {
        let intents = TickIntents::from_actions(actions);
        let events = update_with_events(&mut self.state, &intents, &mut self.rng)?;
        if events.match_won.is_some() && self.finished_at.is_none() {
            self.finished_at = Some(now);
        }
        if events.any() {
            tracing::debug!("{:?}, ball velocity {:?}", events, self.state.ball.velocity());
        }
        Ok(events)
    }

    /// True once the winner banner has been up long enough
    pub fn pause_elapsed(&self, now: Instant) -> bool {
        match self.finished_at {
            Some(at) => now.duration_since(at) >= self.winner_pause,
            None => false,
        }
    }

    pub fn hud<'a>(&self, controls: &'a str) -> Hud<'a> {
        Hud {
            ball_speed: self.state.ball.speed(),
            paddle_speed: self.state.left.paddle.speed(),
            controls,
        }
    }
}

/// Run a match to completion, or until the player quits.
///
/// Returns the winner, or `None` if the match was abandoned.
pub fn run_match<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    opponent: Opponent,
    controls: &str,
    winner_banner: fn(Player) -> WinnerBanner,
) -> anyhow::Result<Option<Player>> {
    let keymap = KeyMap::from_bindings(&config.keybindings);
    let frame = frame_duration(config.display.target_fps);
    let mut session = Session::new(config, opponent, GameRng::from_entropy())?;

    tracing::info!(
        "Match started: {} ({}), first to {}",
        opponent.display_name(),
        opponent.description(),
        config.physics.winning_score
    );

    loop {
        let now = Instant::now();

        let actions = poll_input(&keymap)?;
        if session.apply_controls(&actions)? == Flow::Quit {
            tracing::info!("Match abandoned");
            return Ok(None);
        }

        session.step(&actions, now)?;

        let banner = session.state.winner.map(winner_banner);
        let hud = session.hud(controls);
        terminal.draw(|f| {
            ui::render(f, &session.state, &config.display, &hud, banner.as_ref())
        })?;

        if session.pause_elapsed(now) {
            return Ok(session.state.winner);
        }

        limit_frame_rate(now, frame);
    }
}
