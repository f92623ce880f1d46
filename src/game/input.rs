use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    LeftPaddleUp,
    LeftPaddleDown,
    RightPaddleUp,
    RightPaddleDown,
    CycleBallSpeed,
    CyclePaddleSpeed,
}

/// Move intents for one paddle, sampled once per tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaddleIntents {
    pub up: bool,
    pub down: bool,
}

/// Intents for both paddles for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickIntents {
    pub left: PaddleIntents,
    pub right: PaddleIntents,
}

impl TickIntents {
    /// Fold this tick's actions into per-paddle intents
    pub fn from_actions(actions: &[InputAction]) -> Self {
        let mut intents = Self::default();
        for action in actions {
            match action {
                InputAction::LeftPaddleUp => intents.left.up = true,
                InputAction::LeftPaddleDown => intents.left.down = true,
                InputAction::RightPaddleUp => intents.right.up = true,
                InputAction::RightPaddleDown => intents.right.down = true,
                _ => {}
            }
        }
        intents
    }
}

/// Key codes resolved from the configured binding names
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: Vec<(KeyCode, InputAction)>,
}

impl KeyMap {
    pub fn from_bindings(keys: &KeyBindings) -> Self {
        let named = [
            (&keys.quit, InputAction::Quit),
            (&keys.left_paddle_up, InputAction::LeftPaddleUp),
            (&keys.left_paddle_down, InputAction::LeftPaddleDown),
            (&keys.right_paddle_up, InputAction::RightPaddleUp),
            (&keys.right_paddle_down, InputAction::RightPaddleDown),
            (&keys.cycle_ball_speed, InputAction::CycleBallSpeed),
            (&keys.cycle_paddle_speed, InputAction::CyclePaddleSpeed),
        ];

        let mut bindings = vec![(KeyCode::Esc, InputAction::Quit)];
        for (name, action) in named {
            match parse_key(name) {
                Some(code) => bindings.push((code, action)),
                None => tracing::warn!("Ignoring unknown key binding {:?} for {:?}", name, action),
            }
        }
        Self { bindings }
    }

    pub fn action_for(&self, code: KeyCode) -> Option<InputAction> {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_uppercase()),
            other => other,
        };
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

/// Parse a binding name such as "Up", "Esc" or "W"
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name.trim() {
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "Enter" => Some(KeyCode::Enter),
        "Esc" => Some(KeyCode::Esc),
        "Space" => Some(KeyCode::Char(' ')),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_uppercase())),
                _ => None,
            }
        }
    }
}

/// Drain pending key presses and map them to actions.
/// Terminals report presses (and auto-repeat) rather than held keys, so a
/// paddle intent is asserted for every tick in which its key was seen.
pub fn poll_input(keymap: &KeyMap) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                if let Some(action) = keymap.action_for(key.code) {
                    actions.push(action);
                }
            }
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("Up"), Some(KeyCode::Up));
        assert_eq!(parse_key("Esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key("w"), Some(KeyCode::Char('W')));
        assert_eq!(parse_key("Nope"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_keymap_defaults() {
        let keymap = KeyMap::from_bindings(&KeyBindings::default());
        assert_eq!(keymap.action_for(KeyCode::Up), Some(InputAction::LeftPaddleUp));
        assert_eq!(keymap.action_for(KeyCode::Down), Some(InputAction::LeftPaddleDown));
        assert_eq!(keymap.action_for(KeyCode::Char('w')), Some(InputAction::RightPaddleUp));
        assert_eq!(keymap.action_for(KeyCode::Char('S')), Some(InputAction::RightPaddleDown));
        assert_eq!(keymap.action_for(KeyCode::Char('q')), Some(InputAction::Quit));
        assert_eq!(keymap.action_for(KeyCode::Esc), Some(InputAction::Quit));
        assert_eq!(keymap.action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_tick_intents_from_actions() {
        let intents = TickIntents::from_actions(&[
            InputAction::LeftPaddleUp,
            InputAction::RightPaddleDown,
            InputAction::CycleBallSpeed,
        ]);
        assert_eq!(intents.left, PaddleIntents { up: true, down: false });
        assert_eq!(intents.right, PaddleIntents { up: false, down: true });
    }
}
