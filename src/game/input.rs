use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    PaddleUp,
    PaddleDown,
    PaddleStop,
}

/// Match a key code against a binding string from the config
/// ("Up", "Down", "Esc", "Enter" or a single character).
fn key_matches(code: KeyCode, binding: &str) -> bool {
    match code {
        KeyCode::Up => binding.eq_ignore_ascii_case("up"),
        KeyCode::Down => binding.eq_ignore_ascii_case("down"),
        KeyCode::Left => binding.eq_ignore_ascii_case("left"),
        KeyCode::Right => binding.eq_ignore_ascii_case("right"),
        KeyCode::Esc => binding.eq_ignore_ascii_case("esc"),
        KeyCode::Enter => binding.eq_ignore_ascii_case("enter"),
        KeyCode::Char(c) => {
            let mut chars = binding.chars();
            matches!((chars.next(), chars.next()),
                (Some(b), None) if b.eq_ignore_ascii_case(&c))
        }
        _ => false,
    }
}

/// Drain all pending key events into paddle actions.
///
/// A press of the up/down binding steers the paddle; any other press, and
/// any release, stops it. Later events override earlier ones, so the last
/// key wins within a frame.
pub fn poll_input(keys: &KeyBindings) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            match key.kind {
                KeyEventKind::Press => {
                    if key_matches(key.code, &keys.quit) || key.code == KeyCode::Esc {
                        actions.push(InputAction::Quit);
                    } else if key_matches(key.code, &keys.paddle_up) {
                        actions.push(InputAction::PaddleUp);
                    } else if key_matches(key.code, &keys.paddle_down) {
                        actions.push(InputAction::PaddleDown);
                    } else {
                        actions.push(InputAction::PaddleStop);
                    }
                }
                // Requires the keyboard enhancement flags pushed in main;
                // terminals without them simply never emit releases.
                KeyEventKind::Release => actions.push(InputAction::PaddleStop),
                KeyEventKind::Repeat => {}
            }
        }
    }

    Ok(actions)
}
