use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Action, Direction};

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate a terminal event into a game action. Only key presses
    /// matter; releases, repeats, mouse and resize events map to nothing.
    pub fn handle_event(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            _ => None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        // Ctrl+C is the terminal's window-close
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Action::Turn(Direction::Up)),
            KeyCode::Down => Some(Action::Turn(Direction::Down)),
            KeyCode::Left => Some(Action::Turn(Direction::Left)),
            KeyCode::Right => Some(Action::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Turn(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Turn(Direction::Down)),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Turn(Direction::Left)),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Turn(Direction::Right)),

            // Controls
            KeyCode::Char(' ') => Some(Action::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
