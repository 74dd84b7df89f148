//! Key mapping for every screen.
//!
//! The game only knows two intents; everything else is ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flappy_rocket::WorldInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Flap while playing, confirm on menus.
    Confirm,
    /// Leave the current screen.
    Quit,
    Ignored,
}

impl Intent {
    pub fn to_world_input(self) -> WorldInput {
        match self {
            Intent::Confirm => WorldInput::Flap,
            Intent::Quit | Intent::Ignored => WorldInput::Other,
        }
    }
}

pub fn map_key(key: &KeyEvent) -> Intent {
    // Release/repeat events arrive on some platforms; they never count.
    if key.kind != KeyEventKind::Press {
        return Intent::Ignored;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Intent::Quit,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => Intent::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Intent::Quit,
        _ => Intent::Ignored,
    }
}

pub fn map_event(event: &Event) -> Intent {
    match event {
        Event::Key(key) => map_key(key),
        _ => Intent::Ignored,
    }
}
