use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::app::{App, Focus};

/// Maps one key press onto the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('q') = key.code {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => match app.focus() {
            Focus::GuessField => app.on_guess_submitted(),
            Focus::PuzzleField => app.on_new_puzzle_requested(),
        },
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}
