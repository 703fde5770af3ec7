use std::sync::Arc;

use crate::controller::GuessController;
use crate::display::{Column, DisplaySink};
use crate::service::ServiceError;
use crate::session::task::GuessTask;
use crate::session::Slot;
use crate::ui::grid::GuessGrid;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    GuessField,
    PuzzleField,
}

/// Single-line text editor backing one input field.
#[derive(Default)]
pub struct InputField {
    buffer: String,
}

impl InputField {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the current text, leaving the field empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

/// Display sink over the app's view state. The grid takes the table
/// cells and label; clearing the input field lands on the guess editor,
/// which lives outside the grid.
struct AppSink<'a> {
    grid: &'a mut GuessGrid,
    guess_input: &'a mut InputField,
}

impl DisplaySink for AppSink<'_> {
    fn set_cell(&mut self, slot: Slot, column: Column, value: &str) {
        self.grid.set_cell(slot, column, value);
    }

    fn ensure_row_count(&mut self, rows: usize) {
        self.grid.ensure_row_count(rows);
    }

    fn reset_grid(&mut self, default_rows: usize) {
        self.grid.reset_grid(default_rows);
    }

    fn set_puzzle_label(&mut self, text: &str) {
        self.grid.set_puzzle_label(text);
    }

    fn clear_input_field(&mut self) {
        self.guess_input.clear();
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    guess_input: InputField,
    puzzle_input: InputField,
    grid: GuessGrid,
    controller: GuessController,
}

impl App {
    pub fn new(controller: GuessController, default_rows: usize) -> Self {
        Self {
            should_quit: false,
            focus: Focus::GuessField,
            guess_input: InputField::default(),
            puzzle_input: InputField::default(),
            grid: GuessGrid::new(default_rows.max(1)),
            controller,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::GuessField => Focus::PuzzleField,
            Focus::PuzzleField => Focus::GuessField,
        };
    }

    pub fn grid(&self) -> &GuessGrid {
        &self.grid
    }

    pub fn guess_input(&self) -> &str {
        self.guess_input.as_str()
    }

    pub fn puzzle_input(&self) -> &str {
        self.puzzle_input.as_str()
    }

    fn focused_field(&mut self) -> &mut InputField {
        match self.focus {
            Focus::GuessField => &mut self.guess_input,
            Focus::PuzzleField => &mut self.puzzle_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_field().push_char(c);
    }

    pub fn backspace(&mut self) {
        self.focused_field().backspace();
    }

    /// Enter on the guess field: submit the current text as a guess.
    pub fn on_guess_submitted(&mut self) {
        let text = self.guess_input.take();
        let mut sink = AppSink {
            grid: &mut self.grid,
            guess_input: &mut self.guess_input,
        };
        self.controller.submit_guess(&text, &mut sink);
    }

    /// Enter on the puzzle field (or startup): switch puzzles.
    pub fn on_new_puzzle_requested(&mut self) {
        let text = self.puzzle_input.take();
        self.start_puzzle(&text);
        self.focus = Focus::GuessField;
    }

    /// Switches to the puzzle named by `id_text` (random when malformed).
    pub fn start_puzzle(&mut self, id_text: &str) {
        let mut sink = AppSink {
            grid: &mut self.grid,
            guess_input: &mut self.guess_input,
        };
        self.controller.set_puzzle(id_text, &mut sink);
    }

    /// A spawned guess task resolved; hand its result to the controller.
    pub fn on_guess_completed(&mut self, task: Arc<GuessTask>, result: Result<String, ServiceError>) {
        let mut sink = AppSink {
            grid: &mut self.grid,
            guess_input: &mut self.guess_input,
        };
        self.controller.on_task_complete(&task, result, &mut sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_field_edits() {
        let mut field = InputField::default();
        field.push_char('c');
        field.push_char('r');
        field.push_char('a');
        assert_eq!(field.as_str(), "cra");
        field.backspace();
        assert_eq!(field.as_str(), "cr");
        assert_eq!(field.take(), "cr");
        assert_eq!(field.as_str(), "");
    }

    #[test]
    fn input_field_ignores_control_chars() {
        let mut field = InputField::default();
        field.push_char('\x1b');
        field.push_char('\n');
        assert_eq!(field.as_str(), "");
    }

    #[test]
    fn backspace_on_empty_field_is_a_noop() {
        let mut field = InputField::default();
        field.backspace();
        assert_eq!(field.as_str(), "");
    }
}
