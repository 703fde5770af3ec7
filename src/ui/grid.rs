use crate::display::{Column, DisplaySink};
use crate::session::Slot;

/// One row of the guess table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GuessRow {
    pub guess: String,
    pub letters: String,
    pub position: String,
}

/// View-side state of the guess table: the cells the renderer projects
/// into a ratatui table, plus the puzzle label. Purely a projection
/// target addressed by slot; holds no task state.
pub struct GuessGrid {
    rows: Vec<GuessRow>,
    min_rows: usize,
    puzzle_label: String,
}

impl GuessGrid {
    pub fn new(min_rows: usize) -> Self {
        Self {
            rows: vec![GuessRow::default(); min_rows],
            min_rows,
            puzzle_label: String::new(),
        }
    }

    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    pub fn puzzle_label(&self) -> &str {
        &self.puzzle_label
    }

    fn cell_mut(&mut self, slot: Slot, column: Column) -> &mut String {
        let index = slot.index();
        if index >= self.rows.len() {
            self.rows.resize(index + 1, GuessRow::default());
        }
        let row = &mut self.rows[index];
        match column {
            Column::Guess => &mut row.guess,
            Column::Letters => &mut row.letters,
            Column::Position => &mut row.position,
        }
    }
}

impl DisplaySink for GuessGrid {
    fn set_cell(&mut self, slot: Slot, column: Column, value: &str) {
        let cell = self.cell_mut(slot, column);
        cell.clear();
        cell.push_str(value);
    }

    fn ensure_row_count(&mut self, rows: usize) {
        if rows > self.rows.len() {
            self.rows.resize(rows, GuessRow::default());
        }
    }

    fn reset_grid(&mut self, default_rows: usize) {
        self.min_rows = default_rows.max(1);
        self.rows.clear();
        self.rows.resize(self.min_rows, GuessRow::default());
    }

    fn set_puzzle_label(&mut self, text: &str) {
        self.puzzle_label.clear();
        self.puzzle_label.push_str(text);
    }

    fn clear_input_field(&mut self) {
        // The guess input lives on the App; see `AppSink`.
    }
}
