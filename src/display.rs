//! Seam between the controller and whatever renders the guess table.

use crate::session::Slot;

/// Columns of the guess table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Column {
    Guess,
    Letters,
    Position,
}

/// Projection target for guess rows. Holds no guess state of its own and
/// never initiates requests; all calls are idempotent and
/// order-independent across different slots.
pub trait DisplaySink {
    fn set_cell(&mut self, slot: Slot, column: Column, value: &str);

    /// Grows the visible table to at least `rows` rows.
    fn ensure_row_count(&mut self, rows: usize);

    /// Clears every cell and shrinks back to the default empty grid.
    fn reset_grid(&mut self, default_rows: usize);

    fn set_puzzle_label(&mut self, text: &str);

    fn clear_input_field(&mut self);
}
