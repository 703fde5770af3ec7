//! Terminal UI: a guess table, two input fields, and the event loop that
//! owns all session state.

pub mod app;
pub mod events;
pub mod grid;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
