//! The concurrent guess controller.
//!
//! Owns the session (puzzle id, slot counter, live-task registry), spawns
//! one network task per submitted guess, and routes each result back to
//! the row it was submitted on, regardless of completion order. All
//! session and display mutation happens on the event-loop thread; spawned
//! tasks only perform the HTTP call and send the result back over the app
//! event channel.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::display::{Column, DisplaySink};
use crate::service::{GuessService, ServiceError};
use crate::session::outcome::{interpret, GuessOutcome};
use crate::session::puzzle::PuzzleId;
use crate::session::task::GuessTask;
use crate::session::Session;
use crate::ui::events::AppEvent;

/// Shown in the letter-match column when the guess hits the secret word.
pub const WIN_MESSAGE: &str = "You win!";
/// Shown when the service rejected the request as malformed.
pub const FORMAT_ERROR_MESSAGE: &str = "Incorrectly formatted request";
/// Shown when the guess is not in the service's dictionary.
pub const DICTIONARY_ERROR_MESSAGE: &str = "Invalid guess.";
/// Generic marker for transport failures and unrecognized responses.
pub const FAILURE_MESSAGE: &str = "Request failed.";

pub struct GuessController {
    session: Session,
    service: Arc<dyn GuessService>,
    runtime: tokio::runtime::Handle,
    events: Sender<AppEvent>,
    default_rows: usize,
}

impl GuessController {
    pub fn new(
        service: Arc<dyn GuessService>,
        runtime: tokio::runtime::Handle,
        events: Sender<AppEvent>,
        default_rows: usize,
    ) -> Self {
        Self {
            session: Session::new(PuzzleId::random()),
            service,
            runtime,
            events,
            default_rows,
        }
    }

    pub fn current_puzzle(&self) -> PuzzleId {
        self.session.current_puzzle()
    }

    pub fn live_task_count(&self) -> usize {
        self.session.live_count()
    }

    /// Accepts a new guess: assigns the next slot, shows the guess text on
    /// its row immediately, and dispatches the service call without
    /// blocking further input. Empty text is a no-op and consumes no slot.
    pub fn submit_guess(&mut self, raw_text: &str, sink: &mut dyn DisplaySink) {
        let guess = raw_text.trim().to_lowercase();
        if guess.is_empty() {
            return;
        }

        let slot = self.session.allocate_slot();
        sink.ensure_row_count(slot.index() + 1);
        sink.set_cell(slot, Column::Guess, &guess);
        sink.set_cell(slot, Column::Letters, "");
        sink.set_cell(slot, Column::Position, "");

        let task = Arc::new(GuessTask::new(
            guess,
            slot,
            self.session.current_puzzle(),
        ));
        self.session.register(Arc::clone(&task));
        debug!(slot = %slot, puzzle = %task.puzzle(), guess = task.guess(), "dispatching guess");

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = service.request(task.puzzle(), task.guess()).await;
            // The receiver is gone only during shutdown; the result is
            // moot then.
            let _ = events.send(AppEvent::GuessCompleted { task, result });
        });
    }

    /// Joins one completed task back into the session. Called exactly once
    /// per dispatched task, in whatever order the calls resolve. A
    /// cancelled task must never write to a row that may now belong to a
    /// different puzzle, so its result is discarded here.
    pub fn on_task_complete(
        &mut self,
        task: &GuessTask,
        result: Result<String, ServiceError>,
        sink: &mut dyn DisplaySink,
    ) {
        self.session.retire(task);

        let outcome = if task.is_cancelled() {
            GuessOutcome::Cancelled
        } else {
            match result {
                Ok(raw) => interpret(&raw),
                Err(err) => GuessOutcome::TransportFailure(err.to_string()),
            }
        };

        let slot = task.slot();
        match outcome {
            GuessOutcome::Cancelled => {
                info!(slot = %slot, puzzle = %task.puzzle(), "discarding result of cancelled guess");
            }
            GuessOutcome::Win => {
                sink.set_cell(slot, Column::Letters, WIN_MESSAGE);
                sink.set_cell(slot, Column::Position, "");
            }
            GuessOutcome::Scored { letters, positions } => {
                sink.set_cell(slot, Column::Letters, &letters.to_string());
                sink.set_cell(slot, Column::Position, &positions.to_string());
            }
            GuessOutcome::FormatError => {
                sink.set_cell(slot, Column::Letters, FORMAT_ERROR_MESSAGE);
                sink.set_cell(slot, Column::Position, "");
            }
            GuessOutcome::DictionaryError => {
                sink.set_cell(slot, Column::Letters, DICTIONARY_ERROR_MESSAGE);
                sink.set_cell(slot, Column::Position, "");
            }
            GuessOutcome::TransportFailure(detail) => {
                warn!(slot = %slot, guess = task.guess(), %detail, "guess request failed");
                sink.set_cell(slot, Column::Letters, FAILURE_MESSAGE);
                sink.set_cell(slot, Column::Position, "");
            }
        }
    }

    /// Switches to a new puzzle. Malformed or non-positive id text is
    /// resolved into a random id rather than rejected. Every outstanding
    /// task is cancelled (flag only; the in-flight call runs to completion
    /// and its result is discarded at the join point) and the grid is
    /// reset to the default empty state.
    pub fn set_puzzle(&mut self, id_text: &str, sink: &mut dyn DisplaySink) {
        let puzzle = PuzzleId::resolve(id_text);
        let outstanding = self.session.live_count();
        if outstanding > 0 {
            info!(outstanding, "cancelling in-flight guesses for puzzle change");
        }
        self.session.replace_puzzle(puzzle);

        sink.reset_grid(self.default_rows);
        sink.set_puzzle_label(&format!("Puzzle #{puzzle}"));
        sink.clear_input_field();
        debug!(puzzle = %puzzle, "switched puzzle");
    }
}
