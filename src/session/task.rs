use std::sync::atomic::{AtomicBool, Ordering};

use crate::session::puzzle::PuzzleId;
use crate::session::Slot;

/// One dispatched guess awaiting its server response.
///
/// Shared between the controller's live-task registry and the spawned
/// network task. Immutable except for the cancellation flag, which only
/// ever transitions false to true.
#[derive(Debug)]
pub struct GuessTask {
    guess: String,
    slot: Slot,
    puzzle: PuzzleId,
    cancelled: AtomicBool,
}

impl GuessTask {
    pub fn new(guess: String, slot: Slot, puzzle: PuzzleId) -> Self {
        Self {
            guess,
            slot,
            puzzle,
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Puzzle id captured at submission time.
    pub fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }

    /// Marks the eventual result as to-be-discarded. The underlying call
    /// is not aborted; the flag is read once at the publication point.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_one_way() {
        let task = GuessTask::new("crane".to_string(), Slot::new(0), PuzzleId::resolve("42"));
        assert!(!task.is_cancelled());
        task.cancel();
        assert!(task.is_cancelled());
        task.cancel();
        assert!(task.is_cancelled());
    }
}
