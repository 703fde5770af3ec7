//! In-memory state for one puzzle session: the active puzzle id, the slot
//! counter, and the registry of in-flight guess tasks.

pub mod outcome;
pub mod puzzle;
pub mod task;

use std::fmt;
use std::sync::Arc;

use crate::session::puzzle::PuzzleId;
use crate::session::task::GuessTask;

/// Stable row identifier assigned to one guess at submission time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Slot(usize);

impl Slot {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session state, owned exclusively by the controller and mutated only on
/// the event-loop thread.
pub struct Session {
    current_puzzle: PuzzleId,
    next_slot: usize,
    live_tasks: Vec<Arc<GuessTask>>,
}

impl Session {
    pub fn new(puzzle: PuzzleId) -> Self {
        Self {
            current_puzzle: puzzle,
            next_slot: 0,
            live_tasks: Vec::new(),
        }
    }

    pub fn current_puzzle(&self) -> PuzzleId {
        self.current_puzzle
    }

    /// Hands out the next slot. Strictly increasing from zero until the
    /// puzzle is replaced.
    pub fn allocate_slot(&mut self) -> Slot {
        let slot = Slot::new(self.next_slot);
        self.next_slot += 1;
        slot
    }

    pub fn register(&mut self, task: Arc<GuessTask>) {
        self.live_tasks.push(task);
    }

    /// Drops one completed task from the registry. Matching is by task
    /// identity, not slot: slot numbers restart at zero on every puzzle
    /// change, so a stale completion from an old puzzle must not evict a
    /// new task that happens to reuse its slot number. Tolerates tasks
    /// that were already retired.
    pub fn retire(&mut self, task: &GuessTask) {
        self.live_tasks
            .retain(|live| !std::ptr::eq(Arc::as_ptr(live), task));
    }

    pub fn live_count(&self) -> usize {
        self.live_tasks.len()
    }

    /// Switches to a new puzzle: cancels every live task, clears the
    /// registry, and restarts slot numbering at zero.
    pub fn replace_puzzle(&mut self, puzzle: PuzzleId) {
        for task in &self.live_tasks {
            task.cancel();
        }
        self.live_tasks.clear();
        self.next_slot = 0;
        self.current_puzzle = puzzle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(session: &mut Session, guess: &str) -> Arc<GuessTask> {
        let slot = session.allocate_slot();
        let task = Arc::new(GuessTask::new(
            guess.to_string(),
            slot,
            session.current_puzzle(),
        ));
        session.register(Arc::clone(&task));
        task
    }

    #[test]
    fn slots_increase_from_zero() {
        let mut session = Session::new(PuzzleId::resolve("42"));
        assert_eq!(session.allocate_slot().index(), 0);
        assert_eq!(session.allocate_slot().index(), 1);
        assert_eq!(session.allocate_slot().index(), 2);
    }

    #[test]
    fn replace_puzzle_resets_slot_numbering() {
        let mut session = Session::new(PuzzleId::resolve("42"));
        session.allocate_slot();
        session.allocate_slot();
        session.replace_puzzle(PuzzleId::resolve("7"));
        assert_eq!(session.current_puzzle().value(), 7);
        assert_eq!(session.allocate_slot().index(), 0);
    }

    #[test]
    fn replace_puzzle_cancels_and_clears_live_tasks() {
        let mut session = Session::new(PuzzleId::resolve("42"));
        let first = task(&mut session, "crane");
        let second = task(&mut session, "slate");
        assert_eq!(session.live_count(), 2);

        session.replace_puzzle(PuzzleId::resolve("7"));
        assert_eq!(session.live_count(), 0);
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }

    #[test]
    fn retire_removes_only_the_completed_task() {
        let mut session = Session::new(PuzzleId::resolve("42"));
        let first = task(&mut session, "crane");
        let _second = task(&mut session, "slate");

        session.retire(&first);
        assert_eq!(session.live_count(), 1);

        // Retiring the same task again is a no-op.
        session.retire(&first);
        assert_eq!(session.live_count(), 1);
    }

    #[test]
    fn stale_task_does_not_evict_a_new_task_sharing_its_slot() {
        let mut session = Session::new(PuzzleId::resolve("42"));
        let stale = task(&mut session, "aaaaa");

        session.replace_puzzle(PuzzleId::resolve("7"));
        let fresh = task(&mut session, "bbbbb");
        assert_eq!(stale.slot(), fresh.slot());

        // The old puzzle's completion arrives after the reset.
        session.retire(&stale);
        assert_eq!(session.live_count(), 1);

        session.retire(&fresh);
        assert_eq!(session.live_count(), 0);
    }
}
