//! Shared test doubles: a recording display sink and a scripted service.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use jotto::controller::GuessController;
use jotto::display::{Column, DisplaySink};
use jotto::service::{GuessService, ServiceError};
use jotto::session::puzzle::PuzzleId;
use jotto::session::task::GuessTask;
use jotto::session::Slot;
use jotto::ui::events::AppEvent;

/// One recorded sink mutation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SinkCall {
    SetCell {
        slot: usize,
        column: Column,
        value: String,
    },
    EnsureRowCount(usize),
    ResetGrid(usize),
    SetPuzzleLabel(String),
    ClearInputField,
}

/// Display sink that records every call for assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Last value written to (slot, column), if any.
    pub fn cell(&self, slot: usize, column: Column) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::SetCell {
                slot: s,
                column: c,
                value,
            } if *s == slot && *c == column => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn wrote_to_slot(&self, slot: usize) -> bool {
        self.calls
            .iter()
            .any(|call| matches!(call, SinkCall::SetCell { slot: s, .. } if *s == slot))
    }
}

impl DisplaySink for RecordingSink {
    fn set_cell(&mut self, slot: Slot, column: Column, value: &str) {
        self.calls.push(SinkCall::SetCell {
            slot: slot.index(),
            column,
            value: value.to_string(),
        });
    }

    fn ensure_row_count(&mut self, rows: usize) {
        self.calls.push(SinkCall::EnsureRowCount(rows));
    }

    fn reset_grid(&mut self, default_rows: usize) {
        self.calls.push(SinkCall::ResetGrid(default_rows));
    }

    fn set_puzzle_label(&mut self, text: &str) {
        self.calls.push(SinkCall::SetPuzzleLabel(text.to_string()));
    }

    fn clear_input_field(&mut self) {
        self.calls.push(SinkCall::ClearInputField);
    }
}

/// A scripted reply for one guess word.
#[derive(Clone, Debug)]
pub enum StubReply {
    Line(&'static str),
    Fail,
}

struct ScriptedReply {
    reply: StubReply,
    delay: Duration,
}

/// Guess service with canned per-word responses and optional delays, so
/// tests can force completions to arrive out of submission order.
#[derive(Default)]
pub struct StubService {
    replies: Mutex<HashMap<String, ScriptedReply>>,
}

impl StubService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, guess: &str, reply: StubReply) -> Self {
        self.reply_after(guess, reply, Duration::ZERO)
    }

    pub fn reply_after(self, guess: &str, reply: StubReply, delay: Duration) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(guess.to_string(), ScriptedReply { reply, delay });
        self
    }
}

#[async_trait]
impl GuessService for StubService {
    async fn request(&self, _puzzle: PuzzleId, guess: &str) -> Result<String, ServiceError> {
        let scripted = {
            let replies = self.replies.lock().unwrap();
            replies.get(guess).map(|s| (s.reply.clone(), s.delay))
        };
        let Some((reply, delay)) = scripted else {
            panic!("no scripted reply for guess {guess:?}");
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match reply {
            StubReply::Line(line) => Ok(line.to_string()),
            StubReply::Fail => Err(ServiceError::EmptyResponse),
        }
    }
}

/// Builds a controller wired to the given service and a receiver for its
/// completion events.
pub fn controller_with(
    service: Arc<dyn GuessService>,
    default_rows: usize,
) -> (GuessController, Receiver<AppEvent>, Sender<AppEvent>) {
    let (tx, rx) = std::sync::mpsc::channel();
    let controller = GuessController::new(
        service,
        tokio::runtime::Handle::current(),
        tx.clone(),
        default_rows,
    );
    (controller, rx, tx)
}

/// Waits for the next completion event, skipping over anything else.
pub fn next_completion(
    rx: &Receiver<AppEvent>,
    timeout: Duration,
) -> (Arc<GuessTask>, Result<String, ServiceError>) {
    let deadline = std::time::Instant::now() + timeout;
    loop {
        let remaining = deadline
            .checked_duration_since(std::time::Instant::now())
            .unwrap_or(Duration::ZERO);
        match rx.recv_timeout(remaining) {
            Ok(AppEvent::GuessCompleted { task, result }) => return (task, result),
            Ok(_) => continue,
            Err(RecvTimeoutError::Timeout) => panic!("timed out waiting for a guess completion"),
            Err(RecvTimeoutError::Disconnected) => panic!("event channel closed"),
        }
    }
}
