//! The scoring-service seam: one async call per guess.

mod error;
mod http;

pub use error::ServiceError;
pub use http::HttpGuessService;

use async_trait::async_trait;

use crate::session::puzzle::PuzzleId;

/// Asynchronous client for the remote scoring endpoint.
///
/// Given a guess and a puzzle id, produces one raw response line or fails
/// with a transport error. Implementations must be safe to call from
/// multiple spawned tasks at once.
#[async_trait]
pub trait GuessService: Send + Sync {
    async fn request(&self, puzzle: PuzzleId, guess: &str) -> Result<String, ServiceError>;
}
