use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::service::error::ServiceError;
use crate::service::GuessService;
use crate::session::puzzle::PuzzleId;

/// HTTP client for the remote scoring endpoint.
///
/// One GET per guess: `{base_url}?puzzle={id}&guess={word}`. The service
/// answers with a single line of text; only the first line of the body is
/// kept. No total request timeout is imposed here — a slow response leaves
/// its row pending, and a puzzle change suppresses the eventual write.
pub struct HttpGuessService {
    client: Client,
    base_url: String,
}

impl HttpGuessService {
    pub fn new(base_url: String, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().connect_timeout(connect_timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn request_url(&self, puzzle: PuzzleId, guess: &str) -> String {
        format!("{}?puzzle={}&guess={}", self.base_url, puzzle, guess)
    }
}

#[async_trait]
impl GuessService for HttpGuessService {
    async fn request(&self, puzzle: PuzzleId, guess: &str) -> Result<String, ServiceError> {
        let response = self
            .client
            .get(self.request_url(puzzle, guess))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        body.lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .ok_or(ServiceError::EmptyResponse)
    }
}
