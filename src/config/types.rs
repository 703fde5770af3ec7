use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the scoring endpoint.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Minimum number of rows the empty guess table shows.
    #[serde(default = "default_rows")]
    pub default_rows: usize,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Config {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_rows: default_rows(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_server_url() -> String {
    "http://courses.csail.mit.edu/6.005/jotto.py".to_string()
}

fn default_rows() -> usize {
    10
}

fn default_connect_timeout() -> u32 {
    10
}
