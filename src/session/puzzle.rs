use rand::Rng;
use std::fmt;

/// Identifier of one server-side puzzle instance. Always positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PuzzleId(u32);

impl PuzzleId {
    /// Resolves user-supplied puzzle-id text into a valid id.
    ///
    /// Text that is not entirely decimal digits, parses to zero, or
    /// overflows is replaced by a freshly generated random id; anything
    /// else is used as-is. Malformed input is never rejected.
    pub fn resolve(text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = text.parse::<u32>() {
                if value > 0 {
                    return Self(value);
                }
            }
        }
        Self::random()
    }

    /// Generates a random id in `[1, 10000)`.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(1..10_000))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
