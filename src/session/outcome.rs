//! Interpretation of raw response lines from the scoring service.

/// The interpreted result of one guess.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The guess matched the secret word exactly.
    Win,
    /// Letter and position match counts for a non-winning guess.
    Scored { letters: u32, positions: u32 },
    /// The service considered the request malformed (`error 0:`).
    FormatError,
    /// The guess was rejected by the service's dictionary (`error 2:`).
    DictionaryError,
    /// The task was cancelled before its result could be published.
    Cancelled,
    /// Transport failure or a response line the client does not recognize.
    TransportFailure(String),
}

/// Maps one raw response line to an outcome. Total: anything outside the
/// recognized shapes becomes a `TransportFailure` rather than being
/// silently ignored.
pub fn interpret(raw: &str) -> GuessOutcome {
    let line = raw.trim();

    if let Some(rest) = line.strip_prefix("guess ") {
        if let Some((letters, positions)) = parse_counts(rest) {
            if letters == 5 && positions == 5 {
                return GuessOutcome::Win;
            }
            return GuessOutcome::Scored { letters, positions };
        }
    }

    if line.starts_with("error 0:") {
        return GuessOutcome::FormatError;
    }
    if line.starts_with("error 2:") {
        return GuessOutcome::DictionaryError;
    }

    GuessOutcome::TransportFailure(format!("unrecognized response: {line:?}"))
}

fn parse_counts(rest: &str) -> Option<(u32, u32)> {
    let mut parts = rest.split_whitespace();
    let letters = parts.next()?.parse().ok()?;
    let positions = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((letters, positions))
}
