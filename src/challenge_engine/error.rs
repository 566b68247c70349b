use thiserror::Error;

/// Every failure the challenge engine can report.
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// A utility was handed input it cannot work with (empty slice, bad rank, bad index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not allowed in the session's current state.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// The catalog no longer supports generation, e.g. too few distinct ranks.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type ChallengeResult<T> = Result<T, ChallengeError>;
