//! The owned puzzle state a presentation layer holds between clicks.
//!
//! ```text
//! NotStarted --new_challenge()--> InProgress --new_challenge()--> InProgress ...
//! ```
//!
//! There is no terminal state. Each `new_challenge` replaces the previous
//! challenge outright and clears any feedback.

use std::fmt;

use rand::rngs::StdRng;
use tracing::warn;

use crate::challenge_engine::{
    config::{AssetConfig, SessionConfig},
    error::{ChallengeError, ChallengeResult},
    generator::{generate_challenge_with, rng_for},
    models::{Card, Challenge, Feedback, SessionState, OPTION_COUNT},
    random::RandomSource,
};

/// Owns the current challenge, its feedback, and the random source.
pub struct ChallengeSession<S: RandomSource = StdRng> {
    source: S,
    assets: AssetConfig,
    current: Option<Challenge>,
    feedback: Feedback,
}

impl ChallengeSession<StdRng> {
    /// Session backed by `StdRng`, seeded from `config.rng_seed` or OS entropy.
    pub fn new(config: SessionConfig) -> Self {
        let source = rng_for(&config);
        ChallengeSession::with_source(source, config.assets)
    }
}

impl Default for ChallengeSession<StdRng> {
    fn default() -> Self {
        ChallengeSession::new(SessionConfig::default())
    }
}

impl<S: RandomSource> ChallengeSession<S> {
    /// Session drawing from a caller-supplied source (scripted sources in tests).
    pub fn with_source(source: S, assets: AssetConfig) -> Self {
        ChallengeSession {
            source,
            assets,
            current: None,
            feedback: Feedback::None,
        }
    }

    /// `InProgress` once the first challenge exists.
    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::InProgress
        } else {
            SessionState::NotStarted
        }
    }

    /// True after the first `new_challenge`; drives the button label.
    pub fn is_started(&self) -> bool {
        self.state() == SessionState::InProgress
    }

    /// Read-only view of the current challenge.
    pub fn challenge(&self) -> Option<&Challenge> {
        self.current.as_ref()
    }

    /// Feedback from the last `select`, reset by `new_challenge`.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Asset settings used to build card paths for clients.
    pub fn assets(&self) -> &AssetConfig {
        &self.assets
    }

    /// Replace the current challenge with a fresh one and reset feedback.
    ///
    /// On failure the previous challenge is left in place.
    pub fn new_challenge(&mut self) -> ChallengeResult<&Challenge> {
        let challenge = generate_challenge_with(&mut self.source)?;
        self.feedback = Feedback::None;
        Ok(&*self.current.insert(challenge))
    }

    /// Judge `selected` against the current challenge without touching the session.
    pub fn evaluate(&self, selected: &Card) -> ChallengeResult<Feedback> {
        Ok(self.active(selected)?.evaluate(selected))
    }

    /// The current challenge, or `IllegalState` (logged) when there is none yet.
    fn active(&self, attempted: &dyn fmt::Display) -> ChallengeResult<&Challenge> {
        self.current.as_ref().ok_or_else(|| {
            warn!(%attempted, "answer evaluated before any challenge");
            ChallengeError::IllegalState("no challenge has been generated yet".into())
        })
    }

    /// Like [`evaluate`](Self::evaluate), but also remembers the result.
    pub fn select(&mut self, selected: &Card) -> ChallengeResult<Feedback> {
        let feedback = self.evaluate(selected)?;
        self.feedback = feedback;
        Ok(feedback)
    }

    /// Select the option shown at position `index`.
    pub fn select_option(&mut self, index: usize) -> ChallengeResult<Feedback> {
        let challenge = self.active(&format_args!("option {index}"))?;
        let selected = *challenge.options.get(index).ok_or_else(|| {
            ChallengeError::InvalidArgument(format!("option index {index} outside 0..{OPTION_COUNT}"))
        })?;
        self.select(&selected)
    }
}
