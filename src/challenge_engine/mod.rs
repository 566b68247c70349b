//! Core challenge engine: card catalog, random draws, and puzzle generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: suits, ranks, cards, challenges, feedback |
//! | `catalog`   | The fixed 32-card catalog and asset path derivation |
//! | `random`    | `RandomSource`, uniform pick and Fisher-Yates shuffle |
//! | `sequence`  | 4-card ascending run with one blank slot |
//! | `options`   | 4 answer cards: the missing one plus 3 rank-distinct distractors |
//! | `generator` | `generate_challenge()`: sequence + options + id in one call |
//! | `session`   | `ChallengeSession`: owned state between user clicks |
//! | `config`    | `SessionConfig` / `AssetConfig` |
//! | `error`     | `ChallengeError` |

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod options;
pub mod random;
pub mod sequence;
pub mod session;

pub use config::{AssetConfig, SessionConfig};
pub use error::{ChallengeError, ChallengeResult};
pub use generator::{generate_challenge, generate_challenge_with};
pub use models::{
    Card, Challenge, Feedback, Rank, SessionState, Slot, Suit, OPTION_COUNT, SEQUENCE_LEN,
};
pub use random::RandomSource;
pub use session::ChallengeSession;
