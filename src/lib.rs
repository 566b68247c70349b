//! # sequence_picker
//!
//! Logic core of an "I am not a robot" card puzzle.
//!
//! A deck of 32 illustrated cards (4 suits × ranks 1..=8) backs each
//! challenge: four cards in ascending rank order with one hidden, and four
//! candidate cards to choose from. Picking the card with the hidden rank
//! passes; suit never matters.
//!
//! ## How it works
//!
//! 1. Create a [`ChallengeSession`] from a [`SessionConfig`] (optional RNG
//!    seed, asset path settings).
//! 2. Call [`ChallengeSession::new_challenge`]: the engine draws a base rank,
//!    one distinct suit per position, blanks one slot, then builds the
//!    rank-distinct option set and shuffles it.
//! 3. Pass the user's pick to [`ChallengeSession::evaluate`] (pure) or
//!    [`ChallengeSession::select`] (also stores the [`Feedback`]).
//!
//! Rendering is not part of this crate. [`client_adapter`] turns the session
//! into JSON for a browser page, and the `wasm` feature exposes the same
//! thing through wasm-bindgen.
//!
//! ## Quick start
//!
//! ```rust
//! use sequence_picker::{ChallengeSession, Feedback, SessionConfig};
//!
//! let mut session = ChallengeSession::new(SessionConfig::seeded(42));
//! let challenge = session.new_challenge().unwrap().clone();
//!
//! for slot in &challenge.sequence {
//!     match slot {
//!         Some(card) => print!("[{card}] "),
//!         None => print!("[ ? ] "),
//!     }
//! }
//! println!();
//!
//! let pick = challenge.options[0];
//! match session.select(&pick).unwrap() {
//!     Feedback::Correct => println!("passed"),
//!     _ => println!("try again"),
//! }
//! ```

pub mod challenge_engine;
pub mod client_adapter;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use challenge_engine::{
    generate_challenge, AssetConfig, Card, Challenge, ChallengeError, ChallengeResult,
    ChallengeSession, Feedback, RandomSource, Rank, SessionConfig, SessionState, Slot, Suit,
};
pub use client_adapter::to_client_state;

#[cfg(test)]
mod tests;
