//! Terminal walk-through of the sequence puzzle.
//!
//! Run with: `cargo run --example demo`
//! (`RUST_LOG=sequence_picker=debug` shows the engine's own log lines.)
//!
//! 1. **Seeded session**: three challenges from a fixed seed, each answered
//!    once correctly and once with a wrong option.
//! 2. **Client view**: the JSON a browser page would render, with the
//!    answer stripped out.
//! 3. **Early click**: evaluating before any challenge exists.

use sequence_picker::{
    client_adapter::{button_label, feedback_message},
    to_client_state, Challenge, ChallengeSession, Feedback, SessionConfig,
};
use tracing_subscriber::EnvFilter;

/// Print the run with `?` for the blank, then the numbered options.
fn print_challenge(challenge: &Challenge) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Challenge {}", challenge.challenge_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let row: Vec<String> = challenge
        .sequence
        .iter()
        .map(|slot| match slot {
            Some(card) => format!("[{:>8}]", card.to_string()),
            None       => format!("[{:>8}]", "?"),
        })
        .collect();
    println!("  Sequence: {}", row.join(" "));
    for (i, option) in challenge.options.iter().enumerate() {
        println!("    ({i}) {option}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // ── Seeded session ──────────────────────────────────────────────────────
    let mut session = ChallengeSession::new(SessionConfig::seeded(2024));
    println!();
    println!("══ Button: {} ══", button_label(session.is_started()));

    for _ in 0..3 {
        let challenge = match session.new_challenge() {
            Ok(c) => c.clone(),
            Err(err) => {
                eprintln!("generation failed: {err}");
                return;
            }
        };
        print_challenge(&challenge);

        for (i, option) in challenge.options.iter().enumerate() {
            let Ok(feedback) = session.select_option(i) else { continue };
            let marker = if feedback == Feedback::Correct { "✓" } else { " " };
            println!("  [{marker}] pick ({i}) {option}: {}", feedback_message(feedback).unwrap_or(""));
        }
        println!();
    }
    println!("══ Button: {} ══", button_label(session.is_started()));

    // ── Client view ─────────────────────────────────────────────────────────
    println!();
    println!("══ Client JSON ══");
    match serde_json::to_string_pretty(&to_client_state(&session)) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("could not render client state: {err}"),
    }

    // ── Early click ─────────────────────────────────────────────────────────
    println!();
    println!("══ Click before any challenge ══");
    let fresh = ChallengeSession::new(SessionConfig::seeded(1));
    let probe = session.challenge().map(|c| c.options[0]);
    if let Some(card) = probe {
        match fresh.evaluate(&card) {
            Ok(feedback) => println!("  unexpected feedback: {feedback}"),
            Err(err) => println!("  rejected: {err}"),
        }
    }
}
