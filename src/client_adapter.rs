use serde_json::{json, Value};

use crate::challenge_engine::{
    config::AssetConfig,
    models::{Card, Challenge, Feedback},
    session::ChallengeSession,
    random::RandomSource,
};

pub const MESSAGE_CORRECT: &str = "Correct! Vous avez sélectionné le bon nombre.";
pub const MESSAGE_INCORRECT: &str = "Mauvais choix. Réessayez !";
pub const LABEL_START: &str = "Commencer la vérification";
pub const LABEL_REGENERATE: &str = "Générer une nouvelle séquence";

/// Banner text for a feedback value; `None` shows no banner.
pub fn feedback_message(feedback: Feedback) -> Option<&'static str> {
    match feedback {
        Feedback::None      => None,
        Feedback::Correct   => Some(MESSAGE_CORRECT),
        Feedback::Incorrect => Some(MESSAGE_INCORRECT),
    }
}

/// Label of the start / regenerate button.
pub fn button_label(started: bool) -> &'static str {
    if started { LABEL_REGENERATE } else { LABEL_START }
}

/// `{num, sign, url}` for one card.
fn client_card(card: &Card, assets: &AssetConfig) -> Value {
    json!({
        "num": card.rank.value(),
        "sign": card.suit.dir_name(),
        "url": assets.asset_ref(card),
    })
}

/// Sequence slots as shown to the user: a card object, or `null` for the blank.
fn sequence_json(challenge: &Challenge, assets: &AssetConfig) -> Value {
    let slots = challenge
        .sequence
        .iter()
        .map(|slot| slot.as_ref().map_or(Value::Null, |c| client_card(c, assets)))
        .collect();
    Value::Array(slots)
}

fn options_json(challenge: &Challenge, assets: &AssetConfig) -> Value {
    let options = challenge
        .options
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let mut entry = client_card(c, assets);
            entry["id"] = json!(i);
            entry
        })
        .collect();
    Value::Array(options)
}

/// JSON view of one challenge for a browser client.
///
/// The missing card and its slot index are deliberately left out.
pub fn challenge_to_client(challenge: &Challenge, feedback: Feedback, assets: &AssetConfig) -> Value {
    json!({
        "challenge_id": challenge.challenge_id,
        "sequence": sequence_json(challenge, assets),
        "options": options_json(challenge, assets),
        "feedback": feedback,
        "message": feedback_message(feedback),
    })
}

/// Whole-widget state: button label plus the current challenge, if any.
pub fn to_client_state<S: RandomSource>(session: &ChallengeSession<S>) -> Value {
    let started = session.is_started();
    let challenge = session
        .challenge()
        .map(|c| challenge_to_client(c, session.feedback(), session.assets()));
    json!({
        "started": started,
        "button_label": button_label(started),
        "challenge": challenge,
    })
}
