//! Browser binding. Built with `--features wasm`; the page drives it with
//! two calls (`generate`, `select`) and re-renders from `state()`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::challenge_engine::{
    error::ChallengeError,
    models::Feedback,
    session::ChallengeSession,
    config::SessionConfig,
};
use crate::client_adapter::{button_label, feedback_message, to_client_state};

fn to_js_error(err: ChallengeError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// The puzzle widget as seen from JavaScript.
#[wasm_bindgen]
pub struct SequencePicker {
    session: ChallengeSession,
}

#[wasm_bindgen]
impl SequencePicker {
    /// `seed` makes the challenge stream reproducible.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> SequencePicker {
        let config = SessionConfig { rng_seed: seed, ..SessionConfig::default() };
        SequencePicker { session: ChallengeSession::new(config) }
    }

    /// Start button / regenerate button.
    pub fn generate(&mut self) -> Result<(), JsValue> {
        self.session.new_challenge().map(|_| ()).map_err(to_js_error)
    }

    /// Option click. Returns `"correct"`, `"incorrect"`, or `"none"` when no
    /// challenge is showing yet (the click is ignored).
    pub fn select(&mut self, index: usize) -> Result<String, JsValue> {
        match self.session.select_option(index) {
            Ok(feedback) => Ok(feedback.to_string()),
            Err(ChallengeError::IllegalState(_)) => Ok(Feedback::None.to_string()),
            Err(err) => Err(to_js_error(err)),
        }
    }

    /// Full widget state as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        to_client_state(&self.session)
            .serialize(&serializer)
            .map_err(JsValue::from)
    }

    /// Banner text for the last click, if any.
    pub fn message(&self) -> Option<String> {
        feedback_message(self.session.feedback()).map(str::to_string)
    }

    /// Start or regenerate, depending on whether a challenge exists.
    #[wasm_bindgen(js_name = buttonLabel)]
    pub fn button_label(&self) -> String {
        button_label(self.session.is_started()).to_string()
    }
}
