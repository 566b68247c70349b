use serde::{Deserialize, Serialize};

use crate::challenge_engine::{
    error::ChallengeResult,
    models::Card,
};

const DEFAULT_CATALOG_ROOT: &str = "/Cartes";
const DEFAULT_IMAGE_EXT: &str = "svg";

/// Where card artwork lives. Only used to build paths; nothing is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_catalog_root")]
    pub catalog_root: String,
    #[serde(default = "default_image_ext")]
    pub image_ext: String,
}

impl AssetConfig {
    /// `<catalog_root>/<suit dir>/<rank>.<image_ext>`
    pub fn asset_ref(&self, card: &Card) -> String {
        format!(
            "{}/{}/{}.{}",
            self.catalog_root.trim_end_matches('/'),
            card.suit.dir_name(),
            card.rank,
            self.image_ext
        )
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            catalog_root: default_catalog_root(),
            image_ext: default_image_ext(),
        }
    }
}

fn default_catalog_root() -> String {
    DEFAULT_CATALOG_ROOT.to_string()
}

fn default_image_ext() -> String {
    DEFAULT_IMAGE_EXT.to_string()
}

/// Settings for a [`ChallengeSession`](crate::ChallengeSession) or a one-shot
/// [`generate_challenge`](crate::generate_challenge) call.
///
/// Every field has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed seed for reproducible challenges; `None` draws from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub assets: AssetConfig,
}

impl SessionConfig {
    /// Default assets with a fixed RNG seed.
    pub fn seeded(seed: u64) -> Self {
        SessionConfig { rng_seed: Some(seed), ..Self::default() }
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(text: &str) -> ChallengeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
