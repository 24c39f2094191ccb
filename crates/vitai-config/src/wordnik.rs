use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable that takes precedence over `wordnik.api_key`
pub const API_KEY_ENV: &str = "WORDNIK_API_KEY";

fn default_api_url() -> String {
    "https://api.wordnik.com/v4".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordnikConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Prefix of pronunciation clip URLs, the word and ".mp3" get appended
    pub audio_url: String,
}

impl WordnikConfig {
    /// Replace the api key with `WORDNIK_API_KEY` when it is set
    pub fn apply_env(&mut self) {
        if let Some(key) = env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()) {
            tracing::debug!("Using api key from {API_KEY_ENV}");
            self.api_key = key;
        }
    }
}
