mod audio;
mod wordnik;


pub use audio::{HttpAudioFetcher, audio_link};
pub use wordnik::{Limits, WordnikClient};

use vitai_types::{Audio, LookupOutcome};

/// Word lookup provider interface
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Resolve a word to its canonical form, definitions and examples.
    ///
    /// A word that resolves but has no definitions is `NotFound`.
    async fn lookup(&self, word: &str) -> Result<LookupOutcome, DictionaryError>;
}

/// Pronunciation clip provider interface
#[async_trait::async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Any non-200 answer is `Audio::Absent`, not an error
    async fn fetch_audio(&self, canonical: &str) -> Result<Audio, DictionaryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: HTTP {status} from {url}")]
    Api { status: u16, url: String },

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error, check the api key")]
    Unauthorized,

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
