use async_trait::async_trait;
use reqwest::StatusCode;
use vitai_types::Audio;

use crate::{AudioFetcher, DictionaryError};

/// Full URL of the pronunciation clip for `word`
pub fn audio_link(audio_url: &str, word: &str) -> String {
    format!("{audio_url}{word}.mp3")
}

/// Downloads `<audio_url><word>.mp3`
#[derive(Clone)]
pub struct HttpAudioFetcher {
    client: reqwest::Client,
    audio_url: String,
}

impl HttpAudioFetcher {
    pub fn new(audio_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), audio_url)
    }

    pub fn with_client(client: reqwest::Client, audio_url: String) -> Self {
        Self { client, audio_url }
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch_audio(&self, canonical: &str) -> Result<Audio, DictionaryError> {
        let url = audio_link(&self.audio_url, canonical);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            tracing::debug!("No audio for '{}' (HTTP {})", canonical, response.status());
            return Ok(Audio::Absent);
        }

        let bytes = response.bytes().await?;
        Ok(Audio::Present(bytes.to_vec()))
    }
}
