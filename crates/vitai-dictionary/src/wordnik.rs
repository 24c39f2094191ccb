use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use vitai_types::{LookupOutcome, WordEntry};

use crate::{Dictionary, DictionaryError};

/// How many definitions and examples to request per word
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_definitions: u32,
    /// Zero skips the examples request entirely
    pub max_examples: u32,
}

/// Client for the Wordnik v4 word API
#[derive(Clone)]
pub struct WordnikClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    limits: Limits,
}

#[derive(Debug, Deserialize)]
struct WordJson {
    word: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DefinitionJson {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExampleSearchJson {
    #[serde(default)]
    examples: Vec<ExampleJson>,
}

#[derive(Debug, Deserialize)]
struct ExampleJson {
    text: Option<String>,
}

impl WordnikClient {
    pub fn new(api_key: String, api_url: String, limits: Limits) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, api_url, limits)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_key: String,
        api_url: String,
        limits: Limits,
    ) -> Self {
        Self {
            client,
            api_key,
            api_url,
            limits,
        }
    }

    /// Canonical form of `word`, `None` when the service has no match
    pub async fn canonical_word(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        let url = word_endpoint(&self.api_url, word, None)?;
        let found: Option<WordJson> = self.get_json(url, &[("useCanonical", "true")]).await?;

        Ok(found
            .and_then(|w| w.word)
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty()))
    }

    pub async fn definitions(&self, canonical: &str) -> Result<Vec<String>, DictionaryError> {
        let url = word_endpoint(&self.api_url, canonical, Some("definitions"))?;
        let limit = self.limits.max_definitions.to_string();
        let found: Option<Vec<DefinitionJson>> = self
            .get_json(url, &[("limit", limit.as_str()), ("useCanonical", "false")])
            .await?;

        let texts = found
            .unwrap_or_default()
            .into_iter()
            .filter_map(|d| d.text);
        Ok(collect_texts(texts, self.limits.max_definitions))
    }

    /// `None` when examples are disabled or the service has none
    pub async fn examples(&self, canonical: &str) -> Result<Option<Vec<String>>, DictionaryError> {
        if self.limits.max_examples == 0 {
            return Ok(None);
        }

        let url = word_endpoint(&self.api_url, canonical, Some("examples"))?;
        let limit = self.limits.max_examples.to_string();
        let found: Option<ExampleSearchJson> = self.get_json(url, &[("limit", limit.as_str())]).await?;

        let texts = found
            .map(|search| search.examples)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| e.text);
        let examples = collect_texts(texts, self.limits.max_examples);

        Ok(if examples.is_empty() {
            None
        } else {
            Some(examples)
        })
    }

    /// GET a JSON document, mapping 404 to `None`
    async fn get_json<T>(&self, url: Url, params: &[(&str, &str)]) -> Result<Option<T>, DictionaryError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| DictionaryError::Network(e.without_url()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(status, &url)?;

        // Drop the url from errors, it carries the api key
        let body = response
            .text()
            .await
            .map_err(|e| DictionaryError::Network(e.without_url()))?;
        parse_body(&body).map(Some)
    }
}

#[async_trait]
impl Dictionary for WordnikClient {
    async fn lookup(&self, word: &str) -> Result<LookupOutcome, DictionaryError> {
        let Some(canonical) = self.canonical_word(word).await? else {
            tracing::debug!("No match for '{}'", word);
            return Ok(LookupOutcome::NotFound);
        };

        let definitions = self.definitions(&canonical).await?;
        if definitions.is_empty() {
            tracing::debug!("'{}' resolved to '{}' but has no definitions", word, canonical);
            return Ok(LookupOutcome::NotFound);
        }

        // Examples are optional, a failure here should not cost the card
        let examples = match self.examples(&canonical).await {
            Ok(examples) => examples,
            Err(e) => {
                tracing::warn!("Examples unavailable for '{}': {}", canonical, e);
                None
            }
        };

        Ok(LookupOutcome::Found(WordEntry {
            word: canonical,
            definitions,
            examples,
        }))
    }
}

/// `{api_url}/word.json/{word}[/{resource}]` with the word percent-encoded
pub(crate) fn word_endpoint(
    api_url: &str,
    word: &str,
    resource: Option<&str>,
) -> Result<Url, DictionaryError> {
    let mut url =
        Url::parse(api_url).map_err(|e| DictionaryError::InvalidUrl(format!("{api_url}: {e}")))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(api_url.to_string()))?;
        segments.pop_if_empty().push("word.json").push(word);
        if let Some(resource) = resource {
            segments.push(resource);
        }
    }

    Ok(url)
}

pub(crate) fn check_status(status: StatusCode, url: &Url) -> Result<(), DictionaryError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => Err(DictionaryError::RateLimited),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DictionaryError::Unauthorized),
        s => Err(DictionaryError::Api {
            status: s.as_u16(),
            url: url.as_str().to_string(),
        }),
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, DictionaryError> {
    serde_json::from_str(body)
        .map_err(|e| DictionaryError::Decode(format!("Failed to parse response: {}", e)))
}

/// Trimmed, non-blank texts, at most `limit` of them
fn collect_texts(texts: impl Iterator<Item = String>, limit: u32) -> Vec<String> {
    texts
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .take(limit as usize)
        .collect()
}
