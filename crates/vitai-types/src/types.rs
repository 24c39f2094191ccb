use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the dictionary service knows about one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Canonical form reported by the service
    pub word: String,
    /// Never empty for a `LookupOutcome::Found`
    pub definitions: Vec<String>,
    /// `None` when the service had no usage examples
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(WordEntry),
    NotFound,
}

/// Pronunciation clip for a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audio {
    Present(Vec<u8>),
    Absent,
}

impl Audio {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Audio::Present(bytes) => Some(bytes),
            Audio::Absent => None,
        }
    }
}

/// One row of the cards file, plus its audio clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub word: String,
    pub definitions: Vec<String>,
    pub examples: Option<Vec<String>>,
    pub audio: Audio,
}

impl Card {
    pub fn new(entry: WordEntry, audio: Audio) -> Self {
        Self {
            word: entry.word,
            definitions: entry.definitions,
            examples: entry.examples,
            audio,
        }
    }
}

/// Where cards and audio clips end up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub cards_file: PathBuf,
    pub audio_dir: PathBuf,
}
