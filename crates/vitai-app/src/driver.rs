use std::io::Write;

use vitai_anki::{CardsFile, WriteError};
use vitai_dictionary::{AudioFetcher, Dictionary, DictionaryError};
use vitai_types::{Audio, Card, LookupOutcome};

/// What happened to one word of the list
#[derive(Debug)]
pub enum WordOutcome {
    Written,
    NotFound,
    LookupFailed(DictionaryError),
    WriteFailed(WriteError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub not_found: Vec<String>,
    pub failed: Vec<String>,
}

/// Look up, fetch and write every word in order.
///
/// Nothing here aborts the run: misses and failures skip the word. The header
/// goes out with the first card that is actually written.
pub async fn run(
    words: &[String],
    dictionary: &dyn Dictionary,
    audio: &dyn AudioFetcher,
    cards: &CardsFile,
    out: &mut dyn Write,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut first = true;

    for word in words {
        match process_word(word, dictionary, audio, cards, first).await {
            WordOutcome::Written => {
                first = false;
                summary.written += 1;
            }
            WordOutcome::NotFound => {
                notice(out, &format!("Unable to find '{word}'."));
                summary.not_found.push(word.clone());
            }
            WordOutcome::LookupFailed(e) => {
                tracing::warn!("Lookup failed for '{}': {}", word, e);
                notice(out, &format!("Unable to look up '{word}': {e}"));
                summary.failed.push(word.clone());
            }
            WordOutcome::WriteFailed(e) => {
                tracing::error!("Failed to write card for '{}': {}", word, e);
                notice(out, &format!("Unable to save '{word}': {e}"));
                summary.failed.push(word.clone());
            }
        }
    }

    if !summary.not_found.is_empty() {
        notice(
            out,
            &format!(
                "The following words couldn't be found:\n{}",
                summary.not_found.join("\n")
            ),
        );
    }

    tracing::info!(
        "Done: {} written, {} not found, {} failed",
        summary.written,
        summary.not_found.len(),
        summary.failed.len()
    );

    summary
}

pub async fn process_word(
    word: &str,
    dictionary: &dyn Dictionary,
    audio: &dyn AudioFetcher,
    cards: &CardsFile,
    first: bool,
) -> WordOutcome {
    let entry = match dictionary.lookup(word).await {
        Ok(LookupOutcome::Found(entry)) => entry,
        Ok(LookupOutcome::NotFound) => return WordOutcome::NotFound,
        Err(e) => return WordOutcome::LookupFailed(e),
    };

    let clip = match audio.fetch_audio(&entry.word).await {
        Ok(clip) => clip,
        Err(e) => {
            tracing::warn!("Audio fetch failed for '{}': {}", entry.word, e);
            Audio::Absent
        }
    };

    let card = Card::new(entry, clip);
    match cards.write(&card, first) {
        Ok(()) => {
            tracing::info!("Added card for '{}'", card.word);
            WordOutcome::Written
        }
        Err(e) => WordOutcome::WriteFailed(e),
    }
}

fn notice(out: &mut dyn Write, message: &str) {
    if let Err(e) = writeln!(out, "{message}") {
        tracing::error!("Failed to print notice: {}", e);
    }
}
