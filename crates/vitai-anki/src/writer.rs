use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use vitai_types::{Card, OutputPaths};

use crate::template::{CARDS_HEADER, audio_file_name, format_row};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl WriteError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> WriteError + '_ {
        move |source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Anki import file plus its audio directory.
///
/// The cards file is reopened for every row so rows already written survive
/// an interrupted run.
#[derive(Debug, Clone)]
pub struct CardsFile {
    paths: OutputPaths,
}

impl CardsFile {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    /// Where the clip for `word` is saved
    pub fn audio_path(&self, word: &str) -> PathBuf {
        self.paths.audio_dir.join(audio_file_name(word))
    }

    /// Write one card. `first` truncates the file and writes the header.
    pub fn write(&self, card: &Card, first: bool) -> Result<(), WriteError> {
        if let Some(bytes) = card.audio.bytes() {
            self.write_audio(&card.word, bytes)?;
        }

        let cards_file = &self.paths.cards_file;
        if first {
            tracing::info!("Starting cards file {}", cards_file.display());
            fs::write(cards_file, format!("{CARDS_HEADER}\n")).map_err(WriteError::io(cards_file))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(cards_file)
            .map_err(WriteError::io(cards_file))?;
        writeln!(file, "{}", format_row(card)).map_err(WriteError::io(cards_file))?;

        tracing::debug!("Wrote card for '{}'", card.word);
        Ok(())
    }

    fn write_audio(&self, word: &str, bytes: &[u8]) -> Result<(), WriteError> {
        let audio_dir = &self.paths.audio_dir;
        fs::create_dir_all(audio_dir).map_err(WriteError::io(audio_dir))?;

        let path = self.audio_path(word);
        fs::write(&path, bytes).map_err(WriteError::io(&path))?;
        tracing::debug!("Saved audio to {}", path.display());
        Ok(())
    }
}
