use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vitai_types::OutputPaths;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Tab-separated file handed to Anki's import
    pub cards_file: PathBuf,
    /// Directory receiving `<word>.mp3` clips
    pub audio_dir: PathBuf,
}

impl OutputConfig {
    pub fn paths(&self) -> OutputPaths {
        OutputPaths {
            cards_file: self.cards_file.clone(),
            audio_dir: self.audio_dir.clone(),
        }
    }
}
