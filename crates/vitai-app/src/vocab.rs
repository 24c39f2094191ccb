use std::fs;
use std::path::Path;

use anyhow::Context;

/// Trimmed, non-blank lines in file order
pub fn parse_vocabulary(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn read_vocabulary(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words = parse_vocabulary(&text);
    tracing::info!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}
