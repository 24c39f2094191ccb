use std::path::PathBuf;

use clap::Parser;
use vitai_config::DEFAULT_CONFIG_FILE;

/// Turn a vocabulary list into an Anki import file with pronunciation clips
#[derive(Debug, Parser)]
#[command(name = "vitai", version)]
pub struct Cli {
    /// Text file with one word per line
    pub input: PathBuf,

    /// Config file location
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
