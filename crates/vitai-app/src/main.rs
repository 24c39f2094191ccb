use std::io;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use vitai_anki::CardsFile;
use vitai_config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
use vitai_dictionary::{HttpAudioFetcher, Limits, WordnikClient};

pub mod cli;
pub mod driver;
pub mod vocab;


use self::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage problems print and exit quietly
            let _ = e.print();
            return;
        }
    };

    // .env may carry RUST_LOG
    dotenvy::dotenv().ok();
    init_tracing(cli.log_json);

    if let Err(e) = start(cli).await {
        tracing::error!("{e:#}");
        eprintln!("{e:#}");
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "vitai=info,vitai_config=info,vitai_dictionary=info,vitai_anki=info".into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(io::stderr)))
        .init();
}

fn missing_config_notice(path: &Path) -> String {
    if path == Path::new(DEFAULT_CONFIG_FILE) {
        format!("Please put the '{DEFAULT_CONFIG_FILE}' file in the working directory (or pass --config).")
    } else {
        format!("Config file '{}' not found.", path.display())
    }
}

async fn start(cli: Cli) -> anyhow::Result<()> {
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(ConfigError::NotFound(path)) => {
            println!("{}", missing_config_notice(&path));
            return Ok(());
        }
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let words = vocab::read_vocabulary(&cli.input)?;

    let dictionary = WordnikClient::new(
        config.wordnik.api_key.clone(),
        config.wordnik.api_url.clone(),
        Limits {
            max_definitions: config.limits.max_definitions,
            max_examples: config.limits.max_examples,
        },
    );
    let audio = HttpAudioFetcher::new(config.wordnik.audio_url.clone());
    let cards = CardsFile::new(config.output.paths());

    let mut stdout = io::stdout().lock();
    driver::run(&words, &dictionary, &audio, &cards, &mut stdout).await;

    Ok(())
}
