//! CLI command definitions and handlers

mod detect;
mod languages;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ngram_langid::{load_config, DetectorConfig};
use std::path::PathBuf;

/// langid - character n-gram language identification
#[derive(Parser, Debug)]
#[command(name = "langid")]
#[command(
    version,
    about = "Guess the language of a text from per-language n-gram frequency models",
    after_help = "\
Examples:
  langid detect \"the quick brown fox\"          Detect a single string
  cat mail.txt | langid detect --json          Detect stdin, JSON output
  langid --languages ./models languages        List loaded models"
)]
pub struct Cli {
    /// Config file with a [lang_detection] section (TOML or JSON)
    #[arg(long, short = 'c', global = true, env = "LANGID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of language model files (overrides the config file)
    #[arg(long = "languages", global = true, env = "LANGID_LANGUAGES")]
    pub languages_path: Option<PathBuf>,

    /// Word count below which texts are scored as short
    #[arg(long, global = true)]
    pub short_text_limit: Option<usize>,

    /// Fixed sampling seed for reproducible results on long texts
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of TEXT, or of stdin when TEXT is omitted
    Detect {
        /// Text to classify
        text: Option<String>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the loaded language models
    Languages,
}

impl Cli {
    /// Config file (if any) with command-line overrides applied
    fn detector_config(&self) -> Result<DetectorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DetectorConfig::default(),
        };

        if let Some(path) = &self.languages_path {
            config.languages_path = path.clone();
        }
        if let Some(limit) = self.short_text_limit {
            config.short_text_limit = limit;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.detector_config()?;
    let detector = ngram_langid::initialize(&config).with_context(|| {
        format!(
            "No language models loaded from {}",
            config.languages_path.display()
        )
    })?;

    match cli.command {
        Commands::Detect { text, json } => detect::run(&detector, text, json),
        Commands::Languages => languages::run(&detector),
    }
}
