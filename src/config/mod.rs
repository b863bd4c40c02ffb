//! Detector configuration
//!
//! Read from the `[lang_detection]` section of a TOML file, or the
//! `"lang_detection"` object of a JSON file:
//!
//! ```toml
//! [lang_detection]
//! languages = "/usr/share/ngram-langid/languages"
//! short_text_limit = 200
//! sample_words = 20
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use crate::error::{LangIdError, Result};
use crate::profiles::{DEFAULT_PATTERN, DEFAULT_SHORT_TEXT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Words sampled from a long text
pub const DEFAULT_SAMPLE_WORDS: usize = 20;

/// System-wide model directory, used when no per-user data dir exists
pub const SYSTEM_LANGUAGES_PATH: &str = "/usr/share/ngram-langid/languages";

/// Model directory used when none is configured
pub fn default_languages_path() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("ngram-langid").join("languages"))
        .unwrap_or_else(|| PathBuf::from(SYSTEM_LANGUAGES_PATH))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Directory holding one model file per language
    #[serde(alias = "languages")]
    pub languages_path: PathBuf,

    /// Glob selecting model files inside `languages_path`
    pub pattern: String,

    /// Texts with fewer words are scored on every word, trigrams only
    pub short_text_limit: usize,

    /// Number of words sampled from texts at or above `short_text_limit`
    pub sample_words: usize,

    /// Fixed sampling seed, for reproducible verdicts on long texts
    pub seed: Option<u64>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            languages_path: default_languages_path(),
            pattern: DEFAULT_PATTERN.to_string(),
            short_text_limit: DEFAULT_SHORT_TEXT_LIMIT,
            sample_words: DEFAULT_SAMPLE_WORDS,
            seed: None,
        }
    }
}

impl DetectorConfig {
    pub fn with_languages_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.languages_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_words == 0 {
            return Err(LangIdError::Config(
                "sample_words must be at least 1".to_string(),
            ));
        }
        if self.pattern.trim().is_empty() {
            return Err(LangIdError::Config("pattern must not be empty".to_string()));
        }
        Ok(())
    }
}

/// On-disk layout: the detector settings live in their own section
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    lang_detection: Option<DetectorConfig>,
}

/// Load configuration from a TOML or JSON file (chosen by extension)
pub fn load_config(path: &Path) -> Result<DetectorConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| LangIdError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let file: ConfigFile = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| LangIdError::Config(format!("{}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content)
            .map_err(|e| LangIdError::Config(format!("{}: {}", path.display(), e)))?
    };

    let config = match file.lang_detection {
        Some(config) => {
            debug!("Loaded detector config from {}", path.display());
            config
        }
        None => {
            debug!("No lang_detection section in {}, using defaults", path.display());
            DetectorConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}
