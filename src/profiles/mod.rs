//! Language profile store
//!
//! Loads one frequency model per language from a directory of JSON files:
//!
//! ```json
//! { "freq": { "e": 120321, " th": 8812, "he": 6120 } }
//! ```
//!
//! The language code is the file's base name before the first `.`
//! (`en.json` -> `en`). Files that cannot be parsed, or that lack a `freq`
//! object, are skipped with a warning; the remaining models still load.

mod profile;

pub use profile::{LanguageProfile, NgramTable};

use crate::error::{LangIdError, Result};
use crate::wide::CodeUnitConverter;
use globset::Glob;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Default word count below which a text is scored as short
pub const DEFAULT_SHORT_TEXT_LIMIT: usize = 200;

/// Default model file pattern
pub const DEFAULT_PATTERN: &str = "*.json";

/// Every loaded language profile, in load order.
///
/// Immutable once built; share it between threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<LanguageProfile>,
    by_name: FxHashMap<String, usize>,
    short_text_limit: usize,
    converter: CodeUnitConverter,
}

impl ProfileStore {
    /// Load every model in `dir` whose file name matches `pattern`.
    ///
    /// Files are loaded in path order so profile indices are stable between
    /// runs. Returns [`LangIdError::NoModels`] when nothing usable was found.
    pub fn load(dir: &Path, pattern: &str, short_text_limit: usize) -> Result<Self> {
        let matcher = Glob::new(pattern)?.compile_matcher();

        let entries = std::fs::read_dir(dir).map_err(|source| {
            error!("cannot read any files matching {} in {}", pattern, dir.display());
            LangIdError::Io {
                path: dir.to_path_buf(),
                source,
            }
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| !t.is_dir()).unwrap_or(false))
            .filter(|e| matcher.is_match(e.file_name()))
            .map(|e| e.path())
            .collect();
        paths.sort();

        if paths.is_empty() {
            error!("cannot read any files matching {} in {}", pattern, dir.display());
            return Err(LangIdError::NoModels {
                dir: dir.to_path_buf(),
                pattern: pattern.to_string(),
            });
        }

        let mut store = Self::empty(short_text_limit);
        for path in &paths {
            match read_model_file(path) {
                Ok(profile) => store.push(profile),
                Err(e) => warn!("{}", e),
            }
        }

        info!("loaded {} languages", store.len());

        if store.is_empty() {
            return Err(LangIdError::NoModels {
                dir: dir.to_path_buf(),
                pattern: pattern.to_string(),
            });
        }
        Ok(store)
    }

    /// Assemble a store from already-built profiles
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = LanguageProfile>,
        short_text_limit: usize,
    ) -> Self {
        let mut store = Self::empty(short_text_limit);
        for profile in profiles {
            store.push(profile);
        }
        store
    }

    fn empty(short_text_limit: usize) -> Self {
        Self {
            profiles: Vec::new(),
            by_name: FxHashMap::default(),
            short_text_limit,
            converter: CodeUnitConverter::new(),
        }
    }

    fn push(&mut self, profile: LanguageProfile) {
        if self.by_name.contains_key(profile.name()) {
            warn!(
                "language {} is already loaded, ignoring duplicate model",
                profile.name()
            );
            return;
        }

        info!(
            "loaded {} language, {} unigramms, {} digramms, {} trigramms",
            profile.name(),
            profile.unigrams().len(),
            profile.bigrams().len(),
            profile.trigrams().len()
        );

        self.by_name
            .insert(profile.name().to_string(), self.profiles.len());
        self.profiles.push(profile);
    }

    pub fn get(&self, name: &str) -> Option<&LanguageProfile> {
        self.index_of(name).map(|i| &self.profiles[i])
    }

    /// Load-order index of a language
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageProfile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn short_text_limit(&self) -> usize {
        self.short_text_limit
    }

    pub fn converter(&self) -> &CodeUnitConverter {
        &self.converter
    }
}

/// Language code for a model path: file name up to the first `.`
fn language_name(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.split('.').next()?;
    (!name.is_empty()).then_some(name)
}

/// Parse one model file into a profile
fn read_model_file(path: &Path) -> Result<LanguageProfile> {
    let content = std::fs::read_to_string(path).map_err(|source| LangIdError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let top: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| LangIdError::ModelParse {
            path: path.to_path_buf(),
            source,
        })?;

    let freqs = top
        .get("freq")
        .and_then(|v| v.as_object())
        .ok_or_else(|| LangIdError::MissingFreq {
            path: path.to_path_buf(),
        })?;

    // Glob matches always carry a file name
    debug_assert!(path.file_name().is_some());
    let name = language_name(path).ok_or_else(|| {
        LangIdError::Config(format!("cannot derive language name from {}", path.display()))
    })?;

    let mut profile = LanguageProfile::new(name);
    for (key, value) in freqs {
        match value.as_u64() {
            Some(freq) => {
                profile.add_key(key, freq);
            }
            None => warn!(
                "{}: frequency for key {:?} is not a non-negative integer, ignoring",
                path.display(),
                key
            ),
        }
    }

    debug!("parsed {} ({} keys)", path.display(), freqs.len());
    Ok(profile)
}
