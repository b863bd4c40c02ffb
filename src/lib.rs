//! ngram-langid - character n-gram language identification
//!
//! Guesses the language of already-tokenized text by matching unigram,
//! bigram and trigram windows against per-language frequency profiles.
//!
//! # Example
//!
//! ```rust,ignore
//! use ngram_langid::{initialize, DetectorConfig};
//!
//! let config = DetectorConfig::default();
//! let detector = initialize(&config)?;
//! if let Some(verdict) = detector.detect_text("the quick brown fox") {
//!     println!("{} ({:.2})", verdict.language, verdict.confidence());
//! }
//! ```

pub mod config;
pub mod detector;
mod error;
pub mod ngram;
pub mod profiles;
pub mod scoring;
pub mod wide;

pub use config::{load_config, DetectorConfig};
pub use detector::{initialize, select_sample, Detector, LanguageVerdict};
pub use error::{LangIdError, Result};
pub use ngram::{next_window, NgramOrder, NgramWindows, Window};
pub use profiles::{LanguageProfile, NgramTable, ProfileStore};
pub use scoring::{Candidate, Candidates};
pub use wide::{CodeUnitConverter, Token, WideToken};
