//! Detection driver
//!
//! Picks a strategy from the document's word count:
//!
//! - **Short texts** (fewer than `short_text_limit` words): every word is
//!   scored at trigram order only. Trigrams discriminate best per word,
//!   which matters when there are few words to accumulate evidence from.
//! - **Long texts**: a stratified random sample of `sample_words` words is
//!   scored at unigram, then bigram, then trigram order into the same
//!   candidate set. Sampling bounds the cost regardless of document size.
//!
//! The verdict is the highest-scoring candidate. Equal scores resolve to the
//! language loaded first; a run where nothing scored yields `None`.

use crate::config::DetectorConfig;
use crate::error::Result;
use crate::ngram::NgramOrder;
use crate::profiles::ProfileStore;
use crate::scoring::Candidates;
use crate::wide::{Token, WideToken};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Orders applied to short texts
const SHORT_TEXT_ORDERS: &[NgramOrder] = &[NgramOrder::Trigram];

/// Orders applied, in sequence, to the sample of a long text
const LONG_TEXT_ORDERS: &[NgramOrder] = &[
    NgramOrder::Unigram,
    NgramOrder::Bigram,
    NgramOrder::Trigram,
];

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageVerdict {
    /// Winning language code
    pub language: String,
    /// Accumulated score of the winner
    pub score: u64,
    /// Accumulated score of every candidate, winner included
    pub total: u64,
}

impl LanguageVerdict {
    /// Winner's share of the total score, in `0.0..=1.0`
    pub fn confidence(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64
    }
}

/// Load the configured models and build a detector
pub fn initialize(config: &DetectorConfig) -> Result<Detector> {
    config.validate()?;
    let store = ProfileStore::load(
        &config.languages_path,
        &config.pattern,
        config.short_text_limit,
    )?;
    Ok(Detector::new(Arc::new(store), config))
}

/// Language detector over a shared, read-only profile store.
///
/// Cheap to clone; every `detect` call keeps its working state local, so
/// one detector can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Detector {
    store: Arc<ProfileStore>,
    sample_words: usize,
    seed: Option<u64>,
}

impl Detector {
    pub fn new(store: Arc<ProfileStore>, config: &DetectorConfig) -> Self {
        Self {
            store,
            sample_words: config.sample_words.max(1),
            seed: config.seed,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Convert a pipeline token for [`Detector::detect`]
    pub fn to_wide(&self, token: &Token<'_>) -> WideToken {
        self.store.converter().to_wide(token)
    }

    /// Detect the language of `tokens`, a document of `word_count` words.
    ///
    /// Uses the configured seed when there is one, the thread RNG otherwise.
    pub fn detect(&self, tokens: &[WideToken], word_count: usize) -> Option<LanguageVerdict> {
        match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                self.detect_with_rng(tokens, word_count, &mut rng)
            }
            None => self.detect_with_rng(tokens, word_count, &mut rand::rng()),
        }
    }

    /// [`Detector::detect`] with an explicit sampling RNG
    pub fn detect_with_rng<R: Rng + ?Sized>(
        &self,
        tokens: &[WideToken],
        word_count: usize,
        rng: &mut R,
    ) -> Option<LanguageVerdict> {
        if tokens.is_empty() || word_count == 0 {
            debug!("Nothing to detect");
            return None;
        }

        let store: &ProfileStore = &self.store;
        let (words, orders): (Vec<&WideToken>, &[NgramOrder]) =
            if word_count < store.short_text_limit() {
                (tokens.iter().collect(), SHORT_TEXT_ORDERS)
            } else {
                let wanted = self.sample_words.min(tokens.len());
                let words = select_sample(tokens, wanted, rng)
                    .into_iter()
                    .map(|i| &tokens[i])
                    .collect();
                (words, LONG_TEXT_ORDERS)
            };

        let mut candidates = Candidates::new(store);
        for &order in orders {
            for word in &words {
                candidates.score_word(&word.units, order);
            }
        }

        debug!(
            "Scored {} of {} words over {} orders, {} candidates",
            words.len(),
            word_count,
            orders.len(),
            candidates.len()
        );

        let best = candidates.best()?;
        Some(LanguageVerdict {
            language: best.name().to_string(),
            score: best.score,
            total: candidates.total_score(),
        })
    }

    /// Split `text` on whitespace and detect it.
    ///
    /// Whitespace splitting is only a convenience; pipelines with a real
    /// tokenizer should call [`Detector::detect`].
    pub fn detect_text(&self, text: &str) -> Option<LanguageVerdict> {
        let tokens: Vec<WideToken> = text
            .split_whitespace()
            .map(|word| self.to_wide(&Token::from_word(word)))
            .collect();
        self.detect(&tokens, tokens.len())
    }
}

/// Pick `wanted` offsets spread over the whole of `tokens`.
///
/// The tokens are split into `wanted` contiguous segments of `len / wanted`
/// elements, the first one also taking the `len % wanted` remainder, and one
/// offset is drawn uniformly from each segment:
///
/// ```text
/// wanted = 2, len = 5
///
/// w1 w2 w3 | w4 w5
///    ^           ^
/// ```
///
/// Not uniform over the whole text, but every part of it contributes.
///
/// # Panics
///
/// If `wanted` is zero or larger than `tokens.len()`.
pub fn select_sample<T, R: Rng + ?Sized>(tokens: &[T], wanted: usize, rng: &mut R) -> Vec<usize> {
    let len = tokens.len();
    assert!(wanted > 0, "select_sample: wanted must be non-zero");
    assert!(
        len >= wanted,
        "select_sample: {} words requested from {}",
        wanted,
        len
    );

    let step = len / wanted;
    let remainder = len % wanted;

    let mut offsets = Vec::with_capacity(wanted);
    offsets.push(rng.random_range(0..step + remainder));

    let mut start = step + remainder;
    while start < len {
        offsets.push(start + rng.random_range(0..step));
        start += step;
    }

    offsets
}

#[cfg(test)]
mod tests;
