//! Per-language frequency tables

use crate::ngram::{NgramOrder, Window};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Frequencies for every key of one n-gram order
#[derive(Debug, Clone, Default)]
pub struct NgramTable<const N: usize> {
    freqs: FxHashMap<[u16; N], u32>,
    total: u64,
}

impl<const N: usize> NgramTable<N> {
    fn insert(&mut self, key: [u16; N], freq: u32) {
        if let Some(old) = self.freqs.insert(key, freq) {
            self.total -= u64::from(old);
        }
        self.total += u64::from(freq);
    }

    /// Frequency of `key`, zero when absent
    #[inline]
    pub fn get(&self, key: &[u16; N]) -> u32 {
        self.freqs.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &[u16; N]) -> bool {
        self.freqs.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Sum of all frequencies
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u16; N], u32)> {
        self.freqs.iter().map(|(k, v)| (k, *v))
    }
}

/// A language's trained unigram, bigram and trigram frequencies.
///
/// Built once while loading and read-only afterwards.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    name: String,
    unigrams: NgramTable<1>,
    bigrams: NgramTable<2>,
    trigrams: NgramTable<3>,
}

impl LanguageProfile {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unigrams: NgramTable::default(),
            bigrams: NgramTable::default(),
            trigrams: NgramTable::default(),
        }
    }

    /// Build a profile from `(key, frequency)` pairs.
    ///
    /// Keys are classified by their UTF-16 length; keys that are empty or
    /// longer than three code units, and frequencies that do not fit a
    /// `u32`, are skipped with a warning.
    pub fn from_frequencies<'k, I>(name: impl Into<String>, freqs: I) -> Self
    where
        I: IntoIterator<Item = (&'k str, u64)>,
    {
        let mut profile = Self::new(name);
        for (key, freq) in freqs {
            profile.add_key(key, freq);
        }
        profile
    }

    /// Classify and store one key. Returns whether it was stored.
    pub(crate) fn add_key(&mut self, key: &str, freq: u64) -> bool {
        let Ok(freq) = u32::try_from(freq) else {
            warn!(
                "{}: frequency {} for key {:?} out of range, ignoring",
                self.name, freq, key
            );
            return false;
        };

        let units: Vec<u16> = key.encode_utf16().collect();
        match units.as_slice() {
            [a] => self.unigrams.insert([*a], freq),
            [a, b] => self.bigrams.insert([*a, *b], freq),
            [a, b, c] => self.trigrams.insert([*a, *b, *c], freq),
            [] => {
                warn!("{}: empty key, ignoring", self.name);
                return false;
            }
            _ => {
                warn!(
                    "{}: have more than 3 characters in key: {}",
                    self.name,
                    units.len()
                );
                return false;
            }
        }
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unigrams(&self) -> &NgramTable<1> {
        &self.unigrams
    }

    pub fn bigrams(&self) -> &NgramTable<2> {
        &self.bigrams
    }

    pub fn trigrams(&self) -> &NgramTable<3> {
        &self.trigrams
    }

    /// Frequency of a window in the table matching its order
    #[inline]
    pub fn frequency(&self, window: &Window) -> u32 {
        let [a, b, c] = *window.buf();
        match window.order() {
            NgramOrder::Unigram => self.unigrams.get(&[a]),
            NgramOrder::Bigram => self.bigrams.get(&[a, b]),
            NgramOrder::Trigram => self.trigrams.get(&[a, b, c]),
        }
    }

    /// Total frequency mass of one order's table
    pub fn total(&self, order: NgramOrder) -> u64 {
        match order {
            NgramOrder::Unigram => self.unigrams.total(),
            NgramOrder::Bigram => self.bigrams.total(),
            NgramOrder::Trigram => self.trigrams.total(),
        }
    }

    /// Number of keys in one order's table
    pub fn table_len(&self, order: NgramOrder) -> usize {
        match order {
            NgramOrder::Unigram => self.unigrams.len(),
            NgramOrder::Bigram => self.bigrams.len(),
            NgramOrder::Trigram => self.trigrams.len(),
        }
    }

    /// True when no key of any order was stored
    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty() && self.bigrams.is_empty() && self.trigrams.is_empty()
    }
}
