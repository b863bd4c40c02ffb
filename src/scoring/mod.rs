//! Candidate scoring
//!
//! Every n-gram window adds its frequency in each language's profile to that
//! language's running score. Two strategies share one candidate map:
//!
//! - **Full scan** checks the window against every loaded profile and adds
//!   any language with a non-zero frequency to the candidate set.
//! - **Incremental update** only checks the current candidates. When none of
//!   them knows the window at all, it falls back to a full scan, so a
//!   language missed by the first few windows can still join later.
//!
//! Once a few windows have narrowed the field, most lookups are
//! O(candidates) instead of O(languages).

use crate::ngram::{NgramOrder, NgramWindows, Window};
use crate::profiles::{LanguageProfile, ProfileStore};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// A language being scored within one detection run
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub language: &'a LanguageProfile,
    /// Load-order index of the profile, used to break ties
    pub index: usize,
    pub score: u64,
}

impl<'a> Candidate<'a> {
    pub fn name(&self) -> &'a str {
        self.language.name()
    }

    fn rank_key(&self) -> (Reverse<u64>, usize) {
        (Reverse(self.score), self.index)
    }
}

/// Per-run candidate set: language name -> accumulated score
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    store: &'a ProfileStore,
    map: FxHashMap<&'a str, Candidate<'a>>,
}

impl<'a> Candidates<'a> {
    pub fn new(store: &'a ProfileStore) -> Self {
        Self {
            store,
            map: FxHashMap::default(),
        }
    }

    /// Score a window against every profile. Returns the frequency added.
    pub fn full_scan(&mut self, window: &Window) -> u64 {
        let store = self.store;
        let mut added = 0u64;

        for (index, language) in store.iter().enumerate() {
            let freq = u64::from(language.frequency(window));
            if freq == 0 {
                continue;
            }

            self.map
                .entry(language.name())
                .and_modify(|c| c.score += freq)
                .or_insert(Candidate {
                    language,
                    index,
                    score: freq,
                });
            added += freq;
        }

        added
    }

    /// Score a window against the current candidates only, falling back to
    /// a full scan when none of them matches. Returns the frequency added.
    pub fn update(&mut self, window: &Window) -> u64 {
        let mut total = 0u64;

        for cand in self.map.values_mut() {
            let freq = u64::from(cand.language.frequency(window));
            cand.score += freq;
            total += freq;
        }

        if total == 0 {
            return self.full_scan(window);
        }
        total
    }

    /// Full scan while no candidate exists yet, incremental afterwards
    pub fn process(&mut self, window: &Window) -> u64 {
        if self.map.is_empty() {
            self.full_scan(window)
        } else {
            self.update(window)
        }
    }

    /// Feed every window of a word at `order`. Returns the windows consumed.
    pub fn score_word(&mut self, units: &[u16], order: NgramOrder) -> usize {
        let mut windows = 0;
        for window in NgramWindows::new(units, order) {
            self.process(&window);
            windows += 1;
        }
        windows
    }

    pub fn get(&self, name: &str) -> Option<&Candidate<'a>> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Sum of every candidate's score
    pub fn total_score(&self) -> u64 {
        self.map.values().map(|c| c.score).sum()
    }

    /// Candidates by score, highest first; equal scores keep load order
    pub fn ranked(&self) -> Vec<Candidate<'a>> {
        let mut ranked: Vec<Candidate<'a>> = self.map.values().copied().collect();
        ranked.sort_by_key(|c| c.rank_key());
        ranked
    }

    /// Highest-scoring candidate, if any scored at all
    pub fn best(&self) -> Option<Candidate<'a>> {
        self.map
            .values()
            .filter(|c| c.score > 0)
            .min_by_key(|c| c.rank_key())
            .copied()
    }
}
