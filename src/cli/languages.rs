//! Languages command - list loaded models

use anyhow::Result;
use ngram_langid::{Detector, NgramOrder};

pub fn run(detector: &Detector) -> Result<()> {
    let store = detector.store();

    println!("{:<8} {:>10} {:>10} {:>10}", "lang", "unigrams", "bigrams", "trigrams");
    for profile in store.iter() {
        println!(
            "{:<8} {:>10} {:>10} {:>10}",
            profile.name(),
            profile.table_len(NgramOrder::Unigram),
            profile.table_len(NgramOrder::Bigram),
            profile.table_len(NgramOrder::Trigram)
        );
    }
    println!("\n{} languages, short text limit {} words", store.len(), store.short_text_limit());
    Ok(())
}
