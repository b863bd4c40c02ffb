//! Detect command - classify a string or stdin

use anyhow::{Context, Result};
use ngram_langid::Detector;
use std::io::Read;

pub fn run(detector: &Detector, text: Option<String>, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let verdict = detector.detect_text(&text);

    if json {
        let out = match &verdict {
            Some(v) => serde_json::json!({
                "language": v.language,
                "score": v.score,
                "total": v.total,
                "confidence": v.confidence(),
            }),
            None => serde_json::json!({ "language": null }),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match verdict {
        Some(v) => println!(
            "{}\tscore={}\tconfidence={:.3}",
            v.language,
            v.score,
            v.confidence()
        ),
        None => println!("unknown"),
    }
    Ok(())
}
