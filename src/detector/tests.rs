use super::*;
use crate::profiles::LanguageProfile;

fn toy_store(short_text_limit: usize) -> Arc<ProfileStore> {
    Arc::new(ProfileStore::from_profiles(
        [
            LanguageProfile::from_frequencies(
                "en",
                [
                    ("e", 1000),
                    ("t", 700),
                    ("h", 500),
                    (" t", 300),
                    ("th", 250),
                    ("he", 240),
                    (" th", 100),
                    ("the", 90),
                    ("he ", 80),
                ],
            ),
            LanguageProfile::from_frequencies(
                "xx",
                [("z", 1000), (" z", 300), ("zz", 200), (" zz", 100), ("zz ", 90)],
            ),
        ],
        short_text_limit,
    ))
}

fn detector(short_text_limit: usize, seed: Option<u64>) -> Detector {
    let config = DetectorConfig {
        seed,
        ..DetectorConfig::default()
    };
    Detector::new(toy_store(short_text_limit), &config)
}

fn wide_tokens(d: &Detector, text: &str) -> Vec<WideToken> {
    text.split_whitespace()
        .map(|w| d.to_wide(&Token::from_word(w)))
        .collect()
}

#[test]
fn test_short_text_selects_english() {
    let d = detector(200, None);
    let tokens = wide_tokens(&d, "the");

    let verdict = d.detect(&tokens, 1).expect("verdict");

    assert_eq!(verdict.language, "en");
    // " th" + "the" + "he "
    assert_eq!(verdict.score, 270);
    assert_eq!(verdict.total, 270);
    assert!((verdict.confidence() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_short_text_selects_other_language() {
    let d = detector(200, None);
    assert_eq!(d.detect_text("zz zz").unwrap().language, "xx");
}

#[test]
fn test_empty_input_has_no_verdict() {
    let d = detector(200, None);
    assert!(d.detect(&[], 0).is_none());
    assert!(d.detect_text("").is_none());
    assert!(d.detect_text("   \t\n").is_none());
}

#[test]
fn test_zero_word_count_has_no_verdict() {
    let d = detector(200, None);
    let tokens = wide_tokens(&d, "the");
    assert!(d.detect(&tokens, 0).is_none());
}

#[test]
fn test_unknown_words_have_no_verdict() {
    let d = detector(200, None);
    assert!(d.detect_text("qqq www").is_none());
}

#[test]
fn test_malformed_token_is_excluded() {
    let d = detector(200, None);
    let tokens = vec![
        d.to_wide(&Token::new(&[0xc3, 0x28], 0)),
        d.to_wide(&Token::from_word("the")),
    ];

    assert!(tokens[0].is_empty());
    assert_eq!(d.detect(&tokens, 2).unwrap().language, "en");
}

#[test]
fn test_long_text_samples_and_detects() {
    let d = detector(5, Some(42));
    let text = "the ".repeat(60) + "zz";
    let tokens = wide_tokens(&d, &text);
    assert_eq!(tokens.len(), 61);

    let verdict = d.detect(&tokens, tokens.len()).expect("verdict");
    assert_eq!(verdict.language, "en");
}

#[test]
fn test_seeded_detection_is_reproducible() {
    let d = detector(5, Some(7));
    let text = "the zz ".repeat(40);
    let tokens = wide_tokens(&d, &text);

    let first = d.detect(&tokens, tokens.len());
    for _ in 0..5 {
        assert_eq!(d.detect(&tokens, tokens.len()), first);
    }
}

#[test]
fn test_long_text_uses_all_orders() {
    let d = detector(1, None);
    let tokens = wide_tokens(&d, "the");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let verdict = d.detect_with_rng(&tokens, 1, &mut rng).unwrap();

    // unigrams t,h,e + bigrams " t",th,he + trigrams " th",the,"he "
    assert_eq!(verdict.score, 2200 + 790 + 270);
}

#[test]
fn test_select_sample_stays_in_segments() {
    let tokens: Vec<u32> = (0..10).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let segments = [(0, 4), (4, 7), (7, 10)];

    for _ in 0..200 {
        let offsets = select_sample(&tokens, 3, &mut rng);
        assert_eq!(offsets.len(), 3);
        for (offset, (lo, hi)) in offsets.iter().zip(segments) {
            assert!(*offset >= lo && *offset < hi, "{} not in [{}, {})", offset, lo, hi);
        }
    }
}

#[test]
fn test_select_sample_all_words() {
    let tokens = ["a", "b", "c", "d"];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(select_sample(&tokens, 4, &mut rng), vec![0, 1, 2, 3]);
}

#[test]
fn test_select_sample_single_segment() {
    let tokens = [0u8; 9];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let offsets = select_sample(&tokens, 1, &mut rng);
    assert_eq!(offsets.len(), 1);
    assert!(offsets[0] < 9);
}

#[test]
#[should_panic]
fn test_select_sample_too_few_words() {
    let tokens = [1, 2];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    select_sample(&tokens, 3, &mut rng);
}

#[test]
fn test_tie_resolves_to_first_loaded() {
    let store = Arc::new(ProfileStore::from_profiles(
        [
            LanguageProfile::from_frequencies("aa", [(" ab", 5)]),
            LanguageProfile::from_frequencies("bb", [(" ab", 5)]),
        ],
        200,
    ));
    let d = Detector::new(store, &DetectorConfig::default());

    let verdict = d.detect_text("ab").unwrap();
    assert_eq!(verdict.language, "aa");
    assert!((verdict.confidence() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_detector_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Detector>();
}
