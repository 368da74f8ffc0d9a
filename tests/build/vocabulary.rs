//! Tests for vocabulary construction from pre-tokenized input.

use std::sync::Arc;

use lexmatch::{Matcher, Occurrence, Vocabulary, VocabularyBuilder, VocabularyError};

#[test]
fn test_entries_become_matchable() {
    let vocab = Vocabulary::from_entries(vec![
        ("Colour", vec![Occurrence::new(1, 0, "Colour")]),
        ("color", vec![Occurrence::new(2, 1, "color"), Occurrence::new(3, 2, "Color")]),
    ])
    .unwrap();
    let matcher = Matcher::with_defaults(Arc::new(vocab));

    let results = matcher.search("colr");
    assert!(results.iter().any(|r| r.word() == "color"));
    assert!(results.iter().any(|r| r.word() == "colour"));
}

#[test]
fn test_entries_reject_invariant_violations() {
    assert!(matches!(
        Vocabulary::from_entries(vec![("word", Vec::<Occurrence>::new())]),
        Err(VocabularyError::EmptyOccurrences { .. })
    ));
    assert!(matches!(
        Vocabulary::from_entries(vec![("!!", vec![Occurrence::new(1, 0, "!!")])]),
        Err(VocabularyError::EmptyToken { .. })
    ));
}

#[test]
fn test_builder_matches_from_corpus() {
    let text = "Fuzzy matching, fuzzier matching.\nFuzzy!";
    let mut builder = VocabularyBuilder::new();
    for (idx, line) in text.lines().enumerate() {
        builder.add_line(idx + 1, line).unwrap();
    }
    let built = builder.build();
    let parsed = Vocabulary::from_corpus(text).unwrap();

    let a: Vec<(&str, usize)> = built.iter().map(|t| (t.text.as_str(), t.frequency())).collect();
    let b: Vec<(&str, usize)> = parsed.iter().map(|t| (t.text.as_str(), t.frequency())).collect();
    assert_eq!(a, b);
    assert_eq!(a, vec![("fuzzy", 2), ("matching", 2), ("fuzzier", 1)]);
}

#[test]
fn test_builder_skips_punctuation() {
    let mut builder = VocabularyBuilder::new();
    assert_eq!(builder.add_word("--", 1).unwrap(), None);
    assert!(builder.add_word("word", 1).unwrap().is_some());
    assert_eq!(builder.build().len(), 1);
}
