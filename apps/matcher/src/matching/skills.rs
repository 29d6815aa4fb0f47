//! Skill extraction — existence-only scan of a text against a vocabulary.

use std::collections::BTreeSet;

use tracing::debug;

use crate::matching::vocabulary::{normalize_whitespace, Vocabulary, VocabularyKind};

/// Vocabulary terms present in `text`, using the default vocabulary.
///
/// Matching is case-insensitive and whole-word: "java" does not match inside
/// "javascript", "c" does not match inside "doctor".
pub fn extract_skills(text: &str) -> BTreeSet<&'static str> {
    extract_skills_with(VocabularyKind::default().vocabulary(), text)
}

/// Vocabulary terms present in `text`.
///
/// The result is always a subset of `vocabulary`; empty text yields an empty set.
pub fn extract_skills_with<'v>(vocabulary: &'v Vocabulary, text: &str) -> BTreeSet<&'v str> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return BTreeSet::new();
    }

    let found: BTreeSet<&str> = vocabulary
        .patterns()
        .iter()
        .filter(|p| p.is_match(&normalized))
        .map(|p| p.term())
        .collect();

    debug!(
        "Extracted {} of {} vocabulary skills",
        found.len(),
        vocabulary.len()
    );
    found
}

/// Lowercases and collapses whitespace so multi-word terms match across line breaks.
pub fn normalize_text(text: &str) -> String {
    normalize_whitespace(&text.to_lowercase())
}
