//! Text similarity — pluggable scorer comparing a résumé with a job description.
//!
//! Default: `TfIdfSimilarity`, TF-IDF vectors fitted on the two-document
//! corpus and compared by cosine. Other backends (embeddings, BM25) implement
//! [`TextSimilarity`] and are handed to the matcher without touching it.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::matching::scoring::round2;
use crate::matching::stop_words::is_stop_word;

/// Tokens are runs of two or more word characters.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern compiles"));

/// Pairwise document similarity as a percentage in `[0, 100]`.
///
/// Implementations must be symmetric and must not fail: degenerate input
/// scores 0.0.
pub trait TextSimilarity: Send + Sync {
    fn similarity(&self, resume_text: &str, jd_text: &str) -> f64;

    /// Backend name, for logs.
    fn name(&self) -> &'static str;
}

/// TF-IDF + cosine similarity.
///
/// Raw term counts, smoothed IDF `ln((1 + n) / (1 + df)) + 1` over the two
/// documents, English stop words removed, result rounded to two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfSimilarity;

impl TextSimilarity for TfIdfSimilarity {
    fn similarity(&self, resume_text: &str, jd_text: &str) -> f64 {
        tfidf_cosine(resume_text, jd_text)
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

/// Similarity of two texts with the default TF-IDF backend, 0–100.
pub fn compute_text_similarity(resume_text: &str, jd_text: &str) -> f64 {
    TfIdfSimilarity.similarity(resume_text, jd_text)
}

/// Lowercased non-stop-word tokens with their counts.
fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
        if is_stop_word(token) {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

fn tfidf_cosine(a: &str, b: &str) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);

    if counts_a.is_empty() || counts_b.is_empty() {
        debug!("Similarity input has no scorable terms; scoring 0");
        return 0.0;
    }

    const DOCS: f64 = 2.0;
    let idf = |term: &str| {
        let df = counts_a.contains_key(term) as u8 + counts_b.contains_key(term) as u8;
        ((1.0 + DOCS) / (1.0 + f64::from(df))).ln() + 1.0
    };

    let vec_a = weigh(&counts_a, &idf);
    let vec_b = weigh(&counts_b, &idf);

    let norm = |v: &BTreeMap<&str, f64>| v.values().map(|w| w * w).sum::<f64>().sqrt();
    let (norm_a, norm_b) = (norm(&vec_a), norm(&vec_b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map so the sum order is fixed regardless of argument order.
    let (small, large) = if vec_a.len() <= vec_b.len() {
        (&vec_a, &vec_b)
    } else {
        (&vec_b, &vec_a)
    };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|other| w * other))
        .sum();

    let cosine = (dot / (norm_a * norm_b)).clamp(0.0, 1.0);
    round2(cosine * 100.0)
}

fn weigh<'a>(
    counts: &'a BTreeMap<String, f64>,
    idf: &dyn Fn(&str) -> f64,
) -> BTreeMap<&'a str, f64> {
    counts
        .iter()
        .map(|(term, tf)| (term.as_str(), tf * idf(term.as_str())))
        .collect()
}
