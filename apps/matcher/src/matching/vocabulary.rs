//! Skill vocabularies — ordered lowercase terms, each paired with a compiled
//! word-boundary pattern built once per process.
//!
//! Two built-in lists ship with the crate. `Engineering` is the default used
//! by the matcher; `Analytics` trades the web/backend stack for BI tooling.
//! Custom vocabularies go through [`Vocabulary::from_terms`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::MatchError;

/// Default vocabulary: languages, web, backend, databases, data, tools, cloud.
pub const ENGINEERING_SKILLS: &[&str] = &[
    // Programming
    "python",
    "java",
    "c",
    "c++",
    "c#",
    "javascript",
    // Web
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "nodejs",
    "express",
    // Backend
    "spring",
    "spring boot",
    // Databases
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    // Data & AI
    "pandas",
    "numpy",
    "data analysis",
    "data visualization",
    "machine learning",
    // Tools
    "git",
    "github",
    "excel",
    // Cloud / DevOps
    "aws",
    "docker",
    "kubernetes",
];

/// Analytics-leaning vocabulary.
pub const ANALYTICS_SKILLS: &[&str] = &[
    "python",
    "java",
    "c",
    "c++",
    "c#",
    "javascript",
    "pandas",
    "numpy",
    "data analysis",
    "data visualization",
    "machine learning",
    "deep learning",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "excel",
    "power bi",
    "tableau",
    "html",
    "css",
    "react",
    "aws",
    "docker",
];

static ENGINEERING: Lazy<Vocabulary> = Lazy::new(|| compile_builtin(VocabularyKind::Engineering));
static ANALYTICS: Lazy<Vocabulary> = Lazy::new(|| compile_builtin(VocabularyKind::Analytics));

fn compile_builtin(kind: VocabularyKind) -> Vocabulary {
    // Built-in terms are escaped literals between fixed anchors; compilation cannot fail.
    let vocabulary = Vocabulary::from_terms(kind.terms().iter().copied())
        .expect("built-in vocabulary compiles");
    info!("Compiled {} vocabulary ({} terms)", kind, vocabulary.len());
    vocabulary
}

/// Selector for the built-in vocabularies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    #[default]
    Engineering,
    Analytics,
}

impl VocabularyKind {
    pub fn terms(self) -> &'static [&'static str] {
        match self {
            VocabularyKind::Engineering => ENGINEERING_SKILLS,
            VocabularyKind::Analytics => ANALYTICS_SKILLS,
        }
    }

    /// The compiled process-wide vocabulary for this kind.
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            VocabularyKind::Engineering => &ENGINEERING,
            VocabularyKind::Analytics => &ANALYTICS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VocabularyKind::Engineering => "engineering",
            VocabularyKind::Analytics => "analytics",
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VocabularyKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engineering" => Ok(VocabularyKind::Engineering),
            "analytics" => Ok(VocabularyKind::Analytics),
            other => Err(MatchError::InvalidConfig(format!(
                "unknown skill vocabulary '{other}' (expected 'engineering' or 'analytics')"
            ))),
        }
    }
}

/// A vocabulary term and its compiled matcher.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    term: String,
    pattern: Regex,
}

impl SkillPattern {
    pub fn term(&self) -> &str {
        &self.term
    }

    /// True if the term occurs as a whole word/phrase in already-normalized text.
    pub fn is_match(&self, normalized_text: &str) -> bool {
        self.pattern.is_match(normalized_text)
    }
}

/// An ordered, deduplicated set of skill terms with compiled patterns.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    patterns: Vec<SkillPattern>,
}

impl Vocabulary {
    /// Builds a vocabulary from raw terms.
    ///
    /// Terms are trimmed, lowercased and whitespace-collapsed; later duplicates
    /// are dropped so the first occurrence keeps its position.
    pub fn from_terms<I, S>(terms: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();

        for raw in terms {
            let term = normalize_whitespace(&raw.as_ref().to_lowercase());
            if term.is_empty() {
                return Err(MatchError::InvalidVocabulary(
                    "skill terms cannot be empty".to_string(),
                ));
            }
            if !seen.insert(term.clone()) {
                continue;
            }
            let pattern = term_pattern(&term)?;
            patterns.push(SkillPattern { term, pattern });
        }

        if patterns.is_empty() {
            return Err(MatchError::InvalidVocabulary(
                "vocabulary must contain at least one term".to_string(),
            ));
        }

        Ok(Vocabulary { patterns })
    }

    /// Returns a copy of this vocabulary with `extra` terms appended.
    pub fn extended<I, S>(&self, extra: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = extra.into_iter().map(|t| t.as_ref().to_string()).collect();
        Vocabulary::from_terms(self.terms().map(str::to_string).chain(extra))
    }

    pub fn patterns(&self) -> &[SkillPattern] {
        &self.patterns
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(SkillPattern::term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        VocabularyKind::default().vocabulary().clone()
    }
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Anchors a literal term on word boundaries.
///
/// `\b` only works next to a word character, so a term that starts or ends
/// with punctuation ("c++", "c#") is anchored on "not a word character or
/// the edge of the text" on that side instead.
fn term_pattern(term: &str) -> Result<Regex, MatchError> {
    let starts_with_word = term.chars().next().is_some_and(is_word_char);
    let ends_with_word = term.chars().last().is_some_and(is_word_char);

    let lead = if starts_with_word { r"\b" } else { r"(?:^|\W)" };
    let trail = if ends_with_word { r"\b" } else { r"(?:\W|$)" };

    Ok(Regex::new(&format!("{lead}{}{trail}", regex::escape(term)))?)
}
