use anyhow::{Context, Result};

use crate::matching::scoring::WeightingScheme;
use crate::matching::vocabulary::VocabularyKind;

/// Matcher configuration loaded from environment variables.
/// Every key is optional; unset keys fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    pub scheme: WeightingScheme,
    pub vocabulary: VocabularyKind,
    pub extra_skills: Vec<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: WeightingScheme::default(),
            vocabulary: VocabularyKind::default(),
            extra_skills: Vec::new(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scheme = match lookup("MATCH_SCHEME") {
            Some(raw) => raw
                .parse::<WeightingScheme>()
                .context("MATCH_SCHEME must be 'weighted_experience' or 'skills_similarity'")?,
            None => WeightingScheme::default(),
        };

        let vocabulary = match lookup("SKILL_VOCABULARY") {
            Some(raw) => raw
                .parse::<VocabularyKind>()
                .context("SKILL_VOCABULARY must be 'engineering' or 'analytics'")?,
            None => VocabularyKind::default(),
        };

        let extra_skills = lookup("EXTRA_SKILLS")
            .map(|raw| parse_skill_list(&raw))
            .unwrap_or_default();

        Ok(Config {
            scheme,
            vocabulary,
            extra_skills,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Comma-separated terms, lowercased and trimmed, blanks and repeats dropped.
fn parse_skill_list(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for term in raw.split(',').map(|t| t.trim().to_lowercase()) {
        if !term.is_empty() && !skills.contains(&term) {
            skills.push(term);
        }
    }
    skills
}
