//! JD–résumé matcher.
//!
//! Scores a résumé against a job description from three signals: vocabulary
//! skill coverage, stated years of experience, and TF-IDF text similarity.
//! Everything here is synchronous and stateless per call; compiled patterns
//! and vocabularies are process-wide statics.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod telemetry;

pub use config::Config;
pub use errors::MatchError;
pub use matching::experience::extract_experience_years;
pub use matching::matcher::{match_resume, JdResumeMatcher};
pub use matching::scoring::{ScoringWeights, WeightingScheme};
pub use matching::similarity::{compute_text_similarity, TextSimilarity, TfIdfSimilarity};
pub use matching::skills::extract_skills;
pub use matching::vocabulary::{Vocabulary, VocabularyKind};
pub use models::report::{JdMatchAnalysis, MatchReport, MatchResult};
