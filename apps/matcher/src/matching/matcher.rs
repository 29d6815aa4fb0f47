//! Match aggregator — combines skill coverage, experience and text similarity
//! into one report.
//!
//! `JdResumeMatcher` carries the vocabulary, weighting scheme and similarity
//! backend; a single `evaluate` path serves both report shapes.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::errors::MatchError;
use crate::matching::experience::extract_experience_years;
use crate::matching::scoring::{
    combined_score, experience_match_percentage, explain, round2, skill_match_percentage,
    FeedbackTier, ScoringWeights, WeightingScheme,
};
use crate::matching::similarity::{TextSimilarity, TfIdfSimilarity};
use crate::matching::skills::extract_skills_with;
use crate::matching::vocabulary::{Vocabulary, VocabularyKind};
use crate::models::report::{JdMatchAnalysis, MatchReport, MatchResult};

/// Scores a résumé against the default (experience-weighted) matcher.
pub fn match_resume(resume_text: &str, jd_text: &str) -> MatchResult {
    JdResumeMatcher::default().match_detailed(resume_text, jd_text)
}

#[derive(Clone)]
pub struct JdResumeMatcher {
    vocabulary: Cow<'static, Vocabulary>,
    scheme: WeightingScheme,
    weights: ScoringWeights,
    similarity: Arc<dyn TextSimilarity>,
}

impl Default for JdResumeMatcher {
    fn default() -> Self {
        Self::new(WeightingScheme::default())
    }
}

impl std::fmt::Debug for JdResumeMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JdResumeMatcher")
            .field("vocabulary_terms", &self.vocabulary.len())
            .field("scheme", &self.scheme)
            .field("weights", &self.weights)
            .field("similarity", &self.similarity.name())
            .finish()
    }
}

impl JdResumeMatcher {
    /// Default vocabulary and TF-IDF similarity with the scheme's preset weights.
    pub fn new(scheme: WeightingScheme) -> Self {
        JdResumeMatcher {
            vocabulary: Cow::Borrowed(VocabularyKind::default().vocabulary()),
            scheme,
            weights: scheme.weights(),
            similarity: Arc::new(TfIdfSimilarity),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, MatchError> {
        let base = config.vocabulary.vocabulary();
        let vocabulary = if config.extra_skills.is_empty() {
            Cow::Borrowed(base)
        } else {
            Cow::Owned(base.extended(&config.extra_skills)?)
        };

        tracing::info!(
            "Matcher configured: scheme={}, vocabulary={} ({} terms)",
            config.scheme,
            config.vocabulary,
            vocabulary.len()
        );

        Ok(JdResumeMatcher {
            vocabulary,
            ..Self::new(config.scheme)
        })
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Cow::Owned(vocabulary);
        self
    }

    pub fn with_similarity(mut self, similarity: Arc<dyn TextSimilarity>) -> Self {
        self.similarity = similarity;
        self
    }

    /// Overrides the preset weights.
    ///
    /// The skills/similarity scheme reports no experience figures, so it
    /// rejects a non-zero experience weight.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Result<Self, MatchError> {
        weights.validate()?;
        if self.scheme == WeightingScheme::SkillsSimilarity && weights.scores_experience() {
            return Err(MatchError::InvalidConfig(
                "skills_similarity scheme cannot weight experience".to_string(),
            ));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn scheme(&self) -> WeightingScheme {
        self.scheme
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Scores `resume_text` against `jd_text` in the configured report shape.
    pub fn evaluate(&self, resume_text: &str, jd_text: &str) -> MatchReport {
        let signals = self.signals(resume_text, jd_text);
        match self.scheme {
            WeightingScheme::WeightedExperience => self.detailed(signals).into(),
            WeightingScheme::SkillsSimilarity => self.analysis(signals).into(),
        }
    }

    /// Scores and always returns the experience-detailed record.
    pub fn match_detailed(&self, resume_text: &str, jd_text: &str) -> MatchResult {
        self.detailed(self.signals(resume_text, jd_text))
    }

    fn signals(&self, resume_text: &str, jd_text: &str) -> Signals {
        let resume_skills = extract_skills_with(&self.vocabulary, resume_text);
        let jd_skills = extract_skills_with(&self.vocabulary, jd_text);

        // BTreeSet iteration is sorted, so both lists come out ordered.
        let (matched, missing): (Vec<&str>, Vec<&str>) = jd_skills
            .iter()
            .copied()
            .partition(|skill| resume_skills.contains(skill));

        let skill_pct = skill_match_percentage(matched.len(), jd_skills.len());

        let (candidate_years, required_years) = if self.weights.scores_experience()
            || self.scheme == WeightingScheme::WeightedExperience
        {
            (
                extract_experience_years(resume_text),
                extract_experience_years(jd_text),
            )
        } else {
            (0.0, 0.0)
        };
        let experience_pct = experience_match_percentage(candidate_years, required_years);

        let similarity_pct = self.similarity.similarity(resume_text, jd_text);
        let score = combined_score(&self.weights, skill_pct, experience_pct, similarity_pct);

        debug!(
            "Scored match: {}/{} skills, {} vs {} years, similarity {} ({}), score {:.2}",
            matched.len(),
            jd_skills.len(),
            candidate_years,
            required_years,
            similarity_pct,
            self.similarity.name(),
            score
        );

        Signals {
            matched: matched.into_iter().map(str::to_string).collect(),
            missing: missing.into_iter().map(str::to_string).collect(),
            skill_pct,
            candidate_years,
            required_years,
            experience_pct,
            similarity_pct,
            score,
        }
    }

    fn detailed(&self, s: Signals) -> MatchResult {
        let required = s.matched.len() + s.missing.len();
        let similarity = round2(s.similarity_pct);
        let explanation = explain(
            s.matched.len(),
            required,
            s.candidate_years,
            s.required_years,
            similarity,
        );
        MatchResult {
            match_percentage: round2(s.score),
            matched_skills: s.matched,
            missing_skills: s.missing,
            candidate_experience: round2(s.candidate_years),
            required_experience: round2(s.required_years),
            experience_match_percentage: round2(s.experience_pct),
            skill_match_percentage: round2(s.skill_pct),
            text_similarity_percentage: similarity,
            explanation,
        }
    }

    fn analysis(&self, s: Signals) -> JdMatchAnalysis {
        let match_percentage = round2(s.score);
        JdMatchAnalysis {
            match_percentage,
            strengths: s.matched,
            weaknesses: s.missing,
            overall_feedback: FeedbackTier::from_score(match_percentage)
                .message()
                .to_string(),
        }
    }
}

/// Unrounded component scores for one résumé/JD pair.
struct Signals {
    matched: Vec<String>,
    missing: Vec<String>,
    skill_pct: f64,
    candidate_years: f64,
    required_years: f64,
    experience_pct: f64,
    similarity_pct: f64,
    score: f64,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::matching::skills::extract_skills;

    const RESUME: &str = "I have 3 years of experience in Python and SQL";
    const JD: &str = "Looking for a candidate with 5+ years in Python, SQL, and AWS";

    struct FixedSimilarity(f64);

    impl TextSimilarity for FixedSimilarity {
        fn similarity(&self, _resume_text: &str, _jd_text: &str) -> f64 {
            self.0
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_end_to_end_python_sql_aws() {
        let result = match_resume(RESUME, JD);
        assert_eq!(result.matched_skills, vec!["python", "sql"]);
        assert_eq!(result.missing_skills, vec!["aws"]);
        assert_eq!(result.candidate_experience, 3.0);
        assert_eq!(result.required_experience, 5.0);
        assert_eq!(result.experience_match_percentage, 60.0);
        assert_eq!(result.skill_match_percentage, 66.67);

        let expected = round2(
            0.6 * (200.0 / 3.0) + 0.3 * 60.0 + 0.1 * result.text_similarity_percentage,
        );
        assert!(
            (result.match_percentage - expected).abs() < 0.011,
            "got {} expected {expected}",
            result.match_percentage
        );
        assert!(result
            .explanation
            .starts_with("Matched 2 out of 3 required skills. Candidate experience is 3.0 years"));
    }

    #[test]
    fn test_matched_and_missing_partition_jd_skills() {
        let pairs = [
            (RESUME, JD),
            ("Java, Spring Boot, Docker", "Need Java and Kubernetes and Docker"),
            ("", "Python"),
            ("Everything: python sql aws", ""),
        ];
        for (resume, jd) in pairs {
            let result = match_resume(resume, jd);
            let matched: BTreeSet<&str> =
                result.matched_skills.iter().map(String::as_str).collect();
            let missing: BTreeSet<&str> =
                result.missing_skills.iter().map(String::as_str).collect();
            assert!(matched.is_disjoint(&missing), "pair: {resume:?} / {jd:?}");
            let union: BTreeSet<&str> = matched.union(&missing).copied().collect();
            assert_eq!(union, extract_skills(jd), "pair: {resume:?} / {jd:?}");
        }
    }

    #[test]
    fn test_no_jd_skills_scores_zero_coverage() {
        let result = match_resume("Python developer", "We value kindness and curiosity");
        assert_eq!(result.skill_match_percentage, 0.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_no_required_experience_is_full_experience_match() {
        let result = match_resume("1 year of Python", "Python developer wanted");
        assert_eq!(result.required_experience, 0.0);
        assert_eq!(result.experience_match_percentage, 100.0);
    }

    #[test]
    fn test_skills_similarity_scheme_uses_analysis_shape() {
        let matcher = JdResumeMatcher::new(WeightingScheme::SkillsSimilarity)
            .with_similarity(Arc::new(FixedSimilarity(50.0)));
        let report = matcher.evaluate(RESUME, JD);
        let MatchReport::Analysis(analysis) = report else {
            panic!("expected analysis shape");
        };
        // 0.7 * 66.67 + 0.3 * 50
        assert_eq!(analysis.match_percentage, 61.67);
        assert_eq!(analysis.strengths, vec!["python", "sql"]);
        assert_eq!(analysis.weaknesses, vec!["aws"]);
        assert_eq!(
            analysis.overall_feedback,
            "Partial match. Some key skills are missing."
        );
    }

    #[test]
    fn test_feedback_tiers_end_to_end() {
        let matcher = JdResumeMatcher::new(WeightingScheme::SkillsSimilarity)
            .with_similarity(Arc::new(FixedSimilarity(100.0)));
        let strong = matcher.evaluate("python sql aws", "python sql aws");
        assert!(strong.summary().starts_with("Strong"), "{strong:?}");

        let matcher = matcher.with_similarity(Arc::new(FixedSimilarity(0.0)));
        let low = matcher.evaluate("html", "python sql aws");
        assert!(low.summary().starts_with("Low"), "{low:?}");
    }

    #[test]
    fn test_weighted_scheme_uses_detailed_shape() {
        let report = JdResumeMatcher::default().evaluate(RESUME, JD);
        assert!(matches!(report, MatchReport::Detailed(_)));
        let json = report.to_value().unwrap();
        assert!(json.get("explanation").is_some());
    }

    #[test]
    fn test_similarity_backend_is_swappable() {
        let matcher = JdResumeMatcher::default().with_similarity(Arc::new(FixedSimilarity(100.0)));
        let result = matcher.match_detailed("python", "python");
        assert_eq!(result.text_similarity_percentage, 100.0);
        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_custom_weights_validated() {
        let bad = ScoringWeights {
            skill: 0.5,
            experience: 0.2,
            similarity: 0.3,
        };
        assert!(JdResumeMatcher::new(WeightingScheme::SkillsSimilarity)
            .with_weights(bad)
            .is_err());

        let matcher = JdResumeMatcher::default().with_weights(bad).unwrap();
        assert_eq!(matcher.weights().skill, 0.5);
    }

    #[test]
    fn test_from_config_extends_vocabulary() {
        let config = Config {
            vocabulary: VocabularyKind::Analytics,
            extra_skills: vec!["rust".to_string()],
            ..Config::default()
        };
        let matcher = JdResumeMatcher::from_config(&config).unwrap();
        assert_eq!(matcher.vocabulary().len(), 25);

        let result = matcher.match_detailed("Rust and Tableau", "Rust, Tableau, Power BI");
        assert_eq!(result.matched_skills, vec!["rust", "tableau"]);
        assert_eq!(result.missing_skills, vec!["power bi"]);
    }

    #[test]
    fn test_custom_vocabulary_replaces_builtin() {
        let vocabulary = Vocabulary::from_terms(["rust", "tokio", "kafka"]).unwrap();
        let matcher = JdResumeMatcher::default().with_vocabulary(vocabulary);
        let result = matcher.match_detailed("Rust with Tokio, some Python", "Rust and Kafka, Python");
        assert_eq!(result.matched_skills, vec!["rust"]);
        assert_eq!(result.missing_skills, vec!["kafka"]);
    }

    #[test]
    fn test_empty_inputs_do_not_fail() {
        let result = match_resume("", "");
        assert_eq!(result.match_percentage, 30.0);
        assert_eq!(result.text_similarity_percentage, 0.0);
    }
}
