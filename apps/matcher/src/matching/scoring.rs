use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Which score combination and report shape the matcher produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingScheme {
    /// 0.6 skill + 0.3 experience + 0.1 similarity, templated explanation.
    #[default]
    WeightedExperience,
    /// 0.7 skill + 0.3 similarity, tiered feedback.
    SkillsSimilarity,
}

impl WeightingScheme {
    pub fn weights(self) -> ScoringWeights {
        match self {
            WeightingScheme::WeightedExperience => ScoringWeights {
                skill: 0.6,
                experience: 0.3,
                similarity: 0.1,
            },
            WeightingScheme::SkillsSimilarity => ScoringWeights {
                skill: 0.7,
                experience: 0.0,
                similarity: 0.3,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightingScheme::WeightedExperience => "weighted_experience",
            WeightingScheme::SkillsSimilarity => "skills_similarity",
        }
    }
}

impl fmt::Display for WeightingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightingScheme {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted_experience" | "a" => Ok(WeightingScheme::WeightedExperience),
            "skills_similarity" | "b" => Ok(WeightingScheme::SkillsSimilarity),
            other => Err(MatchError::InvalidConfig(format!(
                "unknown match scheme '{other}' (expected 'weighted_experience' or 'skills_similarity')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
    pub similarity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        WeightingScheme::default().weights()
    }
}

impl ScoringWeights {
    /// Weights must be finite, non-negative and sum to 1.
    pub fn validate(&self) -> Result<(), MatchError> {
        let parts = [self.skill, self.experience, self.similarity];
        if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MatchError::InvalidConfig(format!(
                "weights must be finite and non-negative, got {self:?}"
            )));
        }
        let total: f64 = parts.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(MatchError::InvalidConfig(format!(
                "weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }

    /// Whether experience contributes to the score at all.
    pub fn scores_experience(&self) -> bool {
        self.experience > 0.0
    }
}

/// Share of required skills covered, 0–100. No required skills scores 0.
pub fn skill_match_percentage(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64 * 100.0
}

/// 100 when nothing is required or the candidate meets it, otherwise the ratio.
pub fn experience_match_percentage(candidate: f64, required: f64) -> f64 {
    if required <= 0.0 || candidate >= required {
        100.0
    } else {
        candidate / required * 100.0
    }
}

/// Weighted sum of the three component percentages, unrounded.
pub fn combined_score(
    weights: &ScoringWeights,
    skill: f64,
    experience: f64,
    similarity: f64,
) -> f64 {
    weights.skill * skill + weights.experience * experience + weights.similarity * similarity
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Qualitative alignment band of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Strong,
    Partial,
    Low,
}

impl FeedbackTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            FeedbackTier::Strong
        } else if score >= 50.0 {
            FeedbackTier::Partial
        } else {
            FeedbackTier::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Strong => "Strong alignment with the job requirements.",
            FeedbackTier::Partial => "Partial match. Some key skills are missing.",
            FeedbackTier::Low => "Low alignment. Significant skill gaps detected.",
        }
    }
}

/// Explanation sentence for the experience-weighted report.
pub fn explain(
    matched: usize,
    required: usize,
    candidate_years: f64,
    required_years: f64,
    similarity: f64,
) -> String {
    format!(
        "Matched {matched} out of {required} required skills. \
         Candidate experience is {} years against required {} years. \
         Text similarity score is {}%.",
        format_decimal(candidate_years),
        format_decimal(required_years),
        format_decimal(similarity),
    )
}

/// Whole numbers keep one decimal ("3.0"), others print as-is ("66.67").
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
