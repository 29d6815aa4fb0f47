use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Experience-weighted match record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub candidate_experience: f64,
    pub required_experience: f64,
    pub experience_match_percentage: f64,
    pub skill_match_percentage: f64,
    pub text_similarity_percentage: f64,
    pub explanation: String,
}

/// Skills-and-similarity analysis with tiered feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdMatchAnalysis {
    pub match_percentage: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub overall_feedback: String,
}

/// Either report shape. Serializes without a tag so the JSON keys are
/// exactly those of the inner record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchReport {
    Detailed(MatchResult),
    Analysis(JdMatchAnalysis),
}

impl MatchReport {
    pub fn match_percentage(&self) -> f64 {
        match self {
            MatchReport::Detailed(r) => r.match_percentage,
            MatchReport::Analysis(a) => a.match_percentage,
        }
    }

    /// Skills the résumé covers.
    pub fn matched_skills(&self) -> &[String] {
        match self {
            MatchReport::Detailed(r) => &r.matched_skills,
            MatchReport::Analysis(a) => &a.strengths,
        }
    }

    /// Required skills the résumé lacks.
    pub fn missing_skills(&self) -> &[String] {
        match self {
            MatchReport::Detailed(r) => &r.missing_skills,
            MatchReport::Analysis(a) => &a.weaknesses,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            MatchReport::Detailed(r) => &r.explanation,
            MatchReport::Analysis(a) => &a.overall_feedback,
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, MatchError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String, MatchError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<MatchResult> for MatchReport {
    fn from(result: MatchResult) -> Self {
        MatchReport::Detailed(result)
    }
}

impl From<JdMatchAnalysis> for MatchReport {
    fn from(analysis: JdMatchAnalysis) -> Self {
        MatchReport::Analysis(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> JdMatchAnalysis {
        JdMatchAnalysis {
            match_percentage: 82.5,
            strengths: vec!["python".into(), "sql".into()],
            weaknesses: vec!["aws".into()],
            overall_feedback: "Strong alignment with the job requirements.".into(),
        }
    }

    #[test]
    fn test_untagged_json_has_flat_keys() {
        let value = MatchReport::from(analysis()).to_value().unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["match_percentage", "overall_feedback", "strengths", "weaknesses"]
        );
        assert_eq!(obj["strengths"], serde_json::json!(["python", "sql"]));
    }

    #[test]
    fn test_accessors_follow_shape() {
        let report = MatchReport::from(analysis());
        assert_eq!(report.match_percentage(), 82.5);
        assert_eq!(report.missing_skills(), ["aws".to_string()]);
        assert!(report.summary().starts_with("Strong"));
    }

    #[test]
    fn test_detailed_json_includes_experience_fields() {
        let report = MatchReport::Detailed(MatchResult {
            match_percentage: 62.0,
            matched_skills: vec![],
            missing_skills: vec!["aws".into()],
            candidate_experience: 3.0,
            required_experience: 5.0,
            experience_match_percentage: 60.0,
            skill_match_percentage: 0.0,
            text_similarity_percentage: 20.0,
            explanation: String::new(),
        });
        let json = report.to_json().unwrap();
        assert!(json.contains("\"required_experience\":5.0"), "json: {json}");
        assert!(!json.contains("overall_feedback"));
    }
}
