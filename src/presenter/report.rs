//! Result report: display rows built from an assessment result
//!
//! The report keeps the raw, unclamped result alongside rounded display
//! percentages. Clamping to [0, 100] applies to the display values only and
//! is controlled by [`DisplayOptions::clamp_scores`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

use crate::assessment::{AssessmentResult, AssessmentSession, Recommendation};
use crate::errors::Result;
use crate::presenter::advice::{
    AlternativeCareer, Guidance, LearningResource, ALTERNATIVE_CAREERS, LEARNING_RESOURCES,
};

/// Presentation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub clamp_scores: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { clamp_scores: true }
    }
}

/// One labelled score line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub label: &'static str,
    pub detail: &'static str,
    /// Unclamped score
    pub value: f64,
    /// Rounded display percentage
    pub percent: i64,
}

impl ScoreRow {
    fn new(label: &'static str, detail: &'static str, value: f64, options: &DisplayOptions) -> Self {
        Self {
            label,
            detail,
            value,
            percent: display_percent(value, options),
        }
    }

    /// Fill fraction for a progress bar, always within [0, 1]
    pub fn fraction(&self) -> f64 {
        (self.value / 100.0).clamp(0.0, 1.0)
    }
}

/// Round half up, matching browser `Math.round`
pub fn round_percent(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn display_percent(value: f64, options: &DisplayOptions) -> i64 {
    let rounded = round_percent(value);
    if options.clamp_scores {
        rounded.clamp(0, 100)
    } else {
        rounded
    }
}

/// Everything the results screen shows
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub session_id: Option<Uuid>,
    pub assessment: Option<String>,
    pub recommendation: Recommendation,
    pub badge: &'static str,
    pub guidance: Guidance,
    pub overall_percent: i64,
    pub sections: Vec<ScoreRow>,
    pub wiscar: Vec<ScoreRow>,
    pub learning_resources: Vec<LearningResource>,
    pub alternative_careers: Vec<AlternativeCareer>,
    pub result: AssessmentResult,
}

impl Report {
    /// Build a report from a result
    pub fn build(result: &AssessmentResult, options: &DisplayOptions) -> Self {
        let recommendation = result.recommendation;

        let sections = vec![
            ScoreRow::new(
                "Psychometric Fit",
                "Personality Match",
                result.psychometric_fit,
                options,
            ),
            ScoreRow::new(
                "Technical Readiness",
                "Skills Assessment",
                result.technical_readiness,
                options,
            ),
            ScoreRow::new(
                "Career Readiness",
                "WISCAR Score",
                result.career_readiness_display(),
                options,
            ),
        ];

        let wiscar = result
            .wiscar
            .fields()
            .into_iter()
            .map(|(label, value)| ScoreRow::new(label, "", value, options))
            .collect();

        let alternative_careers = if recommendation.shows_alternatives() {
            ALTERNATIVE_CAREERS.to_vec()
        } else {
            Vec::new()
        };

        Self {
            generated_at: Utc::now(),
            session_id: None,
            assessment: None,
            recommendation,
            badge: recommendation.badge(),
            guidance: *recommendation.guidance(),
            overall_percent: display_percent(result.overall_score, options),
            sections,
            wiscar,
            learning_resources: LEARNING_RESOURCES.to_vec(),
            alternative_careers,
            result: result.clone(),
        }
    }

    /// Build from a completed session, carrying its id and catalog title
    pub fn from_session(session: &AssessmentSession, options: &DisplayOptions) -> Option<Self> {
        let result = session.result()?;
        let mut report = Self::build(result, options);
        report.session_id = Some(session.id());
        report.assessment = Some(session.catalog().title().to_string());
        Some(report)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report, creating parent directories as needed
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Wiscar;
    use tempfile::TempDir;

    fn result(career: f64, technical: f64, psychometric: f64) -> AssessmentResult {
        let overall = (career + technical + psychometric) / 3.0;
        AssessmentResult {
            psychometric_fit: psychometric,
            technical_readiness: technical,
            career_readiness: career,
            wiscar: Wiscar {
                will: career,
                interest: career + 5.0,
                skill: technical - 5.0,
                cognitive: psychometric,
                ability: career + 3.0,
                real_world: overall,
            },
            overall_score: overall,
            recommendation: crate::assessment::recommendation_for(overall),
        }
    }

    #[test]
    fn test_round_percent_half_up() {
        assert_eq!(round_percent(59.5), 60);
        assert_eq!(round_percent(59.49), 59);
        assert_eq!(round_percent(-2.5), -2);
        assert_eq!(round_percent(88.333), 88);
    }

    #[test]
    fn test_clamped_display_keeps_raw_value() {
        let report = Report::build(&result(115.0, 0.0, 80.0), &DisplayOptions::default());
        let interest = &report.wiscar[1];
        assert_eq!(interest.label, "Interest");
        assert_eq!(interest.value, 120.0);
        assert_eq!(interest.percent, 100);

        let skill = &report.wiscar[2];
        assert_eq!(skill.value, -5.0);
        assert_eq!(skill.percent, 0);
        assert_eq!(skill.fraction(), 0.0);
    }

    #[test]
    fn test_unclamped_display() {
        let options = DisplayOptions {
            clamp_scores: false,
        };
        let report = Report::build(&result(115.0, 0.0, 80.0), &options);
        assert_eq!(report.wiscar[1].percent, 120);
        assert_eq!(report.wiscar[2].percent, -5);
    }

    #[test]
    fn test_career_card_uses_wiscar_mean() {
        let report = Report::build(&result(60.0, 60.0, 60.0), &DisplayOptions::default());
        // (60 + 65 + 63) / 3 = 62.67
        assert_eq!(report.sections[2].percent, 63);
        assert_eq!(report.overall_percent, 60);
    }

    #[test]
    fn test_alternatives_only_when_not_accept() {
        let accept = Report::build(&result(90.0, 90.0, 90.0), &DisplayOptions::default());
        assert_eq!(accept.recommendation, Recommendation::Accept);
        assert!(accept.alternative_careers.is_empty());
        assert_eq!(accept.learning_resources.len(), 4);

        let reject = Report::build(&result(10.0, 10.0, 10.0), &DisplayOptions::default());
        assert_eq!(reject.alternative_careers.len(), 4);
        assert_eq!(reject.badge, "Not Recommended");
        assert_eq!(reject.guidance.title, "Consider Alternatives");
    }

    #[test]
    fn test_write_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("result.json");
        let report = Report::build(&result(60.0, 60.0, 60.0), &DisplayOptions::default());

        report.write_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["recommendation"], "conditional");
        assert_eq!(value["result"]["wiscar"]["interest"], 65.0);
    }
}
