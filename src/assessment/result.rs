//! Assessment result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued recommendation derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// overall >= 75
    Accept,
    /// 60 <= overall < 75
    Conditional,
    /// overall < 60
    Reject,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Accept => "accept",
            Recommendation::Conditional => "conditional",
            Recommendation::Reject => "reject",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WISCAR breakdown (Will, Interest, Skill, Cognitive, Ability, Real-world fit)
///
/// Fields are derived from the section scores with fixed offsets and are not
/// clamped, so `interest` can exceed 100 and `skill` can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wiscar {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability: f64,
    pub real_world: f64,
}

impl Wiscar {
    /// Fields with their display labels, in display order
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("Will", self.will),
            ("Interest", self.interest),
            ("Skill", self.skill),
            ("Cognitive", self.cognitive),
            ("Ability", self.ability),
            ("Real World Fit", self.real_world),
        ]
    }
}

/// Outcome of a completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub psychometric_fit: f64,
    pub technical_readiness: f64,
    pub career_readiness: f64,
    pub wiscar: Wiscar,
    pub overall_score: f64,
    pub recommendation: Recommendation,
}

impl AssessmentResult {
    /// Aggregate shown on the career-readiness card: mean of will, interest
    /// and ability
    pub fn career_readiness_display(&self) -> f64 {
        (self.wiscar.will + self.wiscar.interest + self.wiscar.ability) / 3.0
    }
}
