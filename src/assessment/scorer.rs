//! Scoring: recorded answers to an assessment result
//!
//! # Formulas
//!
//! ```text
//! section(s)  = (Σ answer(q) for q in s, unanswered = 0) / |s| * 20
//! overall     = (psychometric + technical + career) / 3
//!
//! recommendation:
//!   overall >= 75        -> Accept
//!   60 <= overall < 75   -> Conditional
//!   overall < 60         -> Reject
//!
//! wiscar:
//!   will = career        interest = career + 5     skill = technical - 5
//!   cognitive = psych    ability = career + 3      real_world = overall
//! ```
//!
//! The ×20 multiplier assumes 1..=5 values; single-choice indices are
//! zero-based and intensity answers reach 10, so section scores are not
//! bounded to [0, 100]. That behavior is kept exactly.

use crate::assessment::answers::AnswerSet;
use crate::assessment::result::{AssessmentResult, Recommendation, Wiscar};
use crate::catalog::{QuestionCatalog, Section};

/// Multiplier mapping a mean answer of 5 to 100
pub const SECTION_SCALE: f64 = 20.0;

/// Lower bound of the Accept band
pub const ACCEPT_THRESHOLD: f64 = 75.0;

/// Lower bound of the Conditional band
pub const CONDITIONAL_THRESHOLD: f64 = 60.0;

const INTEREST_OFFSET: f64 = 5.0;
const SKILL_OFFSET: f64 = -5.0;
const ABILITY_OFFSET: f64 = 3.0;

/// Score one section
///
/// A validated catalog never has an empty section, so the divisor is
/// always positive.
pub fn section_score(catalog: &QuestionCatalog, answers: &AnswerSet, section: Section) -> f64 {
    let (sum, count) = catalog
        .section_items(section)
        .fold((0u64, 0usize), |(sum, count), item| {
            (sum + u64::from(answers.value_or_zero(&item.id)), count + 1)
        });

    sum as f64 / count as f64 * SECTION_SCALE
}

/// Map an overall score to a recommendation band
pub fn recommendation_for(overall: f64) -> Recommendation {
    if overall >= ACCEPT_THRESHOLD {
        Recommendation::Accept
    } else if overall >= CONDITIONAL_THRESHOLD {
        Recommendation::Conditional
    } else {
        Recommendation::Reject
    }
}

/// Compute the full result for a set of answers
pub fn score(catalog: &QuestionCatalog, answers: &AnswerSet) -> AssessmentResult {
    let psychometric = section_score(catalog, answers, Section::Psychometric);
    let technical = section_score(catalog, answers, Section::Technical);
    let career = section_score(catalog, answers, Section::CareerReadiness);

    let overall = (psychometric + technical + career) / 3.0;

    AssessmentResult {
        psychometric_fit: psychometric,
        technical_readiness: technical,
        career_readiness: career,
        wiscar: Wiscar {
            will: career,
            interest: career + INTEREST_OFFSET,
            skill: technical + SKILL_OFFSET,
            cognitive: psychometric,
            ability: career + ABILITY_OFFSET,
            real_world: overall,
        },
        overall_score: overall,
        recommendation: recommendation_for(overall),
    }
}
