//! Question catalog types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AssessmentError, Result};

/// Labels for the 5-point agreement scale, in value order (1..=5)
pub const AGREEMENT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// The three fixed assessment sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    CareerReadiness,
}

impl Section {
    /// All sections in scoring order
    pub const ALL: [Section; 3] = [
        Section::Psychometric,
        Section::Technical,
        Section::CareerReadiness,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Psychometric => "Psychometric Assessment",
            Section::Technical => "Technical Assessment",
            Section::CareerReadiness => "Career Readiness",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a question is answered, and what the recorded value means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerType {
    /// Pick one option; value is the zero-based option index
    SingleChoice { options: Vec<String> },

    /// 5-point agreement scale; value is 1..=5
    Agreement,

    /// 10-point intensity scale; value is 1..=10
    Intensity { low_label: String, high_label: String },
}

impl AnswerType {
    /// Smallest legal recorded value
    pub fn min_value(&self) -> u32 {
        match self {
            AnswerType::SingleChoice { .. } => 0,
            AnswerType::Agreement | AnswerType::Intensity { .. } => 1,
        }
    }

    /// Largest legal recorded value
    pub fn max_value(&self) -> u32 {
        match self {
            AnswerType::SingleChoice { options } => {
                options.len().saturating_sub(1) as u32
            }
            AnswerType::Agreement => 5,
            AnswerType::Intensity { .. } => 10,
        }
    }

    /// Check a recorded value against the type's range
    pub fn accepts(&self, value: u32) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Short name used in listings
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnswerType::SingleChoice { .. } => "single choice",
            AnswerType::Agreement => "agreement (1-5)",
            AnswerType::Intensity { .. } => "intensity (1-10)",
        }
    }
}

/// A single questionnaire item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: String,
    pub section: Section,
    pub category: String,
    pub prompt: String,
    pub answer_type: AnswerType,
}

impl QuestionItem {
    pub fn new(
        id: impl Into<String>,
        section: Section,
        category: impl Into<String>,
        prompt: impl Into<String>,
        answer_type: AnswerType,
    ) -> Self {
        Self {
            id: id.into(),
            section,
            category: category.into(),
            prompt: prompt.into(),
            answer_type,
        }
    }

    /// Agreement-scale item
    pub fn agreement(
        id: impl Into<String>,
        section: Section,
        category: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self::new(id, section, category, prompt, AnswerType::Agreement)
    }

    /// Single-choice item
    pub fn single_choice(
        id: impl Into<String>,
        section: Section,
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let options = options.iter().map(|s| s.to_string()).collect();
        Self::new(id, section, category, prompt, AnswerType::SingleChoice { options })
    }

    /// Option labels for single-choice items, empty otherwise
    pub fn options(&self) -> &[String] {
        match &self.answer_type {
            AnswerType::SingleChoice { options } => options,
            _ => &[],
        }
    }

    /// Largest legal value for this item
    pub fn max_value(&self) -> u32 {
        self.answer_type.max_value()
    }

    /// Range of numbers a person types for this item
    ///
    /// Options are numbered from 1 on screen; scales use their own values.
    pub fn input_range(&self) -> (u32, u32) {
        match &self.answer_type {
            AnswerType::SingleChoice { options } => (1, options.len() as u32),
            other => (other.min_value(), other.max_value()),
        }
    }

    /// Convert typed input into the value recorded for this item
    ///
    /// Single-choice input `n` records option index `n - 1`.
    pub fn parse_response(&self, text: &str) -> Result<u32> {
        let (low, high) = self.input_range();
        let invalid = |reason: String| AssessmentError::InvalidAnswer {
            question_id: self.id.clone(),
            value: text.to_string(),
            reason,
        };

        let number: u32 = text
            .trim()
            .parse()
            .map_err(|_| invalid(format!("expected a number between {} and {}", low, high)))?;

        if !(low..=high).contains(&number) {
            return Err(invalid(format!("expected {}-{}", low, high)));
        }

        Ok(match self.answer_type {
            AnswerType::SingleChoice { .. } => number - 1,
            _ => number,
        })
    }

    /// Number shown on screen for a recorded value
    pub fn display_number(&self, value: u32) -> u32 {
        match self.answer_type {
            AnswerType::SingleChoice { .. } => value + 1,
            _ => value,
        }
    }
}
