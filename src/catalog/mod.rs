//! Question catalog
//!
//! The catalog is an immutable, ordered list of questionnaire items. It is
//! validated once at construction and then shared read-only (typically behind
//! an `Arc`) by every session.
//!
//! Invariants upheld by [`QuestionCatalog::new`]:
//! - at least one item
//! - ids are unique across the catalog
//! - every [`Section`] has at least one item
//! - single-choice items carry at least one option

pub mod builtin;
pub mod types;

pub use types::{AnswerType, QuestionItem, Section, AGREEMENT_LABELS};

use crate::errors::{AssessmentError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, validated question catalog
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    title: String,
    items: Vec<QuestionItem>,
}

impl QuestionCatalog {
    /// Build a catalog, checking its invariants
    pub fn new(title: impl Into<String>, items: Vec<QuestionItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(AssessmentError::InvalidCatalog(
                "catalog must contain at least one question".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(AssessmentError::InvalidCatalog(format!(
                    "duplicate question id '{}'",
                    item.id
                )));
            }
            if let AnswerType::SingleChoice { options } = &item.answer_type {
                if options.is_empty() {
                    return Err(AssessmentError::InvalidCatalog(format!(
                        "single-choice question '{}' has no options",
                        item.id
                    )));
                }
            }
        }

        for section in Section::ALL {
            if !items.iter().any(|item| item.section == section) {
                return Err(AssessmentError::InvalidCatalog(format!(
                    "section '{}' has no questions",
                    section
                )));
            }
        }

        Ok(Self {
            title: title.into(),
            items,
        })
    }

    /// The built-in Digital Payments Architect catalog
    pub fn builtin() -> Self {
        builtin::payments_architect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in presentation order
    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a presentation position
    pub fn get(&self, index: usize) -> Option<&QuestionItem> {
        self.items.get(index)
    }

    /// Look up an item by id
    pub fn find(&self, id: &str) -> Option<&QuestionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Items belonging to one section, in presentation order
    pub fn section_items(&self, section: Section) -> impl Iterator<Item = &QuestionItem> {
        self.items.iter().filter(move |item| item.section == section)
    }

    /// Number of items in a section (never zero)
    pub fn section_len(&self, section: Section) -> usize {
        self.section_items(section).count()
    }
}
