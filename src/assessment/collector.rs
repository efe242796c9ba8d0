//! Response collector: walks the catalog and records answers
//!
//! The collector tracks a position into the catalog and the answers given so
//! far. It does not validate values and does not require an answer before
//! advancing; both checks belong to the caller.

use std::sync::Arc;

use crate::assessment::answers::AnswerSet;
use crate::assessment::result::AssessmentResult;
use crate::assessment::scorer;
use crate::catalog::{QuestionCatalog, QuestionItem};

/// Outcome of [`ResponseCollector::advance`]
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the next item, now at this position
    Moved(usize),
    /// Already on the last item; answers were scored
    Scored(AssessmentResult),
}

/// Position plus answers over a shared catalog
#[derive(Debug, Clone)]
pub struct ResponseCollector {
    catalog: Arc<QuestionCatalog>,
    position: usize,
    answers: AnswerSet,
}

impl ResponseCollector {
    /// Start on the first item with no answers
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            catalog,
            position: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Item at the current position
    pub fn current(&self) -> &QuestionItem {
        // position stays within 0..len and a catalog is never empty
        &self.catalog.items()[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.catalog.len()
    }

    /// Store or overwrite an answer
    pub fn record_answer(&mut self, item_id: impl Into<String>, value: u32) {
        self.answers.record(item_id, value);
    }

    pub fn has_answer(&self, item_id: &str) -> bool {
        self.answers.contains(item_id)
    }

    pub fn current_has_answer(&self) -> bool {
        self.has_answer(&self.current().id)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Answers recorded for ids present in the catalog
    pub fn answered_count(&self) -> usize {
        self.catalog
            .items()
            .iter()
            .filter(|item| self.answers.contains(&item.id))
            .count()
    }

    /// Presentation progress: (position + 1) / len * 100
    pub fn progress_percent(&self) -> f64 {
        (self.position + 1) as f64 / self.catalog.len() as f64 * 100.0
    }

    /// Move forward, or score when on the last item
    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            Advance::Scored(scorer::score(&self.catalog, &self.answers))
        } else {
            self.position += 1;
            Advance::Moved(self.position)
        }
    }

    /// Move back one item; no-op on the first item
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Back to the first item with no answers
    pub fn reset(&mut self) {
        self.position = 0;
        self.answers.clear();
    }
}
