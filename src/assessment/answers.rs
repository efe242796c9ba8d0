//! Answer storage keyed by question id

use serde::Serialize;
use std::collections::HashMap;

/// Recorded answers for one session
///
/// Holds at most one value per question id; recording again overwrites.
/// Values are stored as given: zero-based option index for single-choice
/// items, one-based scale position otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    values: HashMap<String, u32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the value for a question
    pub fn record(&mut self, question_id: impl Into<String>, value: u32) {
        self.values.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<u32> {
        self.values.get(question_id).copied()
    }

    /// Value used by the scorer; unanswered counts as zero
    pub fn value_or_zero(&self, question_id: &str) -> u32 {
        self.get(question_id).unwrap_or(0)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (id, value) in iter {
            answers.record(id, value);
        }
        answers
    }
}
