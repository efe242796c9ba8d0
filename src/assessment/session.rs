//! Interactive assessment session
//!
//! Wraps the response collector with the session contract used by front
//! ends: start, current question, submit, next, previous, restart.
//!
//! State machine:
//!
//! ```text
//! InProgress --go_next on last item--> Completed
//! Completed  --restart-->              InProgress
//! InProgress --restart-->              InProgress (fresh)
//! ```
//!
//! Once completed, the result is fixed: answers are refused and navigation
//! returns the stored result until the session is restarted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assessment::answers::AnswerSet;
use crate::assessment::collector::{Advance, ResponseCollector};
use crate::assessment::result::AssessmentResult;
use crate::catalog::{QuestionCatalog, QuestionItem};
use crate::errors::{AssessmentError, Result};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Questions are being answered
    InProgress,
    /// Result produced (terminal until restart)
    Completed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed)
    }
}

/// Session behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Refuse `go_next` while the current question has no answer
    pub require_answer: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            require_answer: true,
        }
    }
}

/// What `go_next` landed on
#[derive(Debug, Clone, PartialEq)]
pub enum Step<'a> {
    Question(&'a QuestionItem),
    Completed(&'a AssessmentResult),
}

/// Progress snapshot for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    /// One-based position of the current question
    pub current: usize,
    pub total: usize,
    pub answered: usize,
    pub percent: f64,
}

/// One assessment run over a shared catalog
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    options: SessionOptions,
    state: SessionState,
    collector: ResponseCollector,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    /// Start a fresh session on the first question
    pub fn start(catalog: Arc<QuestionCatalog>, options: SessionOptions) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            options,
            state: SessionState::InProgress,
            collector: ResponseCollector::new(catalog),
            result: None,
        };
        info!(session_id = %session.id, questions = session.collector.len(), "assessment session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.collector.catalog()
    }

    pub fn current_question(&self) -> &QuestionItem {
        self.collector.current()
    }

    pub fn answers(&self) -> &AnswerSet {
        self.collector.answers()
    }

    /// Recorded value for the current question, if any
    pub fn current_answer(&self) -> Option<u32> {
        self.collector.answers().get(&self.current_question().id)
    }

    pub fn has_answer(&self, question_id: &str) -> bool {
        self.collector.has_answer(question_id)
    }

    pub fn is_first(&self) -> bool {
        self.collector.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.collector.is_last()
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            current: self.collector.position() + 1,
            total: self.collector.len(),
            answered: self.collector.answered_count(),
            percent: self.collector.progress_percent(),
        }
    }

    /// Record an answer for a catalog question
    ///
    /// Values are not range-checked here; the input boundary does that.
    pub fn submit_answer(&mut self, question_id: &str, value: u32) -> Result<()> {
        if self.state.is_terminal() {
            return Err(AssessmentError::SessionCompleted);
        }
        if !self.collector.catalog().contains(question_id) {
            return Err(AssessmentError::UnknownQuestion(question_id.to_string()));
        }

        self.collector.record_answer(question_id, value);
        debug!(session_id = %self.id, question_id, value, "answer recorded");
        Ok(())
    }

    /// Move to the next question, or finish on the last one
    pub fn go_next(&mut self) -> Result<Step<'_>> {
        if self.state.is_terminal() {
            return self.completed_step();
        }

        if self.options.require_answer && !self.collector.current_has_answer() {
            return Err(AssessmentError::NoAnswerRecorded {
                question_id: self.collector.current().id.clone(),
            });
        }

        match self.collector.advance() {
            Advance::Moved(position) => {
                debug!(session_id = %self.id, position, "advanced");
                Ok(Step::Question(self.collector.current()))
            }
            Advance::Scored(result) => {
                info!(
                    session_id = %self.id,
                    psychometric = result.psychometric_fit,
                    technical = result.technical_readiness,
                    career = result.career_readiness,
                    overall = result.overall_score,
                    recommendation = %result.recommendation,
                    "assessment completed"
                );
                self.result = Some(result);
                self.state = SessionState::Completed;
                self.completed_step()
            }
        }
    }

    /// Move back one question; no-op on the first question or once completed
    pub fn go_previous(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        let moved = self.collector.retreat();
        if moved {
            debug!(session_id = %self.id, position = self.collector.position(), "retreated");
        }
        moved
    }

    /// Discard answers and result and start over on the first question
    pub fn restart(&mut self) {
        let previous = self.id;
        self.collector.reset();
        self.result = None;
        self.state = SessionState::InProgress;
        self.id = Uuid::new_v4();
        self.started_at = Utc::now();
        info!(previous_session = %previous, session_id = %self.id, "assessment restarted");
    }

    fn completed_step(&self) -> Result<Step<'_>> {
        self.result
            .as_ref()
            .map(Step::Completed)
            .ok_or(AssessmentError::SessionCompleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::result::Recommendation;

    fn session() -> AssessmentSession {
        AssessmentSession::start(Arc::new(QuestionCatalog::builtin()), SessionOptions::default())
    }

    fn answer_all(session: &mut AssessmentSession, value: u32) -> AssessmentResult {
        loop {
            let id = session.current_question().id.clone();
            session.submit_answer(&id, value).unwrap();
            if let Step::Completed(result) = session.go_next().unwrap() {
                return result.clone();
            }
        }
    }

    #[test]
    fn test_start_state() {
        let s = session();
        assert_eq!(s.state(), SessionState::InProgress);
        assert_eq!(s.current_question().id, "psych_1");
        assert!(s.result().is_none());
        assert_eq!(s.progress().current, 1);
        assert_eq!(s.progress().total, 12);
    }

    #[test]
    fn test_go_next_requires_answer() {
        let mut s = session();
        let err = s.go_next().unwrap_err();
        assert!(matches!(err, AssessmentError::NoAnswerRecorded { .. }));
        assert_eq!(s.current_question().id, "psych_1");
    }

    #[test]
    fn test_zero_index_counts_as_answered() {
        let mut s = session();
        s.submit_answer("psych_1", 3).unwrap();
        s.go_next().unwrap();
        s.submit_answer("psych_2", 0).unwrap();
        match s.go_next().unwrap() {
            Step::Question(q) => assert_eq!(q.id, "psych_3"),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_go_next_without_enforcement() {
        let mut s = AssessmentSession::start(
            Arc::new(QuestionCatalog::builtin()),
            SessionOptions {
                require_answer: false,
            },
        );
        assert!(matches!(s.go_next().unwrap(), Step::Question(_)));
    }

    #[test]
    fn test_unknown_question_rejected() {
        let mut s = session();
        let err = s.submit_answer("nope", 1).unwrap_err();
        assert!(matches!(err, AssessmentError::UnknownQuestion(_)));
    }

    #[test]
    fn test_go_previous() {
        let mut s = session();
        assert!(!s.go_previous());
        s.submit_answer("psych_1", 4).unwrap();
        s.go_next().unwrap();
        assert!(s.go_previous());
        assert_eq!(s.current_question().id, "psych_1");
        assert_eq!(s.current_answer(), Some(4));
    }

    #[test]
    fn test_completion() {
        let mut s = session();
        let result = answer_all(&mut s, 3);
        assert_eq!(s.state(), SessionState::Completed);
        assert_eq!(s.result(), Some(&result));
        assert_eq!(result.recommendation, Recommendation::Conditional);
    }

    #[test]
    fn test_completed_session_is_frozen() {
        let mut s = session();
        let result = answer_all(&mut s, 3);

        assert!(matches!(
            s.submit_answer("psych_1", 5),
            Err(AssessmentError::SessionCompleted)
        ));
        assert!(!s.go_previous());
        match s.go_next().unwrap() {
            Step::Completed(again) => assert_eq!(again, &result),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut s = session();
        let first_id = s.id();
        let first = answer_all(&mut s, 4);

        s.restart();
        assert_eq!(s.state(), SessionState::InProgress);
        assert!(s.answers().is_empty());
        assert!(s.result().is_none());
        assert_eq!(s.current_question().id, "psych_1");
        assert_ne!(s.id(), first_id);

        let second = answer_all(&mut s, 4);
        assert_eq!(first, second);
    }
}
