//! Shared non-interactive assessment flow
//!
//! Drives a session from a prepared answer list the same way the REPL does:
//! answer the current question, go next, repeat until the result appears.

use std::collections::HashMap;

use crate::assessment::{AssessmentResult, AssessmentSession, Step};
use crate::catalog::QuestionCatalog;
use crate::errors::{AssessmentError, Result};

/// Parse `ID=VALUE` pairs into recorded values
///
/// VALUE uses on-screen numbering (options from 1). Later pairs for the same
/// id win.
pub fn parse_assignments(
    catalog: &QuestionCatalog,
    inputs: &[String],
) -> Result<HashMap<String, u32>> {
    let mut answers = HashMap::with_capacity(inputs.len());

    for input in inputs {
        let (id, value) = input.split_once('=').ok_or_else(|| AssessmentError::InvalidAnswer {
            question_id: input.clone(),
            value: String::new(),
            reason: "expected ID=VALUE".to_string(),
        })?;

        let id = id.trim();
        let item = catalog
            .find(id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(id.to_string()))?;

        answers.insert(item.id.clone(), item.parse_response(value)?);
    }

    Ok(answers)
}

/// Walk the session to completion with the given answers
pub fn complete_session(
    session: &mut AssessmentSession,
    answers: &HashMap<String, u32>,
) -> Result<AssessmentResult> {
    loop {
        let id = session.current_question().id.clone();
        if let Some(&value) = answers.get(&id) {
            session.submit_answer(&id, value)?;
        }

        if let Step::Completed(result) = session.go_next()? {
            return Ok(result.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{Recommendation, SessionOptions};
    use std::sync::Arc;

    fn all_inputs(catalog: &QuestionCatalog, value: &str) -> Vec<String> {
        catalog
            .items()
            .iter()
            .map(|q| format!("{}={}", q.id, value))
            .collect()
    }

    #[test]
    fn test_parse_assignments_converts_options() {
        let catalog = QuestionCatalog::builtin();
        let inputs = vec!["psych_2=1".to_string(), "psych_1 = 4".to_string()];
        let answers = parse_assignments(&catalog, &inputs).unwrap();
        assert_eq!(answers["psych_2"], 0);
        assert_eq!(answers["psych_1"], 4);
    }

    #[test]
    fn test_parse_assignments_errors() {
        let catalog = QuestionCatalog::builtin();
        assert!(matches!(
            parse_assignments(&catalog, &["psych_1".to_string()]),
            Err(AssessmentError::InvalidAnswer { .. })
        ));
        assert!(matches!(
            parse_assignments(&catalog, &["nope=1".to_string()]),
            Err(AssessmentError::UnknownQuestion(_))
        ));
        assert!(parse_assignments(&catalog, &["psych_1=7".to_string()]).is_err());
    }

    #[test]
    fn test_complete_session() {
        let catalog = Arc::new(QuestionCatalog::builtin());
        let answers = parse_assignments(&catalog, &all_inputs(&catalog, "3")).unwrap();
        let mut session = AssessmentSession::start(catalog, SessionOptions::default());

        let result = complete_session(&mut session, &answers).unwrap();

        // psych: 3+2+3+2, tech: 2+2+3+2, career: 3+3+3+2
        assert!((result.psychometric_fit - 50.0).abs() < 1e-9);
        assert!((result.technical_readiness - 45.0).abs() < 1e-9);
        assert!((result.career_readiness - 55.0).abs() < 1e-9);
        assert_eq!(result.recommendation, Recommendation::Reject);
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn test_complete_session_missing_answer() {
        let catalog = Arc::new(QuestionCatalog::builtin());
        let mut inputs = all_inputs(&catalog, "2");
        inputs.retain(|s| !s.starts_with("tech_3="));
        let answers = parse_assignments(&catalog, &inputs).unwrap();
        let mut session = AssessmentSession::start(catalog, SessionOptions::default());

        let err = complete_session(&mut session, &answers).unwrap_err();
        match err {
            AssessmentError::NoAnswerRecorded { question_id } => assert_eq!(question_id, "tech_3"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_complete_session_lenient() {
        let catalog = Arc::new(QuestionCatalog::builtin());
        let mut session = AssessmentSession::start(
            catalog,
            SessionOptions {
                require_answer: false,
            },
        );
        let result = complete_session(&mut session, &HashMap::new()).unwrap();
        assert_eq!(result.overall_score, 0.0);
    }
}
