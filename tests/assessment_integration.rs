//! Assessment Integration Tests
//!
//! End-to-end checks of catalog, session, scoring and reporting through the
//! public API.

use careerfit::{
    assessment::{
        score, AnswerSet, AssessmentResult, AssessmentSession, Recommendation, SessionOptions,
        SessionState, Step,
    },
    catalog::{QuestionCatalog, QuestionItem, Section},
    config::Config,
    execution,
    presenter::{DisplayOptions, Report},
    AssessmentError,
};
use std::sync::Arc;
use tempfile::TempDir;

fn builtin() -> Arc<QuestionCatalog> {
    Arc::new(QuestionCatalog::builtin())
}

/// Four agreement items per section
fn agreement_catalog() -> Arc<QuestionCatalog> {
    let mut items = Vec::new();
    for (prefix, section) in [
        ("p", Section::Psychometric),
        ("t", Section::Technical),
        ("c", Section::CareerReadiness),
    ] {
        for n in 1..=4 {
            items.push(QuestionItem::agreement(
                format!("{}{}", prefix, n),
                section,
                "General",
                "Statement",
            ));
        }
    }
    Arc::new(QuestionCatalog::new("Agreement only", items).unwrap())
}

fn run_through(
    session: &mut AssessmentSession,
    pick: impl Fn(&QuestionItem) -> u32,
) -> AssessmentResult {
    loop {
        let item = session.current_question().clone();
        session.submit_answer(&item.id, pick(&item)).unwrap();
        if let Step::Completed(result) = session.go_next().unwrap() {
            return result.clone();
        }
    }
}

fn maximal(item: &QuestionItem) -> u32 {
    item.max_value()
}

// Scoring Tests

#[test]
fn test_all_threes_is_conditional() {
    let mut session = AssessmentSession::start(agreement_catalog(), SessionOptions::default());
    let result = run_through(&mut session, |_| 3);

    assert_eq!(result.psychometric_fit, 60.0);
    assert_eq!(result.technical_readiness, 60.0);
    assert_eq!(result.career_readiness, 60.0);
    assert_eq!(result.overall_score, 60.0);
    assert_eq!(result.recommendation, Recommendation::Conditional);
}

#[test]
fn test_builtin_maximal_answers() {
    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    let result = run_through(&mut session, maximal);

    assert_eq!(result.psychometric_fit, 80.0);
    assert_eq!(result.technical_readiness, 70.0);
    assert_eq!(result.career_readiness, 115.0);
    assert!((result.overall_score - 265.0 / 3.0).abs() < 1e-9);
    assert_eq!(result.recommendation, Recommendation::Accept);

    assert_eq!(result.wiscar.will, 115.0);
    assert_eq!(result.wiscar.interest, 120.0);
    assert_eq!(result.wiscar.skill, 65.0);
    assert_eq!(result.wiscar.cognitive, 80.0);
    assert_eq!(result.wiscar.ability, 118.0);
    assert_eq!(result.wiscar.real_world, result.overall_score);
}

#[test]
fn test_session_result_matches_direct_scoring() {
    let catalog = builtin();
    let mut session = AssessmentSession::start(catalog.clone(), SessionOptions::default());
    let result = run_through(&mut session, |item| item.max_value() / 2);

    let answers: AnswerSet = catalog
        .items()
        .iter()
        .map(|item| (item.id.clone(), item.max_value() / 2))
        .collect();
    assert_eq!(score(&catalog, &answers), result);
}

#[test]
fn test_empty_answers_score_zero() {
    let result = score(&QuestionCatalog::builtin(), &AnswerSet::new());
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.wiscar.interest, 5.0);
    assert_eq!(result.wiscar.skill, -5.0);
    assert_eq!(result.recommendation, Recommendation::Reject);
}

// Session Contract Tests

#[test]
fn test_next_requires_answer_by_default() {
    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    let err = session.go_next().err().unwrap();
    assert!(matches!(
        err,
        AssessmentError::NoAnswerRecorded { ref question_id } if question_id == "psych_1"
    ));
    assert_eq!(session.progress().current, 1);
}

#[test]
fn test_lenient_session_scores_missing_as_zero() {
    let options = SessionOptions {
        require_answer: false,
    };
    let mut session = AssessmentSession::start(agreement_catalog(), options);

    session.submit_answer("p1", 5).unwrap();
    let mut steps = 0;
    let result = loop {
        steps += 1;
        if let Step::Completed(result) = session.go_next().unwrap() {
            break result.clone();
        }
    };

    assert_eq!(steps, 12);
    assert_eq!(result.psychometric_fit, 25.0);
    assert_eq!(result.technical_readiness, 0.0);
}

#[test]
fn test_previous_keeps_answers() {
    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    assert!(!session.go_previous());

    session.submit_answer("psych_1", 4).unwrap();
    session.go_next().unwrap();
    assert!(session.go_previous());
    assert_eq!(session.current_question().id, "psych_1");
    assert_eq!(session.current_answer(), Some(4));

    // Enter on a recorded answer moves on without re-answering
    assert!(matches!(session.go_next().unwrap(), Step::Question(q) if q.id == "psych_2"));
}

#[test]
fn test_completed_session_is_frozen() {
    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    let result = run_through(&mut session, maximal);

    assert_eq!(session.state(), SessionState::Completed);
    assert!(matches!(
        session.submit_answer("psych_1", 1),
        Err(AssessmentError::SessionCompleted)
    ));
    assert!(!session.go_previous());
    assert!(matches!(session.go_next().unwrap(), Step::Completed(r) if *r == result));
}

#[test]
fn test_restart_is_deterministic() {
    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    let first_id = session.id();
    let first = run_through(&mut session, |item| item.max_value().min(3));

    session.restart();
    assert_eq!(session.state(), SessionState::InProgress);
    assert!(session.answers().is_empty());
    assert!(session.result().is_none());
    assert_eq!(session.current_question().id, "psych_1");
    assert_ne!(session.id(), first_id);

    let second = run_through(&mut session, |item| item.max_value().min(3));
    assert_eq!(first, second);
}

// Command-line Flow Tests

#[test]
fn test_assignments_drive_a_session() {
    let catalog = builtin();
    let inputs: Vec<String> = catalog
        .items()
        .iter()
        .map(|item| format!("{}=1", item.id))
        .collect();
    let answers = execution::parse_assignments(&catalog, &inputs).unwrap();

    // Single-choice "1" is the first option, recorded as 0
    assert_eq!(answers["psych_2"], 0);
    assert_eq!(answers["psych_1"], 1);

    let mut session = AssessmentSession::start(catalog, SessionOptions::default());
    let result = execution::complete_session(&mut session, &answers).unwrap();
    assert_eq!(result.recommendation, Recommendation::Reject);
    assert_eq!(session.state(), SessionState::Completed);
}

#[test]
fn test_assignment_out_of_range_is_rejected() {
    let catalog = QuestionCatalog::builtin();
    let err = execution::parse_assignments(&catalog, &["wiscar_2=11".to_string()]).unwrap_err();
    assert!(matches!(err, AssessmentError::InvalidAnswer { .. }));

    let err = execution::parse_assignments(&catalog, &["nope=1".to_string()]).unwrap_err();
    assert!(matches!(err, AssessmentError::UnknownQuestion(_)));
}

// Report Tests

#[test]
fn test_report_clamps_for_display_only() {
    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    run_through(&mut session, maximal);

    let clamped = Report::from_session(&session, &DisplayOptions::default()).unwrap();
    assert_eq!(clamped.sections[2].percent, 100);
    // Career card shows the mean of will, interest and ability
    assert!((clamped.sections[2].value - 353.0 / 3.0).abs() < 1e-9);
    assert_eq!(clamped.overall_percent, 88);
    assert!(clamped.alternative_careers.is_empty());

    let raw = Report::from_session(
        &session,
        &DisplayOptions {
            clamp_scores: false,
        },
    )
    .unwrap();
    assert_eq!(raw.sections[2].percent, 118);
    assert_eq!(raw.wiscar[1].percent, 120);
}

#[test]
fn test_report_written_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reports").join("result.json");

    let mut session = AssessmentSession::start(builtin(), SessionOptions::default());
    run_through(&mut session, |_| 1);
    let report = Report::from_session(&session, &DisplayOptions::default()).unwrap();
    report.write_json(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["recommendation"], "reject");
    assert_eq!(value["session_id"], session.id().to_string());
    assert_eq!(value["alternative_careers"].as_array().unwrap().len(), 4);
}

// Configuration Tests

#[test]
fn test_config_file_controls_session_and_display() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[session]\nrequire_answer = false\n\n[display]\nclamp_scores = false\n",
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert!(!config.session_options().require_answer);
    assert!(!config.display_options().clamp_scores);

    let mut session = AssessmentSession::start(builtin(), config.session_options());
    assert!(session.go_next().is_ok());
}
