//! careerfit - Digital Payments Architect career assessment
//!
//! A fixed questionnaire across three sections (psychometric, technical,
//! career readiness), scored into a WISCAR breakdown and a recommendation,
//! taken interactively in the terminal.
//!
//! # Architecture
//!
//! - **catalog**: immutable, validated question set
//! - **assessment**: answer collection, scoring, session contract
//! - **presenter**: guidance tables and result reports
//! - **repl** / **cli**: terminal front end

pub mod errors;

// Re-export commonly used types
pub use errors::{AssessmentError, Result};

// Assessment core
pub mod assessment;
pub mod catalog;
pub mod presenter;

// Shared non-interactive flow
pub mod execution;

// Terminal interface
pub mod cli;
pub mod config;
pub mod logging;
pub mod repl;
