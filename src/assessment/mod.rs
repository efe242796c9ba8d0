//! Assessment core: answer collection, scoring, and the session contract

pub mod answers;
pub mod collector;
pub mod result;
pub mod scorer;
pub mod session;

pub use answers::AnswerSet;
pub use collector::{Advance, ResponseCollector};
pub use result::{AssessmentResult, Recommendation, Wiscar};
pub use scorer::{recommendation_for, score};
pub use session::{AssessmentSession, SessionOptions, SessionProgress, SessionState, Step};
