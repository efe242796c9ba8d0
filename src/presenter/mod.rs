//! Result presentation: static guidance tables and report building

pub mod advice;
pub mod report;

pub use advice::{
    AlternativeCareer, Guidance, LearningResource, RoleOverview, ALTERNATIVE_CAREERS,
    LEARNING_RESOURCES, ROLE_OVERVIEW,
};
pub use report::{round_percent, DisplayOptions, Report, ScoreRow};
