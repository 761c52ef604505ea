//! Applicant scoring: the rubric engine plus the repository, service, intake,
//! and reporting pieces that surround it.

pub mod domain;
pub mod engine;
pub mod import;
pub mod report;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantRecord, ApplicationId, ApplicationStatus, BaccalaureateMention,
    StoredEvaluation, UnknownMention,
};
pub use engine::{
    ContentAssessor, FixedContentAssessor, RecommendationNote, RecommendationTier,
    Recommendations, ScoreResult, ScoringEngine, SimulatedContentAssessor,
};
pub use import::{ApplicantImporter, ImportError};
pub use report::EvaluationView;
pub use repository::{ApplicantRepository, InMemoryApplicantRepository, RepositoryError};
pub use service::{BatchInterrupted, BatchOutcome, ScoringService, ScoringServiceError};
