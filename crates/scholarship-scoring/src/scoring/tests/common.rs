use std::sync::Arc;

use crate::scoring::domain::{
    Applicant, ApplicantRecord, ApplicationId, ApplicationStatus, BaccalaureateMention,
    StoredEvaluation,
};
use crate::scoring::engine::{FixedContentAssessor, ScoringEngine};
use crate::scoring::repository::{
    ApplicantRepository, InMemoryApplicantRepository, RepositoryError,
};
use crate::scoring::service::ScoringService;

pub(super) fn letter(chars: usize) -> String {
    "m".repeat(chars)
}

pub(super) fn strong_record() -> ApplicantRecord {
    ApplicantRecord {
        average_grade: Some(16.0),
        baccalaureate_mention: Some(BaccalaureateMention::TresBien),
        family_income: Some(800_000),
        number_of_dependents: Some(4),
        has_disability: false,
        motivation_letter: Some(letter(2500)),
    }
}

pub(super) fn applicant(suffix: &str, record: ApplicantRecord) -> Applicant {
    Applicant::new(
        ApplicationId(format!("app-{suffix}")),
        format!("Candidate {suffix}"),
        format!("{suffix}@example.org"),
        record,
    )
}

pub(super) fn fixed_engine(content: f64) -> ScoringEngine<FixedContentAssessor> {
    ScoringEngine::new(FixedContentAssessor(content))
}

pub(super) fn build_service(
    content: f64,
) -> (
    ScoringService<InMemoryApplicantRepository, FixedContentAssessor>,
    Arc<InMemoryApplicantRepository>,
) {
    let repository = Arc::new(InMemoryApplicantRepository::new());
    let service = ScoringService::new(repository.clone(), Arc::new(fixed_engine(content)));
    (service, repository)
}

pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn insert(&self, _applicant: Applicant) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn store_evaluation(
        &self,
        _id: &ApplicationId,
        _evaluation: StoredEvaluation,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: &ApplicationId,
        _status: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn unevaluated(&self, _limit: usize) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// In-memory store whose writes fail for one application.
pub(super) struct WriteFailingRepository {
    pub(super) inner: InMemoryApplicantRepository,
    pub(super) failing_id: ApplicationId,
}

impl ApplicantRepository for WriteFailingRepository {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError> {
        self.inner.insert(applicant)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Applicant>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn store_evaluation(
        &self,
        id: &ApplicationId,
        evaluation: StoredEvaluation,
    ) -> Result<(), RepositoryError> {
        if *id == self.failing_id {
            return Err(RepositoryError::Unavailable("write timed out".to_string()));
        }
        self.inner.store_evaluation(id, evaluation)
    }

    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        self.inner.update_status(id, status)
    }

    fn unevaluated(&self, limit: usize) -> Result<Vec<Applicant>, RepositoryError> {
        self.inner.unevaluated(limit)
    }
}
