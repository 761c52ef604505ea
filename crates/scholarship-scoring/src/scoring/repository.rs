use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Applicant, ApplicationId, ApplicationStatus, StoredEvaluation};

/// Storage abstraction supplying applicants to the scoring service and
/// receiving its results.
pub trait ApplicantRepository: Send + Sync {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Applicant>, RepositoryError>;
    fn store_evaluation(
        &self,
        id: &ApplicationId,
        evaluation: StoredEvaluation,
    ) -> Result<(), RepositoryError>;
    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), RepositoryError>;
    /// Applications that have never been scored, oldest identifier first.
    fn unevaluated(&self, limit: usize) -> Result<Vec<Applicant>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the command line and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicantRepository {
    records: Arc<Mutex<BTreeMap<ApplicationId, Applicant>>>,
}

impl InMemoryApplicantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every stored applicant ordered by identifier.
    pub fn all(&self) -> Vec<Applicant> {
        self.lock().values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<ApplicationId, Applicant>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError> {
        let mut guard = self.lock();
        if guard.contains_key(&applicant.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(applicant.application_id.clone(), applicant.clone());
        Ok(applicant)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Applicant>, RepositoryError> {
        Ok(self.lock().get(id).cloned())
    }

    fn store_evaluation(
        &self,
        id: &ApplicationId,
        evaluation: StoredEvaluation,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.lock();
        let applicant = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        applicant.evaluation = Some(evaluation);
        Ok(())
    }

    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.lock();
        let applicant = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        applicant.status = status;
        Ok(())
    }

    fn unevaluated(&self, limit: usize) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self
            .lock()
            .values()
            .filter(|applicant| applicant.evaluation.is_none())
            .take(limit)
            .cloned()
            .collect())
    }
}
