use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{Applicant, ApplicationId, ApplicationStatus, StoredEvaluation};
use super::engine::{ContentAssessor, ScoreResult, ScoringEngine};
use super::repository::{ApplicantRepository, RepositoryError};

/// Service composing the repository and the scoring engine.
pub struct ScoringService<R, C> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine<C>>,
    require_complete: bool,
}

impl<R, C> ScoringService<R, C>
where
    R: ApplicantRepository + 'static,
    C: ContentAssessor + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<ScoringEngine<C>>) -> Self {
        Self {
            repository,
            engine,
            require_complete: true,
        }
    }

    /// Toggle the grade-and-letter precondition checked before scoring.
    pub fn require_complete(mut self, required: bool) -> Self {
        self.require_complete = required;
        self
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Score a stored application and persist the result onto it.
    pub fn evaluate_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ScoreResult, ScoringServiceError> {
        let applicant = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        if self.require_complete && !applicant.record.is_complete() {
            warn!(%application_id, "application lacks a grade or motivation letter");
            return Err(ScoringServiceError::InsufficientData(
                application_id.clone(),
            ));
        }

        let result = self.engine.evaluate(&applicant.record);

        self.repository.store_evaluation(
            application_id,
            StoredEvaluation {
                result: result.clone(),
                evaluated_at: Utc::now(),
            },
        )?;

        info!(
            %application_id,
            total_score = result.total_score,
            tier = result.tier.label(),
            "application evaluated"
        );

        Ok(result)
    }

    /// Score up to `limit` applications that have no stored evaluation yet.
    ///
    /// Applications failing the completeness check are reported back as
    /// skipped and do not count towards `limit`. A repository failure stops
    /// the run; the error carries what was scored and skipped before it.
    pub fn evaluate_pending(&self, limit: usize) -> Result<BatchOutcome, BatchInterrupted> {
        let mut outcome = BatchOutcome::default();
        match self.drain_pending(limit, &mut outcome) {
            Ok(()) => Ok(outcome),
            Err(source) => {
                warn!(
                    evaluated = outcome.evaluated.len(),
                    skipped = outcome.skipped.len(),
                    error = %source,
                    "pending scoring interrupted"
                );
                Err(BatchInterrupted { outcome, source })
            }
        }
    }

    fn drain_pending(
        &self,
        limit: usize,
        outcome: &mut BatchOutcome,
    ) -> Result<(), RepositoryError> {
        while outcome.evaluated.len() < limit {
            // Skipped applications stay unevaluated, so over-fetch by that many.
            let wanted = (limit - outcome.evaluated.len()).saturating_add(outcome.skipped.len());
            let candidates: Vec<Applicant> = self
                .repository
                .unevaluated(wanted)?
                .into_iter()
                .filter(|applicant| !outcome.skipped.contains(&applicant.application_id))
                .collect();
            if candidates.is_empty() {
                break;
            }

            for applicant in candidates {
                if outcome.evaluated.len() == limit {
                    break;
                }
                match self.evaluate_application(&applicant.application_id) {
                    Ok(result) => outcome.evaluated.push((applicant.application_id, result)),
                    Err(ScoringServiceError::InsufficientData(id)) => outcome.skipped.push(id),
                    Err(ScoringServiceError::Repository(err)) => return Err(err),
                }
            }
        }
        Ok(())
    }

    /// Record a reviewer's status decision.
    pub fn update_status(
        &self,
        application_id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), ScoringServiceError> {
        self.repository.update_status(application_id, status)?;
        info!(%application_id, status = status.label(), "application status updated");
        Ok(())
    }
}

/// Results of a pending-queue run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub evaluated: Vec<(ApplicationId, ScoreResult)>,
    pub skipped: Vec<ApplicationId>,
}

/// A pending-queue run stopped by a repository failure.
#[derive(Debug, thiserror::Error)]
#[error(
    "pending scoring stopped after {} evaluations and {} skips",
    .outcome.evaluated.len(),
    .outcome.skipped.len()
)]
pub struct BatchInterrupted {
    pub outcome: BatchOutcome,
    #[source]
    pub source: RepositoryError,
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("application {0} lacks the grade or motivation letter required for evaluation")]
    InsufficientData(ApplicationId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
