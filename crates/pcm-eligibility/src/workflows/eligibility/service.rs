use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::certificate::{CertificateRequest, CertificateSnapshot};
use super::domain::{CandidateId, ExperienceSubmission, Requirement};
use super::evaluation::{RequirementResolver, RuleTable};
use super::profile::{CandidateProfile, ProfileError};
use super::repository::{CandidateRepository, RepositoryError};
use super::validator::ExperienceValidator;
use super::views::{Catalogue, ExperienceReceipt, ExperienceRecordView, ProgressSummary};

/// Service running candidate sessions against the rule table.
pub struct EligibilityService<R> {
    repository: Arc<R>,
    resolver: RequirementResolver,
    validator: ExperienceValidator,
    evaluation_date: Option<NaiveDate>,
}

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:06}"))
}

impl<R> EligibilityService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_table(repository, RuleTable::standard())
    }

    pub fn with_table(repository: Arc<R>, table: RuleTable) -> Self {
        Self {
            repository,
            resolver: RequirementResolver::new(table),
            validator: ExperienceValidator,
            evaluation_date: None,
        }
    }

    /// Pin "today" instead of reading the local clock.
    pub fn with_evaluation_date(mut self, evaluation_date: Option<NaiveDate>) -> Self {
        self.evaluation_date = evaluation_date;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.evaluation_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn resolver(&self) -> &RequirementResolver {
        &self.resolver
    }

    pub fn catalogue(&self) -> Catalogue {
        Catalogue::from_table(self.resolver.table())
    }

    pub fn open_session(&self) -> Result<CandidateId, EligibilityServiceError> {
        let id = next_candidate_id();
        self.repository.insert(id.clone(), CandidateProfile::new())?;
        info!(candidate = %id, "candidate session opened");
        Ok(id)
    }

    pub fn resolve(
        &self,
        id: &CandidateId,
        exam_code: &str,
        education_code: &str,
    ) -> Result<Requirement, EligibilityServiceError> {
        let resolved = self.repository.modify(id, |profile| {
            profile
                .resolve_requirement(&self.resolver, exam_code, education_code)
                .cloned()
        })?;

        match resolved {
            Ok(requirement) => {
                info!(
                    candidate = %id,
                    exam = requirement.exam_name(),
                    required_months = requirement.required_months(),
                    "requirement resolved"
                );
                Ok(requirement)
            }
            Err(err) => {
                warn!(candidate = %id, exam_code, education_code, kind = err.kind(), "requirement rejected");
                Err(err.into())
            }
        }
    }

    pub fn record_experience(
        &self,
        id: &CandidateId,
        submission: ExperienceSubmission,
    ) -> Result<ExperienceReceipt, EligibilityServiceError> {
        let today = self.today();
        let outcome = self.repository.modify(id, |profile| {
            let record = profile.record_experience(&self.validator, submission, today)?;
            let progress = profile.progress()?;
            let record = ExperienceRecordView::from_record(profile.ledger().len(), &record);
            Ok::<_, ProfileError>(ExperienceReceipt { record, progress })
        })?;

        match outcome {
            Ok(receipt) => {
                info!(
                    candidate = %id,
                    facility = %receipt.record.facility_name,
                    months = receipt.record.duration_months,
                    total_months = receipt.progress.total_months,
                    satisfied = receipt.progress.satisfied,
                    "experience recorded"
                );
                Ok(receipt)
            }
            Err(err) => {
                warn!(candidate = %id, kind = err.kind(), %err, "experience rejected");
                Err(err.into())
            }
        }
    }

    pub fn progress(&self, id: &CandidateId) -> Result<ProgressSummary, EligibilityServiceError> {
        let profile = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile.progress()?)
    }

    pub fn issue_certificate(
        &self,
        id: &CandidateId,
        request: CertificateRequest,
    ) -> Result<CertificateSnapshot, EligibilityServiceError> {
        let issue_date = request.issue_date.unwrap_or_else(|| self.today());
        let snapshot = self
            .repository
            .modify(id, |profile| profile.issue_certificate(&request, issue_date))??;

        debug!(
            candidate = %id,
            records = snapshot.records().len(),
            issue_date = %snapshot.issue_date(),
            "certificate snapshot issued"
        );
        Ok(snapshot)
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
