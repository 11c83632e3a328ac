use chrono::NaiveDate;
use serde::Serialize;

use super::certificate::{CertificateError, CertificateRequest, CertificateSnapshot};
use super::domain::{CertifierInfo, ExperienceRecord, ExperienceSubmission, Requirement};
use super::evaluation::{RequirementError, RequirementResolver};
use super::ledger::ExperienceLedger;
use super::validator::{ExperienceValidator, ExperienceViolation};
use super::views::ProgressSummary;

/// Errors surfaced by candidate session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Requirement(#[from] RequirementError),
    #[error(transparent)]
    Experience(#[from] ExperienceViolation),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
    #[error("no requirement has been resolved for this candidate yet")]
    NoActiveRequirement,
}

impl ProfileError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileError::Requirement(err) => err.kind(),
            ProfileError::Experience(err) => err.kind(),
            ProfileError::Certificate(err) => err.kind(),
            ProfileError::NoActiveRequirement => "no_active_requirement",
        }
    }
}

/// Everything known about the current candidate.
///
/// Operations either succeed completely or leave the profile untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    applicant_name: Option<String>,
    requirement: Option<Requirement>,
    ledger: ExperienceLedger,
    certifier: Option<CertifierInfo>,
    issue_date: Option<NaiveDate>,
}

impl CandidateProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applicant_name(&self) -> Option<&str> {
        self.applicant_name.as_deref()
    }

    pub fn requirement(&self) -> Option<&Requirement> {
        self.requirement.as_ref()
    }

    pub fn ledger(&self) -> &ExperienceLedger {
        &self.ledger
    }

    pub fn certifier(&self) -> Option<&CertifierInfo> {
        self.certifier.as_ref()
    }

    pub fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }

    /// Replace the active requirement. Existing records keep their category tag.
    pub fn resolve_requirement(
        &mut self,
        resolver: &RequirementResolver,
        exam_code: &str,
        education_code: &str,
    ) -> Result<&Requirement, ProfileError> {
        let requirement = resolver.resolve(exam_code, education_code)?;
        Ok(self.requirement.insert(requirement))
    }

    /// Validate a submission against the active requirement and append it.
    pub fn record_experience(
        &mut self,
        validator: &ExperienceValidator,
        submission: ExperienceSubmission,
        today: NaiveDate,
    ) -> Result<ExperienceRecord, ProfileError> {
        let requirement = self
            .requirement
            .as_ref()
            .ok_or(ProfileError::NoActiveRequirement)?;
        let record = validator.validate(submission, requirement, today)?;
        self.ledger.append(record.clone());
        Ok(record)
    }

    pub fn progress(&self) -> Result<ProgressSummary, ProfileError> {
        let requirement = self
            .requirement
            .as_ref()
            .ok_or(ProfileError::NoActiveRequirement)?;
        Ok(ProgressSummary::new(requirement, &self.ledger))
    }

    /// Freeze the current state into a certificate snapshot.
    ///
    /// Applicant and certifier details are kept on the profile once issuance succeeds.
    pub fn issue_certificate(
        &mut self,
        request: &CertificateRequest,
        issue_date: NaiveDate,
    ) -> Result<CertificateSnapshot, ProfileError> {
        let requirement = self
            .requirement
            .as_ref()
            .ok_or(ProfileError::NoActiveRequirement)?;
        request.check_complete()?;

        if !self.ledger.is_satisfied(requirement) {
            return Err(CertificateError::RequirementNotMet {
                total: self.ledger.total_as_years_months(),
                shortfall: self.ledger.shortfall_as_years_months(requirement),
            }
            .into());
        }

        let snapshot =
            CertificateSnapshot::capture(request, requirement, &self.ledger, issue_date);
        self.applicant_name = Some(snapshot.applicant_name().to_string());
        self.certifier = Some(snapshot.certifier().clone());
        self.issue_date = Some(issue_date);
        Ok(snapshot)
    }
}
